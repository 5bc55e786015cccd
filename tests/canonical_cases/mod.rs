//! One `test_case` per entry of the conformance fixture.
use super::{runner, TestCase};
use test_case::test_case;

#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Add a bit of chilli
source: "Add a bit of chilli\n"
"#
; "BasicDirection")]
#[test_case(r#"
result:
  metadata: {}
  steps: []
source: "-- testing comments\n"
"#
; "Comments")]
#[test_case(r#"
result:
  metadata: {}
  steps: []
source: "[- testing comments -]\n"
"#
; "BlockComments")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: thyme
      quantity: 2
      type: ingredient
      units: sprigs
source: "-- testing comments\n@thyme{2%sprigs}\n"
"#
; "CommentsWithIngredients")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: thyme
      quantity: 2
      type: ingredient
      units: sprigs
    - type: text
      value: '  and some text'
source: "@thyme{2%sprigs} -- testing comments\nand some text\n"
"#
; "CommentsAfterIngredients")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: thyme
      quantity: 2
      type: ingredient
      units: sprigs
    - type: text
      value: '  and more'
source: "@thyme{2%sprigs} [- a block -] and more\n"
"#
; "BlockCommentAfterIngredient")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Heat oven up to 200°C
source: "Heat oven up to 200°C\n"
"#
; "DirectionsWithDegrees")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Heat 5L of water
source: "Heat 5L of water\n"
"#
; "DirectionsWithNumbers")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Use 50% of it
source: "Use 50% of it\n"
"#
; "PercentInText")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: salt
      quantity: some
      type: ingredient
      units: ''
source: "@salt\n"
"#
; "IngredientImplicitQuantity")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: flour
      quantity: 125
      type: ingredient
      units: g
source: "@flour{125%g}\n"
"#
; "IngredientQuantityAndUnit")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: milk
      quantity: 0.5
      type: ingredient
      units: cup
source: "@milk{1/2%cup}\n"
"#
; "IngredientFraction")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: milk
      quantity: '01/2'
      type: ingredient
      units: cup
source: "@milk{01/2%cup}\n"
"#
; "IngredientFractionWithLeadingZero")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: hot chilli
      quantity: 3
      type: ingredient
      units: ''
source: "@hot chilli{3}\n"
"#
; "IngredientMultipleWords")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: hot chilli
      quantity: some
      type: ingredient
      units: ''
source: "@hot chilli{}\n"
"#
; "IngredientMultipleWordsNoAmount")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: chilli
      quantity: some
      type: ingredient
      units: ''
    - type: text
      value: ' cut into pieces and '
    - name: garlic
      quantity: some
      type: ingredient
      units: ''
source: "@chilli cut into pieces and @garlic\n"
"#
; "IngredientWithoutStopper")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: salt
      quantity: a pinch
      type: ingredient
      units: ''
source: "@salt{a pinch}\n"
"#
; "IngredientTextualQuantity")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: water
      quantity: 1.5
      type: ingredient
      units: l
source: "@water{1.5%l}\n"
"#
; "IngredientDecimalQuantity")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: salt
      quantity: some
      type: ingredient
      units: ''
source: "@salt{}\n"
"#
; "IngredientEmptyBraces")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: salt
      quantity: 1
      type: ingredient
      units: tsp
source: "@salt{1%tsp\n"
"#
; "IngredientUnterminatedBraces")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Top with '
    - name: salt
      quantity: some
      type: ingredient
      units: ''
    - type: text
      value: .
source: "Top with @salt.\n"
"#
; "IngredientTrailingPunctuation")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Add @ example
source: "Add @ example\n"
"#
; "InvalidIngredientSpace")]
#[test_case(r##"
result:
  metadata: {}
  steps:
  - - name: pot
      quantity: 1
      type: cookware
source: "#pot\n"
"##
; "CookwareImplicitQuantity")]
#[test_case(r##"
result:
  metadata: {}
  steps:
  - - name: frying pan
      quantity: 1
      type: cookware
source: "#frying pan{}\n"
"##
; "CookwareMultipleWords")]
#[test_case(r##"
result:
  metadata: {}
  steps:
  - - name: sieve
      quantity: 2
      type: cookware
source: "#sieve{2}\n"
"##
; "CookwareQuantity")]
#[test_case(r##"
result:
  metadata: {}
  steps:
  - - name: pans
      quantity: a few
      type: cookware
source: "#pans{a few}\n"
"##
; "CookwareTextualQuantity")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Cook in '
    - name: pot
      quantity: 1
      type: cookware
    - type: text
      value: ' with '
    - name: rice
      quantity: 200
      type: ingredient
      units: g
source: "Cook in #pot with @rice{200%g}\n"
"#
; "CookwareBeforeBracedIngredient")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Recipe # 5'
source: "Recipe # 5\n"
"#
; "InvalidSingleWordCookware")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: ''
      quantity: 25
      type: timer
      units: minutes
source: "~{25%minutes}\n"
"#
; "TimerBasic")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Boil the eggs '
    - name: eggs
      quantity: 3
      type: timer
      units: minutes
source: "Boil the eggs ~eggs{3%minutes}\n"
"#
; "TimerNamed")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - name: ''
      quantity: 0.5
      type: timer
      units: hour
source: "~{1/2%hour}\n"
"#
; "TimerFraction")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Leave to rest '
    - name: ''
      quantity: 2-3
      type: timer
      units: days
source: "Leave to rest ~{2-3%days}\n"
"#
; "TimerRange")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Set a ~ and wait.
source: "Set a ~ and wait.\n"
"#
; "InvalidTimerSpace")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Step one
  - - type: text
      value: Step two
source: "Step one\n\nStep two\n"
"#
; "MultipleSteps")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: A step, the same step.
  - - type: text
      value: A different step.
source: "A step,\nthe same step.\n\nA different step.\n"
"#
; "MultilineStep")]
#[test_case(r#"
result:
  metadata:
    servings: 4
  steps: []
source: ">> servings: 4\n"
"#
; "MetadataServings")]
#[test_case(r#"
result:
  metadata:
    cook time: 30 mins
  steps: []
source: ">> cook time: 30 mins\n"
"#
; "MetadataMultiwordKey")]
#[test_case(r#"
result:
  metadata:
    source: "https://example.org/recipe"
  steps: []
source: ">> source: https://example.org/recipe\n"
"#
; "MetadataSourceUrl")]
#[test_case(r#"
result:
  metadata:
    weight: 1.5
  steps: []
source: ">> weight: 1.5\n"
"#
; "MetadataDecimal")]
#[test_case(r#"
result:
  metadata:
    servings: 4
  steps:
  - - name: salt
      quantity: some
      type: ingredient
      units: ''
source: ">> servings: 4\n@salt\n"
"#
; "MetadataThenStep")]
#[test_case(r#"
result:
  metadata:
    servings: 4
    title: Pancakes
  steps:
  - - type: text
      value: Mix well.
source: "---\ntitle: Pancakes\nservings: 4\n---\n\nMix well.\n"
"#
; "FrontMatter")]
#[test_case(r#"
result:
  metadata:
    title: Pancakes
  steps:
  - - type: text
      value: ' Mix well.'
source: "---\ntitle: Pancakes\n---\nMix well.\n"
"#
; "FrontMatterWithoutBlankLine")]
#[test_case(r#"
result:
  metadata:
    title: The Best
  steps: []
source: "---\ntitle: \"The Best\"\n---\n"
"#
; "FrontMatterQuotedValue")]
#[test_case(r#"
result:
  metadata:
    servings: 6
  steps: []
source: "---\nservings: 2\n---\n>> servings: 6\n"
"#
; "InlineOverridesFrontMatter")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: '--- title: x'
source: "---\ntitle: x\n"
"#
; "UnterminatedFrontMatter")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: 'Mix '
    - name: flour
      quantity: 200
      type: ingredient
      units: g
    - type: text
      value: ' and '
    - name: water
      quantity: 0.5
      type: ingredient
      units: cup
    - type: text
      value: ' in a '
    - name: bowl
      quantity: 1
      type: cookware
    - type: text
      value: .
  - - type: text
      value: 'Rest for '
    - name: ''
      quantity: 10
      type: timer
      units: minutes
    - type: text
      value: .
source: "Mix @flour{200%g} and @water{1/2%cup} in a #bowl{1}.\n\nRest for ~{10%minutes}.\n"
"#
; "StepWithAllElements")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: Serve.
source: "> Best served cold.\n\nServe.\n"
"#
; "NoteLinesAreNotSteps")]
#[test_case(r#"
result:
  metadata: {}
  steps:
  - - type: text
      value: ' Dough '
  - - type: text
      value: Knead.
source: "== Dough ==\n\nKnead.\n"
"#
; "SectionHeaderLine")]
#[test_case(r#"
result:
  metadata: {}
  steps: []
source: ""
"#
; "Empty")]
#[test_case(r#"
result:
  metadata: {}
  steps: []
source: "\n\n\n"
"#
; "EmptyLines")]
fn canonical(input: &str) {
    let test_case: TestCase = serde_yaml::from_str(input).expect("Bad YAML input");
    runner(test_case);
}
