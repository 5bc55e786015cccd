//! Recipe representation

use serde::{Deserialize, Serialize};

use crate::{metadata::Metadata, quantity::Value};

/// A complete parsed recipe
///
/// This is the terminal artifact of one [`parse`](crate::parse) call. It is
/// built once by the parser and has no mutation API; the aggregate lists are
/// always present, possibly empty.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Recipe {
    /// All the ingredients, deduplicated by `(name, quantity, unit)`
    pub ingredients: Vec<Ingredient>,
    /// All the cookware, deduplicated by name
    pub cookware: Vec<Cookware>,
    /// All the timers, in step order, never deduplicated
    pub timers: Vec<Timer>,
    /// Each of the steps
    pub steps: Vec<Step>,
    /// Metadata
    pub metadata: Metadata,
    /// Named sections
    ///
    /// Collected for their names only; steps are not grouped under them.
    pub sections: Vec<Section>,
    /// `>` note lines
    pub notes: Vec<Note>,
}

/// A named grouping of a recipe
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Section {
    /// Name of the section
    pub name: Option<String>,
    /// Steps inside; stays empty, see [`Recipe::sections`]
    pub steps: Vec<Step>,
}

impl Section {
    pub(crate) fn new(name: Option<String>) -> Section {
        Self {
            name,
            steps: Vec::new(),
        }
    }
}

/// A step holding its [`Segment`]s
#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
pub struct Step {
    /// Segments inside, in source order
    pub segments: Vec<Segment>,
}

impl Step {
    pub(crate) fn new(segments: Vec<Segment>) -> Step {
        Self { segments }
    }

    /// Renders the step as plain text.
    ///
    /// Ingredients and cookware render by name. A timer renders as
    /// `"name for duration unit"`, `"for duration unit"` when it has no
    /// name, or `"timer"` when it has neither. The result is right-trimmed.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text { value } => out.push_str(value),
                Segment::Ingredient { value } => out.push_str(&value.name),
                Segment::Cookware { value } => out.push_str(&value.name),
                Segment::Timer { value } => out.push_str(&value.to_plain_text()),
            }
        }
        out.truncate(out.trim_end().len());
        out
    }
}

/// One atomic piece of a step's content
///
/// Either plain text or an element reference. Elements are held by value;
/// a step owns its references. Adjacent text segments are kept separate,
/// one per source token.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    /// Just plain text
    Text { value: String },
    /// An inline ingredient reference
    Ingredient {
        #[serde(flatten)]
        value: Ingredient,
    },
    /// An inline cookware reference
    Cookware {
        #[serde(flatten)]
        value: Cookware,
    },
    /// An inline timer reference
    Timer {
        #[serde(flatten)]
        value: Timer,
    },
}

impl Segment {
    pub(crate) fn text(value: impl Into<String>) -> Self {
        Segment::Text {
            value: value.into(),
        }
    }

    pub(crate) fn is_whitespace_text(&self) -> bool {
        match self {
            Segment::Text { value } => value.trim().is_empty(),
            _ => false,
        }
    }
}

/// A recipe ingredient
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Ingredient {
    /// Name
    pub name: String,
    /// Quantity; `"some"` when the source gives neither quantity nor unit
    pub quantity: Option<Value>,
    /// Unit, the part after `%` inside the braces
    pub unit: Option<String>,
    /// Preparation notes from a trailing `( … )`
    pub notes: Option<String>,
}

impl Ingredient {
    /// The dedup identity: two ingredients are the same entry when name,
    /// quantity and unit all match.
    pub(crate) fn same_entry(&self, other: &Ingredient) -> bool {
        self.name == other.name && self.quantity == other.quantity && self.unit == other.unit
    }
}

/// A recipe cookware item
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Cookware {
    /// Name
    pub name: String,
    /// Amount needed, `1` when the source gives none
    pub quantity: Option<Value>,
}

/// A recipe timer
///
/// Any of the fields can be missing; `~{}` alone is a valid, empty timer.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Timer {
    /// Name
    pub name: Option<String>,
    /// Duration value
    pub duration: Option<Value>,
    /// Time unit, the part after `%` inside the braces
    pub unit: Option<String>,
}

impl Timer {
    fn to_plain_text(&self) -> String {
        let duration = self
            .duration
            .as_ref()
            .map(Value::to_string)
            .unwrap_or_default();
        let unit = self.unit.as_deref().unwrap_or_default();
        match &self.name {
            Some(name) => format!("{name} for {duration} {unit}"),
            None if self.duration.is_some() && self.unit.is_some() => {
                format!("for {duration} {unit}")
            }
            None => "timer".to_string(),
        }
    }
}

/// A free text `>` note
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Note {
    /// Trimmed note text
    pub content: String,
}
