//! Text runs as reported by the layout engine.

use serde::{Deserialize, Serialize};

use crate::RenderBox;

/// Opaque handle to the element a run was discovered in.
///
/// Only used for attribution and first-run tracking; holding one never keeps
/// the element alive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// An RGB colour triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn components(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// One text node's content plus the boxes it was laid out into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Element the run belongs to.
    pub element: ElementId,
    /// Raw text content, before whitespace normalization.
    pub text: String,
    /// Foreground colour every cell of this run is drawn with.
    #[serde(default)]
    pub colour: Rgb,
    /// Rendering boxes in the order the layout engine reports them.
    pub boxes: Vec<RenderBox>,
    /// Whether this is the first run within its element.
    ///
    /// `None` lets the builder work it out from element identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_in_element: Option<bool>,
}

impl TextRun {
    pub fn new(element: ElementId, text: impl Into<String>, boxes: Vec<RenderBox>) -> Self {
        Self {
            element,
            text: text.into(),
            colour: Rgb::default(),
            boxes,
            first_in_element: None,
        }
    }

    pub fn with_colour(mut self, colour: Rgb) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_first_in_element(mut self, first: bool) -> Self {
        self.first_in_element = Some(first);
        self
    }
}
