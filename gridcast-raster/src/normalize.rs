//! Whitespace normalization for text runs.
//!
//! Markup whitespace (indentation, source line breaks) is still present in
//! text content even though layout collapses it. Runs are cleaned up before
//! tracking so that characters line up with what was actually drawn.

use std::collections::HashSet;

use gridcast_api::ElementId;

/// Whitespace that layout collapses: space, tab, newline, carriage return.
pub fn is_collapsible_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Collapse and trim a raw run.
///
/// Every maximal run of collapsible whitespace becomes one space. One
/// leading space is dropped only for the first run in an element; one
/// trailing space is always dropped.
pub fn normalize(raw: &str, first_in_element: bool) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if is_collapsible_whitespace(c) {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }

    if first_in_element && out.starts_with(' ') {
        out.remove(0);
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Remembers which elements have already had a run.
#[derive(Debug, Default)]
pub struct FirstRunTracker {
    seen: HashSet<ElementId>,
}

impl FirstRunTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a run of `element`, returning true if it is the element's first.
    pub fn observe(&mut self, element: ElementId) -> bool {
        self.seen.insert(element)
    }

    pub fn clear(&mut self) {
        self.seen.clear();
    }
}
