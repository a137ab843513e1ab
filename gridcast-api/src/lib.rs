//! Gridcast API - Shared geometry, run, and frame types.
//!
//! These are the values exchanged with the surrounding terminal-browser
//! bridge: layout geometry comes in, a serialized frame goes out.

mod frame;
mod geometry;
mod run;

pub use frame::*;
pub use geometry::*;
pub use run::*;
