//! Gridcast Raster - Layout-to-grid rasterization.
//!
//! Turns proportionally rendered text runs into a monospace frame:
//! - Normalizer (whitespace collapsing and trimming)
//! - Snapper (pixel boxes to grid boxes)
//! - Tracker (walks text and boxes in lock-step, emitting cells)
//! - Serializer (grid to fixed-size frame)
//! - Builder (drives all of the above for one frame)

pub mod builder;
pub mod normalize;
pub mod serialize;
pub mod snap;
pub mod tracker;

mod error;

pub use builder::{BuilderConfig, FrameBuilder, build_frame};
pub use error::RasterError;
pub use normalize::{FirstRunTracker, normalize};
pub use serialize::serialize;
pub use snap::{GridBox, Snapper};
pub use tracker::{CharTracker, RunContext, RunOutcome, TrackerState};
