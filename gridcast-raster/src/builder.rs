//! Frame builder - runs the whole pipeline for one frame.
//!
//! For every run, in discovery order: normalize the text, then track it
//! through its boxes and write the cells into the grid. Once all runs are
//! in, the grid is flattened into a frame. Later runs overwrite earlier ones
//! on the same cell.

use gridcast_api::{Dimensions, Frame, FrameId, TextRun};
use gridcast_term::SparseGrid;

use crate::RasterError;
use crate::normalize::{FirstRunTracker, normalize};
use crate::serialize::serialize;
use crate::snap::Snapper;
use crate::tracker::{CharTracker, RunContext, RunOutcome};

/// Builder behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Swallow the whitespace a line wrapped on.
    pub elide_wrap_whitespace: bool,
    /// Normalize run text before tracking. Off when the caller already did.
    pub normalize: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            elide_wrap_whitespace: true,
            normalize: true,
        }
    }
}

/// Builds frames one at a time.
///
/// The grid and first-run set are reset at the start of every build, so a
/// builder can be reused across frames without leaking state between them.
#[derive(Debug, Default)]
pub struct FrameBuilder {
    config: BuilderConfig,
    grid: SparseGrid,
    first_runs: FirstRunTracker,
}

impl FrameBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            grid: SparseGrid::new(),
            first_runs: FirstRunTracker::new(),
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// The grid from the last successful build.
    pub fn grid(&self) -> &SparseGrid {
        &self.grid
    }

    /// Rasterize `runs` and serialize the result.
    ///
    /// A geometry fault in any run aborts the whole frame and leaves the grid
    /// empty.
    pub fn build(
        &mut self,
        id: FrameId,
        dims: &Dimensions,
        runs: &[TextRun],
    ) -> Result<Frame, RasterError> {
        self.grid.clear();
        self.first_runs.clear();

        let snapper = Snapper::from_dimensions(dims)?;
        let tracker = CharTracker::new(&snapper, self.config.elide_wrap_whitespace);

        let mut total = RunOutcome::default();
        for (index, run) in runs.iter().enumerate() {
            let seen_first = self.first_runs.observe(run.element);
            let first_in_element = run.first_in_element.unwrap_or(seen_first);

            let text = if self.config.normalize {
                normalize(&run.text, first_in_element)
            } else {
                run.text.clone()
            };
            let chars: Vec<char> = text.chars().collect();
            let context = RunContext {
                index,
                chars: &chars,
                element: run.element,
                colour: run.colour,
            };

            let grid = &mut self.grid;
            let result = tracker.track_run(&context, &run.boxes, &mut |cell| {
                grid.insert(cell);
            });
            match result {
                Ok(outcome) => total += outcome,
                Err(err) => {
                    tracing::warn!(
                        run = index,
                        element = run.element.0,
                        text = %text,
                        "geometry does not match text: {}",
                        err
                    );
                    self.grid.clear();
                    return Err(err);
                }
            }
        }

        let frame = serialize(&self.grid, id, dims.frame);
        let glyphs = frame.glyph_count();
        tracing::debug!(
            frame = id.0,
            runs = runs.len(),
            cells = self.grid.len(),
            emitted = total.emitted,
            elided = total.elided,
            glyphs,
            "built frame"
        );
        if glyphs == 0 {
            tracing::warn!(frame = id.0, "frame has no text, not worth sending");
        }
        Ok(frame)
    }
}

/// Build a single frame with the default configuration.
pub fn build_frame(
    id: FrameId,
    dims: &Dimensions,
    runs: &[TextRun],
) -> Result<Frame, RasterError> {
    FrameBuilder::default().build(id, dims, runs)
}
