//! Character tracker - walks a run's text and boxes in lock-step.
//!
//! Each rendering box is stepped once per snapped cell. A step either places
//! the current character at the grid cursor or, on the first step of a box
//! that starts a new visual line, swallows the whitespace character the
//! layout engine wrapped on (it has no rendered width).

use gridcast_api::{ElementId, RenderBox, Rgb};
use gridcast_term::{Cell, DomPos, GridPos};

use crate::RasterError;
use crate::normalize::is_collapsible_whitespace;
use crate::snap::{GridBox, Snapper};

/// A run ready to be tracked.
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    /// Position of the run in discovery order.
    pub index: usize,
    /// Normalized characters.
    pub chars: &'a [char],
    pub element: ElementId,
    pub colour: Rgb,
}

/// Cursors for one run. Starts fresh for every run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    /// Next character to place.
    pub char_index: usize,
    /// Pixel cursor, document-relative.
    pub dom: DomPos,
    /// Cell cursor.
    pub grid: GridPos,
    /// Snapped row of the previous box, if any.
    pub previous_row: Option<i64>,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point both cursors at the start of a box and note whether it wraps.
    fn enter_box(&mut self, grid_box: &GridBox, origin: DomPos) -> bool {
        let new_line = self.previous_row.is_some_and(|previous| grid_box.row > previous);
        self.previous_row = Some(grid_box.row);
        self.dom = origin;
        self.grid = GridPos::new(grid_box.row, grid_box.col_start);
        new_line
    }
}

/// What tracking one box or run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Cells handed to the sink.
    pub emitted: usize,
    /// Wrap whitespace consumed without a cell.
    pub elided: usize,
}

impl std::ops::AddAssign for RunOutcome {
    fn add_assign(&mut self, other: Self) {
        self.emitted += other.emitted;
        self.elided += other.elided;
    }
}

/// Steps runs through their boxes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct CharTracker<'a> {
    snapper: &'a Snapper,
    elide_wrap_whitespace: bool,
}

impl<'a> CharTracker<'a> {
    pub fn new(snapper: &'a Snapper, elide_wrap_whitespace: bool) -> Self {
        Self {
            snapper,
            elide_wrap_whitespace,
        }
    }

    /// Track every box of a run, passing each produced cell to `emit`.
    pub fn track_run<F>(
        &self,
        run: &RunContext<'_>,
        boxes: &[RenderBox],
        emit: &mut F,
    ) -> Result<RunOutcome, RasterError>
    where
        F: FnMut(Cell),
    {
        let mut state = TrackerState::new();
        let mut outcome = RunOutcome::default();
        for (box_index, render_box) in boxes.iter().enumerate() {
            outcome += self.step_box(&mut state, run, box_index, render_box, emit)?;
        }
        tracing::trace!(
            run = run.index,
            boxes = boxes.len(),
            emitted = outcome.emitted,
            elided = outcome.elided,
            left_over = run.chars.len() - state.char_index,
            "tracked run"
        );
        Ok(outcome)
    }

    /// Advance `state` across one box.
    pub fn step_box<F>(
        &self,
        state: &mut TrackerState,
        run: &RunContext<'_>,
        box_index: usize,
        render_box: &RenderBox,
        emit: &mut F,
    ) -> Result<RunOutcome, RasterError>
    where
        F: FnMut(Cell),
    {
        let grid_box = self.snapper.snap(render_box);
        let new_line = state.enter_box(&grid_box, self.snapper.absolute(render_box));
        let char_width = self.snapper.char_size().width;

        let mut outcome = RunOutcome::default();
        for step in 0..grid_box.width {
            let Some(&c) = run.chars.get(state.char_index) else {
                return Err(RasterError::TextExhausted {
                    run: run.index,
                    box_index,
                    consumed: state.char_index,
                    len: run.chars.len(),
                });
            };

            if step == 0 && new_line && self.elide_wrap_whitespace && is_collapsible_whitespace(c)
            {
                state.char_index += 1;
                outcome.elided += 1;
                continue;
            }

            emit(Cell::new(c, run.colour, state.grid, state.dom, run.element));
            state.char_index += 1;
            state.dom.x += char_width;
            state.grid.col += 1;
            outcome.emitted += 1;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridcast_api::{CharSize, DomScroll};

    fn snapper() -> Snapper {
        Snapper::new(CharSize { width: 8.0, height: 16.0 }, DomScroll::default()).unwrap()
    }

    fn track(
        text: &str,
        boxes: &[RenderBox],
        elide: bool,
    ) -> Result<(Vec<Cell>, RunOutcome), RasterError> {
        let chars: Vec<char> = text.chars().collect();
        let run = RunContext {
            index: 0,
            chars: &chars,
            element: ElementId(1),
            colour: Rgb(9, 9, 9),
        };
        let snapper = snapper();
        let tracker = CharTracker::new(&snapper, elide);
        let mut cells = Vec::new();
        let outcome = tracker.track_run(&run, boxes, &mut |cell| cells.push(cell))?;
        Ok((cells, outcome))
    }

    #[test]
    fn test_fresh_state_starts_at_origin() {
        let state = TrackerState::new();
        assert_eq!(state.char_index, 0);
        assert_eq!(state.grid, GridPos::new(0, 0));
        assert_eq!(state.dom, DomPos::default());
        assert_eq!(state.previous_row, None);
    }

    #[test]
    fn test_single_box() {
        let (cells, outcome) = track("Hello world", &[RenderBox::new(0.0, 0.0, 88.0)], true).unwrap();

        assert_eq!(outcome, RunOutcome { emitted: 11, elided: 0 });
        let glyphs: String = cells.iter().map(|c| c.glyph).collect();
        assert_eq!(glyphs, "Hello world");
        for (col, cell) in cells.iter().enumerate() {
            assert_eq!(cell.pos, GridPos::new(0, col as i64));
            assert_eq!(cell.dom, DomPos { x: col as f64 * 8.0, y: 0.0 });
            assert_eq!(cell.fg, Rgb(9, 9, 9));
            assert_eq!(cell.owner, ElementId(1));
        }
    }

    #[test]
    fn test_wrap_elides_space() {
        let boxes = [RenderBox::new(0.0, 0.0, 40.0), RenderBox::new(16.0, 0.0, 48.0)];
        let (cells, outcome) = track("Hello world", &boxes, true).unwrap();

        assert_eq!(outcome, RunOutcome { emitted: 10, elided: 1 });
        assert!(cells.iter().all(|c| c.glyph != ' '));
        let second: String = cells.iter().filter(|c| c.pos.row == 1).map(|c| c.glyph).collect();
        assert_eq!(second, "world");
        assert_eq!(cells[5].pos, GridPos::new(1, 0));
        assert_eq!(cells[5].dom, DomPos { x: 0.0, y: 16.0 });
    }

    #[test]
    fn test_same_line_box_keeps_space() {
        // An inline sibling on the same row: no wrap, so the space is placed.
        let boxes = [RenderBox::new(0.0, 0.0, 40.0), RenderBox::new(0.0, 48.0, 48.0)];
        let (cells, outcome) = track("Hello world", &boxes, true).unwrap();

        assert_eq!(outcome.elided, 0);
        assert_eq!(cells[5].glyph, ' ');
        assert_eq!(cells[5].pos, GridPos::new(0, 6));
    }

    #[test]
    fn test_box_moving_up_is_not_a_wrap() {
        let boxes = [RenderBox::new(16.0, 0.0, 8.0), RenderBox::new(0.0, 0.0, 16.0)];
        let (cells, outcome) = track("a b", &boxes, true).unwrap();

        assert_eq!(outcome.elided, 0);
        assert_eq!(cells[1].glyph, ' ');
        assert_eq!(cells[1].pos, GridPos::new(0, 0));
    }

    #[test]
    fn test_elision_can_be_disabled() {
        let boxes = [RenderBox::new(0.0, 0.0, 40.0), RenderBox::new(16.0, 0.0, 48.0)];
        let (cells, outcome) = track("Hello world", &boxes, false).unwrap();

        assert_eq!(outcome, RunOutcome { emitted: 11, elided: 0 });
        assert_eq!(cells[5].glyph, ' ');
        assert_eq!(cells[5].pos, GridPos::new(1, 0));
    }

    #[test]
    fn test_text_exhausted_is_an_error() {
        let err = track("abc", &[RenderBox::new(0.0, 0.0, 40.0)], true).unwrap_err();
        assert_eq!(
            err,
            RasterError::TextExhausted {
                run: 0,
                box_index: 0,
                consumed: 3,
                len: 3,
            }
        );
    }

    #[test]
    fn test_zero_width_box_still_sets_previous_row() {
        let mut state = TrackerState::new();
        let chars: Vec<char> = " x".chars().collect();
        let run = RunContext {
            index: 0,
            chars: &chars,
            element: ElementId(1),
            colour: Rgb::BLACK,
        };
        let snapper = snapper();
        let tracker = CharTracker::new(&snapper, true);
        let mut cells = Vec::new();
        let mut sink = |cell: Cell| cells.push(cell);

        tracker
            .step_box(&mut state, &run, 0, &RenderBox::new(0.0, 0.0, 0.0), &mut sink)
            .unwrap();
        assert_eq!(state.previous_row, Some(0));

        let outcome = tracker
            .step_box(&mut state, &run, 1, &RenderBox::new(32.0, 0.0, 16.0), &mut sink)
            .unwrap();
        assert_eq!(outcome, RunOutcome { emitted: 1, elided: 1 });
        assert_eq!(state.char_index, 2);
        assert_eq!(cells[0].pos, GridPos::new(2, 0));
    }
}
