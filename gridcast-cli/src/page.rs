//! Page layout documents and rendering them to output.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use gridcast_api::{Dimensions, FRAME_TEXT_COMMAND, FrameId, TextRun};
use gridcast_raster::FrameBuilder;
use serde::Deserialize;

use crate::cli::Args;

/// Geometry and text runs for one page, as produced by the browser side.
#[derive(Debug, Default, Deserialize)]
pub struct PageLayout {
    #[serde(default)]
    pub dimensions: Dimensions,
    #[serde(default)]
    pub runs: Vec<TextRun>,
}

impl PageLayout {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read a document from a file, or stdin for `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let json = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read page layout from stdin")?;
            buf
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read page layout: {}", path.display()))?
        };
        Self::from_json(&json).with_context(|| format!("invalid page layout: {}", path.display()))
    }
}

/// Build the page's frame and format it for output.
///
/// Returns `None` for a frame with no text unless `--force` was given.
pub fn render(args: &Args, page: &PageLayout) -> Result<Option<String>> {
    let mut dims = page.dimensions;
    args.apply_overrides(&mut dims);

    let mut builder = FrameBuilder::new(args.builder_config());
    let frame = builder
        .build(FrameId(args.frame_id), &dims, &page.runs)
        .context("failed to build frame")?;

    if !frame.is_worth_sending() && !args.force {
        tracing::info!(frame = args.frame_id, "page has no text, nothing to send");
        return Ok(None);
    }

    if args.plain {
        return Ok(Some(builder.grid().to_text(dims.frame.width, dims.frame.text_rows())));
    }

    let prefix = if args.framed { FRAME_TEXT_COMMAND } else { "" };
    let mut wire = frame.to_wire(prefix).context("failed to serialize frame")?;
    wire.push('\n');
    Ok(Some(wire))
}
