use std::path::PathBuf;

use clap::Parser;
use gridcast_api::Dimensions;
use gridcast_raster::BuilderConfig;

#[derive(Parser, Debug)]
#[command(
    name = "gridcast",
    about = "Rasterize a page layout into a monospace text frame"
)]
pub struct Args {
    /// Page layout document (JSON), or `-` for stdin.
    #[arg(value_name = "FILE", default_value = "-")]
    pub input: PathBuf,

    /// Identifier written into the frame.
    #[arg(long, default_value_t = 1)]
    pub frame_id: u64,

    /// Character cell width in pixels.
    #[arg(long, value_name = "PX")]
    pub char_width: Option<f64>,

    /// Character cell height in pixels.
    #[arg(long, value_name = "PX")]
    pub char_height: Option<f64>,

    /// Horizontal document scroll offset in pixels.
    #[arg(long, value_name = "PX")]
    pub x_scroll: Option<f64>,

    /// Vertical document scroll offset in pixels.
    #[arg(long, value_name = "PX")]
    pub y_scroll: Option<f64>,

    /// Frame width in cells.
    #[arg(long, value_name = "CELLS")]
    pub width: Option<u32>,

    /// Frame height in colour rows (two per text row).
    #[arg(long, value_name = "ROWS")]
    pub height: Option<u32>,

    /// Prefix the JSON with the `/frame_text,` wire command.
    #[arg(long, conflicts_with = "plain")]
    pub framed: bool,

    /// Print the grid as plain text instead of JSON.
    #[arg(long)]
    pub plain: bool,

    /// Emit the frame even when it has no text.
    #[arg(long)]
    pub force: bool,

    /// Run text is already normalized.
    #[arg(long)]
    pub no_normalize: bool,

    /// Place wrap whitespace instead of eliding it.
    #[arg(long)]
    pub keep_wrap_whitespace: bool,

    /// Verbose logging (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Apply command line geometry on top of the document's.
    pub fn apply_overrides(&self, dims: &mut Dimensions) {
        if let Some(width) = self.char_width {
            dims.char_size.width = width;
        }
        if let Some(height) = self.char_height {
            dims.char_size.height = height;
        }
        if let Some(x_scroll) = self.x_scroll {
            dims.dom.x_scroll = x_scroll;
        }
        if let Some(y_scroll) = self.y_scroll {
            dims.dom.y_scroll = y_scroll;
        }
        if let Some(width) = self.width {
            dims.frame.width = width;
        }
        if let Some(height) = self.height {
            dims.frame.height = height;
        }
    }

    pub fn builder_config(&self) -> BuilderConfig {
        BuilderConfig {
            elide_wrap_whitespace: !self.keep_wrap_whitespace,
            normalize: !self.no_normalize,
        }
    }
}
