//! Gridcast - offline frame builder.
//!
//! Reads a page layout document, rasterizes it, and writes the frame to
//! stdout. Logs go to stderr.

mod cli;
mod logging;
mod page;

use anyhow::Result;
use clap::Parser;

use crate::cli::Args;
use crate::logging::setup_logging;
use crate::page::PageLayout;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let page = PageLayout::load(&args.input)?;
    tracing::info!(runs = page.runs.len(), "loaded page layout");

    if let Some(output) = page::render(&args, &page)? {
        print!("{output}");
    }
    Ok(())
}
