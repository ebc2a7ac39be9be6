use std::path::Path;

use anyhow::Result;
use fontpack_core::{PackOptions, PipelineContext, Selector, StylesheetSource};

/// Package the selected fonts of `source` into `out_dir`.
pub fn pack(source: &str, selector: &Selector, out_dir: &Path, options: PackOptions) -> Result<()> {
    let ctx = PipelineContext::new(options)?;
    ctx.run(&StylesheetSource::from_arg(source), selector, out_dir)?;
    Ok(())
}
