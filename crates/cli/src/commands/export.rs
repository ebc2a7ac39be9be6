//! Offline regeneration: only the stylesheet itself is fetched.

use anyhow::Result;
use fontpack_core::{
    FontRegistry, PackOptions, PipelineContext, Selector, StylesheetSource, to_css,
    to_manifest_string,
};

fn selection(source: &str, selector: &Selector, ctx: &PipelineContext) -> Result<FontRegistry> {
    let (_, registry) = ctx.load_registry(&StylesheetSource::from_arg(source))?;
    Ok(selector.apply(&registry)?)
}

pub fn css(source: &str, selector: &Selector, options: PackOptions) -> Result<()> {
    let ctx = PipelineContext::new(options)?;
    let selection = selection(source, selector, &ctx)?;
    print!("{}", to_css(&selection, &ctx.options.css)?);
    Ok(())
}

pub fn manifest(source: &str, selector: &Selector, options: PackOptions) -> Result<()> {
    let ctx = PipelineContext::new(options)?;
    let selection = selection(source, selector, &ctx)?;
    println!("{}", to_manifest_string(&selection, &ctx.options.manifest)?);
    Ok(())
}
