use anyhow::Result;
use fontpack_core::{PackOptions, PipelineContext, StylesheetSource};

/// Print the keys of every font face in `source`.
pub fn list(source: &str, json: bool, options: PackOptions) -> Result<()> {
    let ctx = PipelineContext::new(options)?;
    let (_, registry) = ctx.load_registry(&StylesheetSource::from_arg(source))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&registry)?);
        return Ok(());
    }

    for (key, entry) in &registry {
        println!(
            "{key}\t{}\t{}\t{}\t{}",
            entry.display_family(),
            entry.charset(),
            entry.font_style(),
            entry.font_weight()
        );
    }
    println!("\n{} font faces", registry.len());
    Ok(())
}
