//! Stylesheet to font package pipeline.

mod package;
mod select;
mod source;

pub use package::Package;
pub use select::Selector;
pub use source::{StylesheetSource, load_registry, load_stylesheet};

use std::{path::Path, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use font_archive::{ArchiveBuilder, FetchOptions, Fetcher, HttpFetcher};
use font_export::{CssOptions, ManifestOptions, to_css, to_manifest_string};
use font_face::FontRegistry;
use log::info;

/// Settings for one packaging run.
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    pub fetch: FetchOptions,
    pub css: CssOptions,
    pub manifest: ManifestOptions,
    /// Download worker limit. One worker per font when `None`.
    pub max_concurrency: Option<usize>,
}

/// Download, archive and regenerate outputs for `selection`.
pub fn pack(
    selection: &FontRegistry,
    fetcher: Arc<dyn Fetcher>,
    options: &PackOptions,
) -> Result<Package> {
    selection.ensure_not_empty().context("error building archive")?;
    let css = to_css(selection, &options.css)?;
    let manifest = to_manifest_string(selection, &options.manifest)?;

    let mut builder = ArchiveBuilder::new(fetcher);
    if let Some(limit) = options.max_concurrency {
        builder = builder.max_concurrency(limit);
    }
    let archive = builder.build(selection).context("error building archive")?;

    info!("Packed {} fonts into {} bytes", selection.len(), archive.len());
    Ok(Package { archive, css, manifest })
}

pub struct PipelineContext {
    pub fetcher: Arc<dyn Fetcher>,
    pub options: PackOptions,
}

impl PipelineContext {
    /// Create a context fetching over HTTP with `options.fetch`.
    pub fn new(options: PackOptions) -> Result<Self> {
        let fetcher = HttpFetcher::new(&options.fetch).context("Failed to create HTTP client")?;
        Ok(Self::with_fetcher(Arc::new(fetcher), options))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>, options: PackOptions) -> Self {
        Self { fetcher, options }
    }

    pub fn load_stylesheet(&self, source: &StylesheetSource) -> Result<String> {
        load_stylesheet(source, self.fetcher.as_ref())
    }

    pub fn load_registry(&self, source: &StylesheetSource) -> Result<(String, FontRegistry)> {
        load_registry(source, self.fetcher.as_ref())
    }

    pub fn pack(&self, selection: &FontRegistry) -> Result<Package> {
        pack(selection, Arc::clone(&self.fetcher), &self.options)
    }

    /// Load `source`, apply `selector`, pack and write the outputs to `out_dir`.
    pub fn run(&self, source: &StylesheetSource, selector: &Selector, out_dir: &Path) -> Result<Package> {
        let start = Instant::now();
        println!("Packaging fonts from {source}");

        let mut registry = FontRegistry::new();
        run_step("Load stylesheet", 1, 3, || {
            let (_, loaded) = self.load_registry(source)?;
            println!("  {} font faces", loaded.len());
            registry = selector.apply(&loaded)?;
            Ok(())
        })?;

        let mut package = None;
        run_step("Download fonts", 2, 3, || {
            println!("  {} selected", registry.len());
            package = Some(self.pack(&registry)?);
            Ok(())
        })?;
        let package = package.context("Packaging produced no output")?;

        run_step("Write outputs", 3, 3, || {
            for path in package.write_to(out_dir)? {
                println!("  {}", path.display());
            }
            Ok(())
        })?;

        println!("\n✨ Done in {:.2}s", start.elapsed().as_secs_f64());
        Ok(package)
    }
}

pub fn run_step(name: &str, step_num: usize, total: usize, f: impl FnOnce() -> Result<()>) -> Result<()> {
    println!("\n[{step_num}/{total}] {name}");
    let start = Instant::now();
    f()?;
    println!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
    Ok(())
}
