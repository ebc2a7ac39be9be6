//! CLI definitions and command dispatch.

use std::{path::PathBuf, time::Duration};

use anyhow::Result;
use clap::{Parser, Subcommand};
use fontpack_core::{
    FetchOptions, PackOptions, Selector,
    config::{DEFAULT_ASSET_PREFIX, DEFAULT_FONTS_PATH, DEFAULT_TIMEOUT_SECS, JSON_CONTENT_TYPE},
};

use crate::commands::{build, css, list, manifest, pack};

#[derive(Parser)]
#[command(name = "fontpack")]
#[command(about = "Package the web fonts of a stylesheet for local hosting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SelectArgs {
    /// Font key to include; repeat for more. All fonts when omitted.
    #[arg(short = 's', long = "select", value_name = "KEY")]
    pub keys: Vec<String>,
    /// Keep only fonts of this charset; repeat for more.
    #[arg(short = 'c', long = "charset", value_name = "NAME")]
    pub charsets: Vec<String>,
}

impl SelectArgs {
    pub fn selector(&self) -> Selector {
        Selector::new(self.keys.clone(), self.charsets.clone())
    }
}

#[derive(Debug, Clone, clap::Args)]
pub struct FetchArgs {
    /// Per-request timeout in seconds, 0 to disable
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

impl FetchArgs {
    pub fn options(&self) -> FetchOptions {
        let timeout = (self.timeout > 0).then(|| Duration::from_secs(self.timeout));
        FetchOptions { timeout, ..FetchOptions::default() }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the font faces declared by a stylesheet
    List {
        /// Stylesheet URL or file path
        source: String,
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Download the selected fonts and write fonts.zip, fonts.css and theme.json
    Pack {
        source: String,
        #[command(flatten)]
        select: SelectArgs,
        #[arg(short, long, default_value = "dist")]
        out_dir: PathBuf,
        #[arg(long, default_value = DEFAULT_FONTS_PATH)]
        fonts_path: String,
        #[arg(long, default_value = DEFAULT_ASSET_PREFIX)]
        asset_prefix: String,
        #[command(flatten)]
        fetch: FetchArgs,
        /// Maximum simultaneous downloads
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// Print regenerated CSS for the selected fonts
    Css {
        source: String,
        #[command(flatten)]
        select: SelectArgs,
        #[arg(long, default_value = DEFAULT_FONTS_PATH)]
        fonts_path: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Print the theme manifest for the selected fonts
    Manifest {
        source: String,
        #[command(flatten)]
        select: SelectArgs,
        #[arg(long, default_value = DEFAULT_ASSET_PREFIX)]
        asset_prefix: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },
    /// Answer a JSON build request read from a file or stdin
    Build {
        #[arg(long)]
        body: Option<PathBuf>,
        #[arg(long, default_value = JSON_CONTENT_TYPE)]
        content_type: String,
        #[command(flatten)]
        fetch: FetchArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::List { source, json, fetch } => {
                list(&source, json, options(&fetch))?;
            }
            Commands::Pack { source, select, out_dir, fonts_path, asset_prefix, fetch, jobs } => {
                let mut options = options(&fetch);
                options.css = options.css.with_fonts_path(fonts_path);
                options.manifest = options.manifest.with_asset_prefix(asset_prefix);
                options.max_concurrency = jobs;
                pack(&source, &select.selector(), &out_dir, options)?;
            }
            Commands::Css { source, select, fonts_path, fetch } => {
                let mut options = options(&fetch);
                options.css = options.css.with_fonts_path(fonts_path);
                css(&source, &select.selector(), options)?;
            }
            Commands::Manifest { source, select, asset_prefix, fetch } => {
                let mut options = options(&fetch);
                options.manifest = options.manifest.with_asset_prefix(asset_prefix);
                manifest(&source, &select.selector(), options)?;
            }
            Commands::Build { body, content_type, fetch } => {
                build(body.as_deref(), &content_type, options(&fetch))?;
            }
        }
        Ok(())
    }
}

fn options(fetch: &FetchArgs) -> PackOptions {
    PackOptions { fetch: fetch.options(), ..PackOptions::default() }
}
