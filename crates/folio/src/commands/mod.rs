//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod render;
pub(crate) mod search;
pub(crate) mod tree;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_content::{SearchLimits, Site, SiteOptions};
use folio_storage::FsStorage;

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;
pub(crate) use search::SearchArgs;
pub(crate) use tree::TreeArgs;

/// Flags shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Content root containing docs/, courses/ and blogs/ (overrides config).
    #[arg(short, long, global = true, env = "FOLIO_ROOT_DIR")]
    root_dir: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration with CLI overrides applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root_dir: self.root_dir.clone(),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration and open the content root.
    pub(crate) fn load_site(&self) -> Result<(Config, Site), CliError> {
        let config = self.load_config()?;
        let root_dir = &config.content_resolved.root_dir;
        tracing::info!(root_dir = %root_dir.display(), "Opening content root");

        let site = Site::new(Arc::new(FsStorage::new(root_dir.clone())))
            .with_options(site_options(&config));
        Ok((config, site))
    }
}

/// Rendering options from `[render]` and `[site]`.
pub(crate) fn site_options(config: &Config) -> SiteOptions {
    SiteOptions {
        highlight: config.render.highlight,
        strip_title_heading: config.render.strip_title_heading,
        edit_base_url: config.site.edit_base_url.clone(),
    }
}

/// Result counts from `[search]`.
pub(crate) fn search_limits(config: &Config) -> SearchLimits {
    SearchLimits {
        initial: config.search.initial_limit,
        search: config.search.search_limit,
        step: config.search.load_more_step,
    }
}
