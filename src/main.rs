//! comview - Entry Point

use clap::Parser;
use comview::client::HttpCommentSource;
use comview::config::{self, CliOverrides, ResolvedConfig};
use comview::controller::QueryController;
use comview::model::AppError;
use comview::state::{EmailFilter, ViewState};
use comview::view::{self, ColorConfig, RenderOptions, TableStyles};
use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

/// Worker threads for the request runtime. Fetches are I/O bound.
const RUNTIME_WORKERS: usize = 2;

/// comview - browse a paginated comments API in the terminal
#[derive(Parser, Debug)]
#[command(name = "comview")]
#[command(version)]
#[command(about = "TUI table viewer for a paginated comments API")]
pub struct Args {
    /// Base URL of the API (the `/comments` path is appended)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Start with an email filter active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start at a specific page (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<NonZeroU32>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the last fetch error in the status bar
    #[arg(long)]
    pub debug_status: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            page_size: self.page_size,
            timeout_secs: self.timeout,
        }
    }

    /// Starting view: page size from config, page and filter from flags.
    fn initial_view(&self, config: &ResolvedConfig) -> ViewState {
        let view = ViewState::new(config.page_size).with_page(self.page);
        match self.search.as_deref().map(EmailFilter::new) {
            Some(Some(filter)) => view.with_search(filter),
            Some(None) => {
                warn!("Ignoring blank --search");
                view
            }
            None => view,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file)?;
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.overrides())?
    };

    comview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(RUNTIME_WORKERS)
        .thread_name("comview-fetch")
        .enable_all()
        .build()?;

    let source = HttpCommentSource::new(&config.api_url, config.request_timeout)
        .map_err(|err| AppError::Client(err.to_string()))?;
    info!(url = source.comments_url(), "Using comments endpoint");

    let controller = QueryController::new(Arc::new(source), runtime.handle().clone());
    let options = RenderOptions {
        styles: TableStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
        debug_status: args.debug_status,
    };

    view::run_app(controller, args.initial_view(&config), options)?;

    info!("Exiting");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_help_does_not_error() {
        let err = Args::try_parse_from(["comview", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let err = Args::try_parse_from(["comview", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["comview"]);
        assert_eq!(args.api_url, None);
        assert_eq!(args.search, None);
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, None);
        assert_eq!(args.timeout, None);
        assert!(!args.no_color);
        assert!(!args.debug_status);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_page_rejects_zero() {
        let err = Args::try_parse_from(["comview", "-p", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_zero() {
        assert!(Args::try_parse_from(["comview", "--page-size", "0"]).is_err());
    }

    #[test]
    fn test_timeout_rejects_zero() {
        let err = Args::try_parse_from(["comview", "--timeout", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "comview",
            "--api-url",
            "http://localhost:3000",
            "-s",
            "a@b.com",
            "-p",
            "4",
            "--page-size",
            "20",
            "--timeout",
            "3",
            "--no-color",
            "--debug-status",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(args.search.as_deref(), Some("a@b.com"));
        assert_eq!(args.page, 4);
        assert_eq!(args.page_size, NonZeroU32::new(20));
        assert_eq!(args.timeout, Some(3));
        assert!(args.no_color);
        assert!(args.debug_status);
    }

    #[test]
    fn test_overrides_carry_flags() {
        let args = Args::parse_from(["comview", "--page-size", "50", "--timeout", "7"]);
        let overrides = args.overrides();
        assert_eq!(overrides.page_size, NonZeroU32::new(50));
        assert_eq!(overrides.timeout_secs, Some(7));
        assert_eq!(overrides.api_url, None);
    }

    #[test]
    fn test_initial_view_applies_page_and_search() {
        let args = Args::parse_from(["comview", "-p", "3", "-s", " a@b.com "]);
        let view = args.initial_view(&ResolvedConfig::default());

        assert_eq!(view.page(), 3);
        assert_eq!(
            view.mode().filter().map(EmailFilter::as_str),
            Some("a@b.com")
        );
    }

    #[test]
    fn test_initial_view_ignores_blank_search() {
        let args = Args::parse_from(["comview", "-s", "   "]);
        let view = args.initial_view(&ResolvedConfig::default());
        assert!(!view.mode().is_searching());
    }

    #[test]
    fn test_page_size_flows_through_precedence_chain() {
        let file = config::ConfigFile {
            page_size: Some(20),
            ..Default::default()
        };
        let merged = config::merge_config(Some(file)).unwrap();
        assert_eq!(merged.page_size.get(), 20);

        let args = Args::parse_from(["comview", "--page-size", "50"]);
        let resolved = config::apply_cli_overrides(merged, args.overrides()).unwrap();
        assert_eq!(resolved.page_size.get(), 50);
    }
}
