use std::path::PathBuf;

use anyhow::Context;
use bearing_core::SpecificationRequest;
use bearing_core::models::BearingType;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info, warn};

use bearing_ui::components::FormSettings;
use bearing_ui::config::AppConfig;
use bearing_ui::themes::FormStyle;
use bearing_ui::{app, logging, run_gui};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Bearing specification generator.
///
/// Opens the specification form, or generates and searches from the
/// command line against the configured backend.
#[derive(Debug, Parser)]
#[command(name = "bearing-spec", version)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Settings that win over the config file and the environment.
#[derive(Debug, Args)]
struct Overrides {
    /// TOML config file.
    #[arg(long, global = true, env = "BEARING_CONFIG")]
    config: Option<PathBuf>,

    /// Generation backend (`local` or `http`).
    #[arg(long, global = true)]
    backend: Option<String>,

    /// API base URL, absolute or relative to `--origin`.
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Origin a relative API base is resolved against.
    #[arg(long, global = true)]
    origin: Option<String>,

    #[arg(long, global = true, value_enum)]
    style: Option<FormStyle>,

    /// Default log filter when `RUST_LOG` is unset (e.g. `debug`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Show locally generated text when the backend fails.
    #[arg(long, global = true, overrides_with = "no_fallback")]
    fallback: bool,

    #[arg(long, global = true, overrides_with = "fallback")]
    no_fallback: bool,

    /// Hide log output on stdout.
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the desktop form (default).
    Gui,
    /// Print the specification and description for the given values.
    Generate(GenerateArgs),
    /// Print the backend's search response as JSON.
    Search { query: String },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    #[arg(long = "type")]
    bearing_type: Option<String>,
    #[arg(long = "subtype")]
    sub_type: Option<String>,
    #[arg(long)]
    number: Option<String>,
    #[arg(long = "seals")]
    seal: Option<String>,
    #[arg(long)]
    suffixes: Option<String>,
    #[arg(long, action = ArgAction::SetTrue)]
    c3: bool,
    #[arg(long)]
    make: Option<String>,
}

impl GenerateArgs {
    /// Form defaults with the given values applied. A known bearing type is
    /// written with its catalog label.
    fn into_request(self) -> SpecificationRequest {
        let defaults = SpecificationRequest::default();
        let bearing_type = match self.bearing_type {
            Some(text) => BearingType::parse(&text)
                .map(|t| t.as_str().to_string())
                .unwrap_or(text),
            None => defaults.bearing_type.clone(),
        };
        SpecificationRequest {
            bearing_type,
            sub_type: self.sub_type.unwrap_or(defaults.sub_type),
            number: self.number.unwrap_or_default(),
            seal: self.seal.unwrap_or(defaults.seal),
            suffixes: self.suffixes.unwrap_or_default(),
            has_c3: self.c3,
            make: self.make.unwrap_or_default(),
            ..defaults
        }
    }
}

// ─── configuration ───────────────────────────────────────────────────────────

/// Defaults, then the config file, then the environment, then the flags.
fn load_config(overrides: &Overrides) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(overrides.config.as_deref())?
        .with_env(|key| std::env::var(key).ok());

    if let Some(backend) = &overrides.backend {
        config.backend = backend.clone();
    }
    if let Some(base) = &overrides.api_base {
        config.api_base_url = base.clone();
    }
    if let Some(origin) = &overrides.origin {
        config.backend_origin = origin.clone();
    }
    if let Some(style) = overrides.style {
        config.style = style;
    }
    if let Some(level) = &overrides.log_level {
        config.log_level = level.clone();
    }
    if let Some(path) = &overrides.log_file {
        config.log_file = Some(path.clone());
    }
    if overrides.fallback {
        config.fallback_on_error = true;
    }
    if overrides.no_fallback {
        config.fallback_on_error = false;
    }
    Ok(config)
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.overrides)?;

    logging::init_logging(&config.log_level)?;
    if cli.overrides.quiet {
        logging::set_stdout_enabled(false)?;
    }
    if let Some(path) = &config.log_file {
        logging::enable_file_logging(path)?;
    }
    debug!(?config, "configuration loaded");

    // gpui owns the main thread; backend I/O runs on this runtime.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("bearing-io")
        .build()
        .context("cannot start async runtime")?;

    let service = runtime.block_on(app::connect(&config))?;

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => {
            info!(backend = service.backend_name(), "starting desktop form");
            let settings = FormSettings {
                service,
                runtime: runtime.handle().clone(),
                style: config.style,
                fallback_on_error: config.fallback_on_error,
            };
            run_gui(config, settings);
        }
        Command::Generate(args) => {
            let request = args.into_request();
            let outcome = runtime.block_on(app::generate(
                service.as_ref(),
                &request,
                config.fallback_on_error,
            ))?;
            if let Some(message) = &outcome.warning {
                warn!(%message, "backend failed; printed text was generated locally");
            }
            println!("{}", outcome.output);
        }
        Command::Search { query } => {
            let body = runtime.block_on(app::search(service.as_ref(), &query))?;
            println!("{body}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["bearing-spec"]).unwrap();

        assert!(cli.command.is_none());
    }

    #[test]
    fn generate_flags_fill_request_over_defaults() {
        let cli = Cli::try_parse_from([
            "bearing-spec",
            "generate",
            "--type",
            "Cylindrical Roller Bearing",
            "--subtype",
            "NU Series",
            "--number",
            "NU210",
            "--seals",
            "ZZ",
            "--c3",
        ])
        .unwrap();

        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };
        let request = args.into_request();

        assert_eq!(request.bearing_type, "Cylindrical Roller Bearing");
        assert_eq!(request.number, "NU210");
        assert!(request.has_c3);
        assert_eq!(request.category, "Bearing");
        assert_eq!(request.make, "");
    }

    #[test]
    fn taper_spelling_becomes_catalog_label() {
        let cli = Cli::try_parse_from([
            "bearing-spec",
            "generate",
            "--type",
            "Taper Roller Bearing",
        ])
        .unwrap();

        let Some(Command::Generate(args)) = cli.command else {
            panic!("expected generate subcommand");
        };

        assert_eq!(args.into_request().bearing_type, "Tapered Roller Bearing");
    }

    #[test]
    fn global_flags_override_config() {
        let cli = Cli::try_parse_from([
            "bearing-spec",
            "search",
            "6205",
            "--backend",
            "http",
            "--api-base",
            "https://specs.example.com/api",
            "--style",
            "hero",
            "--no-fallback",
        ])
        .unwrap();

        let config = load_config(&cli.overrides).unwrap();

        assert_eq!(config.backend, "http");
        assert_eq!(config.resolved_base_url(), "https://specs.example.com/api");
        assert_eq!(config.style, FormStyle::Hero);
        assert!(!config.fallback_on_error);
    }

    #[test]
    fn last_fallback_flag_wins() {
        let cli =
            Cli::try_parse_from(["bearing-spec", "--no-fallback", "--fallback", "gui"]).unwrap();

        assert!(cli.overrides.fallback);
        assert!(!cli.overrides.no_fallback);
    }
}
