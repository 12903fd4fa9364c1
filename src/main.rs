#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, reload, Registry};

use portfolio_viewer::config::{parse_log_level, Config};
use portfolio_viewer::constants;
use portfolio_viewer::{catalog, gui};

/// Personal portfolio viewer
#[derive(Parser, Debug)]
#[command(name = "portfolio-viewer", version, about)]
struct Cli {
    /// Asset directory holding the profile photo and certificates/
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the certificate catalog as JSON lines and exit
    #[arg(long)]
    list_certificates: bool,
}

/// File < environment < command line
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_env_overrides();
    config.apply_overrides(None, cli.assets.clone());
    Ok(config)
}

/// Log subscriber whose level can be raised or lowered once config is known
fn log_subscriber<W>(
    level: Level,
    writer: W,
) -> (impl Subscriber + Send + Sync, reload::Handle<LevelFilter, Registry>)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(LevelFilter::from_level(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

fn list_certificates(config: &Config) -> Result<()> {
    let records = catalog::build_catalog(&config.certificates_dir(), &config.image_extensions)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        let line = serde_json::to_string(record).context("Failed to serialize catalog record")?;
        writeln!(out, "{line}").context("Failed to write to stdout")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config loading logs too, so start from LOG_LEVEL and adjust after
    let bootstrap_level = parse_log_level(
        &std::env::var(constants::env::LOG_LEVEL)
            .unwrap_or_else(|_| constants::config::DEFAULT_LOG_LEVEL.to_string()),
    );
    // stdout is reserved for --list-certificates output
    let (subscriber, log_level) = log_subscriber(bootstrap_level, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber)?;

    let config = resolve_config(&cli)?;
    log_level
        .reload(LevelFilter::from_level(config.trace_level()))
        .context("Failed to apply configured log level")?;
    info!("config={:#?}", config);

    if cli.list_certificates {
        return list_certificates(&config);
    }

    gui::run_gui(&config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "portfolio-viewer",
            "--assets",
            "/srv/site",
            "--list-certificates",
        ]);
        assert_eq!(cli.assets, Some(PathBuf::from("/srv/site")));
        assert!(cli.list_certificates);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_assets_beat_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "assets_dir": "/from/file" }"#).unwrap();

        let cli = Cli::parse_from([
            "portfolio-viewer",
            "--config",
            config_path.to_str().unwrap(),
            "--assets",
            "/from/cli",
        ]);
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/from/cli"));
    }

    /// Shared in-memory log sink
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_config_load_is_logged_then_level_applies() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "log_level": "warn" }"#).unwrap();
        let cli = Cli::parse_from(["portfolio-viewer", "--config", config_path.to_str().unwrap()]);

        let sink = Captured::default();
        let writer = sink.clone();
        let (subscriber, log_level) = log_subscriber(Level::INFO, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            resolve_config(&cli).unwrap();
            assert!(sink.text().contains("Loaded config"));

            log_level.reload(LevelFilter::WARN).unwrap();
            let before = sink.text().len();
            info!("suppressed after reload");
            tracing::warn!("still shown after reload");
            let after = sink.text()[before..].to_string();
            assert!(!after.contains("suppressed after reload"));
            assert!(after.contains("still shown after reload"));
        });
    }
}
