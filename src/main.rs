//! notepadgtx - A plain-text editor for the terminal.
//!
//! # Usage
//!
//! ```bash
//! notepadgtx notes.txt
//! notepadgtx --file notes.txt --cli
//! notepadgtx --log-file editor.log
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notepadgtx::app::App;
use notepadgtx::config::{
    ConfigFlags, Presentation, clear_config_flags, display_available, global_config_path,
    load_config_flags, local_override_path, resolve_presentation, save_config_flags,
};

/// A plain-text editor for the terminal
#[derive(Parser, Debug)]
#[command(name = "notepadgtx", version, about, long_about = None)]
struct Cli {
    /// File to open (created on first save if missing)
    #[arg(value_name = "FILE", conflicts_with = "file_flag")]
    file: Option<PathBuf>,

    /// File to open, as a flag
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    file_flag: Option<PathBuf>,

    /// Run in the terminal
    #[arg(short, long, conflicts_with = "gui")]
    cli: bool,

    /// Run in a window when a display is available
    #[arg(short, long)]
    gui: bool,

    /// Write diagnostic logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

/// Where diagnostics are written.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LogTarget {
    File(PathBuf),
    /// No log file configured. stderr is the editor screen while it runs,
    /// so nothing is written.
    Discard,
}

/// The configured log file wins over `NOTEPADGTX_LOG_FILE`.
fn log_target(configured: Option<PathBuf>, env: Option<PathBuf>) -> LogTarget {
    configured.or(env).map_or(LogTarget::Discard, LogTarget::File)
}

fn init_logging(target: &LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false);
    match target {
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).init();
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = ConfigFlags {
        presentation: if cli.gui {
            Some(Presentation::Windowed)
        } else if cli.cli {
            Some(Presentation::Terminal)
        } else {
            None
        },
        log_file: cli.log_file.clone(),
    };

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let target = log_target(
        effective.log_file.clone(),
        std::env::var_os("NOTEPADGTX_LOG_FILE").map(PathBuf::from),
    );
    init_logging(&target)?;

    let presentation = resolve_presentation(effective.presentation, display_available());
    tracing::debug!(?presentation, requested = ?effective.presentation, "presentation resolved");

    let mut app = App::new(cli.file.or(cli.file_flag));
    if presentation == Presentation::Windowed {
        tracing::warn!("windowed presentation is not available in this build; using the terminal");
        app = app.with_notice("Windowed mode unavailable, running in the terminal");
    } else if effective.presentation == Some(Presentation::Windowed) {
        tracing::warn!("no display available; using the terminal");
    }

    app.run().context("Application error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_target_discards_without_log_file() {
        assert_eq!(log_target(None, None), LogTarget::Discard);
    }

    #[test]
    fn test_log_target_prefers_configured_file_over_env() {
        assert_eq!(
            log_target(Some(PathBuf::from("flag.log")), Some(PathBuf::from("env.log"))),
            LogTarget::File(PathBuf::from("flag.log"))
        );
        assert_eq!(
            log_target(None, Some(PathBuf::from("env.log"))),
            LogTarget::File(PathBuf::from("env.log"))
        );
    }

    #[test]
    fn test_cli_file_argument_conflicts_with_file_flag() {
        let err = Cli::try_parse_from(["notepadgtx", "a.txt", "--file", "b.txt"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        assert!(Cli::try_parse_from(["notepadgtx", "--cli", "--gui"]).is_err());
    }
}
