//! Terminal Logging Module
//!
//! Provides:
//! - JSON file logging with daily rotation (tracing-appender)
//! - `log` crate bridging so `log::info!` and friends reach the file
//! - miette error reporting tuned to the terminal's capabilities
//! - Styled one-line console messages for use outside the TUI
//! - Gzip compression of rotated log files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use console::style;
use flate2::write::GzEncoder;
use flate2::Compression;
use supports_color::Stream;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Base name of the rolling log file. Rotated files get a `.YYYY-MM-DD` suffix.
pub const LOG_FILE_NAME: &str = "shelfscan.log";

const DEFAULT_FILTER: &str = "info";

static TERMINAL_CAPS: OnceLock<TerminalCapabilities> = OnceLock::new();

fn get_terminal_caps() -> &'static TerminalCapabilities {
    TERMINAL_CAPS.get_or_init(TerminalCapabilities::detect)
}

// ============================================================================
// Terminal capabilities
// ============================================================================

/// How many colors stderr can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLevel {
    TrueColor,
    Ansi256,
    Ansi16,
    NoColor,
}

/// What stderr supports, probed once.
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    pub color_level: ColorLevel,
    pub supports_unicode: bool,
    pub is_interactive: bool,
}

impl TerminalCapabilities {
    /// Detect terminal capabilities from environment
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;

        let color_level = match supports_color::on(Stream::Stderr) {
            Some(support) if support.has_16m => ColorLevel::TrueColor,
            Some(support) if support.has_256 => ColorLevel::Ansi256,
            Some(support) if support.has_basic => ColorLevel::Ansi16,
            _ => ColorLevel::NoColor,
        };

        let supports_unicode = std::env::var("TERM")
            .map(|t| !t.contains("dumb"))
            .unwrap_or(true)
            && std::env::var("LANG")
                .map(|l| l.contains("UTF-8") || l.contains("utf8"))
                .unwrap_or(true);

        Self {
            color_level,
            supports_unicode,
            is_interactive: io::stderr().is_terminal(),
        }
    }

    pub fn should_colorize(&self) -> bool {
        self.is_interactive && self.color_level != ColorLevel::NoColor
    }
}

// ============================================================================
// Subscriber setup
// ============================================================================

/// Initialize logging for TUI mode.
///
/// Sets up a JSON file layer under `log_dir`, the `log` bridge and the miette
/// hook. Nothing goes to stderr: ratatui owns the terminal while in
/// raw/alternate-screen mode. Hold the returned guard until exit so buffered
/// lines are flushed.
pub fn init_tui(log_dir: &Path) -> WorkerGuard {
    let (writer, guard) = file_writer(log_dir);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(env_filter());

    tracing_subscriber::registry().with(file_layer).init();

    finish_init(log_dir);
    guard
}

fn file_writer(log_dir: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard) {
    if !log_dir.exists() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("Failed to create logs directory {}: {}", log_dir.display(), e);
        }
    }
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_NAME);
    tracing_appender::non_blocking(file_appender)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn finish_init(log_dir: &Path) {
    // The registry installs the bridge itself when tracing-subscriber's
    // `tracing-log` feature is on; a second install is harmless.
    if let Err(e) = tracing_log::LogTracer::init() {
        log::trace!("LogTracer already installed: {}", e);
    }

    init_miette();

    let log_dir = log_dir.to_path_buf();
    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );
    std::thread::spawn(move || compress_old_logs(&log_dir));
}

// ============================================================================
// Old log compression
// ============================================================================

/// Whether a file in the log directory is a rotated log that can be gzipped.
pub(crate) fn should_compress(name: &str, today_suffix: &str) -> bool {
    name.starts_with(LOG_FILE_NAME)
        && name.len() > LOG_FILE_NAME.len()
        && !name.ends_with(today_suffix)
        && !name.ends_with(".gz")
}

fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(gz) => log::info!("Compressed old log: {:?}", gz),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

/// Gzip `path` next to itself and remove the original. Returns the `.gz`
/// path. An existing archive is left alone.
pub(crate) fn compress_file(path: &Path) -> io::Result<PathBuf> {
    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(gz_path);
    }

    let mut reader = io::BufReader::new(fs::File::open(path)?);
    let mut encoder = GzEncoder::new(fs::File::create(&gz_path)?, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    Ok(gz_path)
}

/// Initialize miette for error reporting
fn init_miette() {
    let caps = get_terminal_caps();

    let hook = miette::set_hook(Box::new(move |_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(caps.color_level == ColorLevel::TrueColor)
                .unicode(caps.supports_unicode)
                .context_lines(2)
                .tab_width(4)
                .break_words(true)
                .color(caps.should_colorize())
                .build(),
        )
    }));
    if let Err(e) = hook {
        log::debug!("miette hook already set: {}", e);
    }
}

// ============================================================================
// Console messages
// ============================================================================

fn prefix(unicode: &'static str, ascii: &'static str) -> &'static str {
    if get_terminal_caps().supports_unicode {
        unicode
    } else {
        ascii
    }
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    let prefix = prefix("✗", "[x]");
    eprintln!("{} {}", style(prefix).red(), style(message).red().bold());
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    let prefix = prefix("⚠", "[!]");
    eprintln!("{} {}", style(prefix).yellow(), style(message).yellow().bold());
}
