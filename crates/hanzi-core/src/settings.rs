use clap::Parser;

/// Dictionary file read on every run, relative to the working directory.
pub const DICTIONARY_PATH: &str = "./dictionary.txt";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Frequency statistics over a Chinese character dictionary.
///
/// Only diagnostics are configurable; the input file and the report are fixed.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "hanzi-stats",
    about = "Frequency statistics over ./dictionary.txt",
    version
)]
pub struct Settings {
    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but with an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    fn resolve(mut settings: Settings) -> Settings {
        // --debug overrides log level.
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
