use cas_simplify::SimplifyOptions;
use simplelog::LevelFilter;
use std::fmt;

/// Command-line usage of the REPL.
pub const USAGE: &str = "usage: cas-repl [--steps] [--log <level>] [--passes <n>] [file]";

/// Configuration of the REPL, parsed from command-line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Whether to print every step applied while simplifying.
    pub steps: bool,

    /// The most verbose log level to print.
    pub log_level: LevelFilter,

    /// Options passed to the simplifier.
    pub options: SimplifyOptions,

    /// A file to read commands from, one per line. If [`None`], commands are read from stdin.
    pub file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            steps: false,
            log_level: LevelFilter::Warn,
            options: SimplifyOptions::default(),
            file: None,
        }
    }
}

/// An invalid command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A flag that takes a value was the last argument.
    MissingValue(&'static str),

    /// The value of `--log` is not a log level.
    InvalidLogLevel(String),

    /// The value of `--passes` is not a non-negative integer.
    InvalidPasses(String),

    /// A flag that is not recognized.
    UnknownFlag(String),

    /// More than one file was given.
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "missing value for `{}`", flag),
            Self::InvalidLogLevel(level) => write!(
                f,
                "invalid log level `{}`, expected one of: off, error, warn, info, debug, trace",
                level,
            ),
            Self::InvalidPasses(passes) => write!(f, "invalid number of passes `{}`", passes),
            Self::UnknownFlag(flag) => write!(f, "unknown flag `{}`", flag),
            Self::UnexpectedArgument(arg) => write!(f, "unexpected argument `{}`", arg),
        }
    }
}

impl Config {
    /// Parses the configuration from command-line arguments, excluding the program name.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--steps" => config.steps = true,
                "--log" => {
                    let level = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                    config.log_level = level.parse()
                        .map_err(|_| ConfigError::InvalidLogLevel(level))?;
                },
                "--passes" => {
                    let passes = args.next().ok_or(ConfigError::MissingValue("--passes"))?;
                    let max_passes = passes.parse()
                        .map_err(|_| ConfigError::InvalidPasses(passes))?;
                    config.options = config.options
                        .into_builder()
                        .max_passes(max_passes)
                        .build();
                },
                flag if flag.starts_with("--") => return Err(ConfigError::UnknownFlag(arg)),
                _ if config.file.is_none() => config.file = Some(arg),
                _ => return Err(ConfigError::UnexpectedArgument(arg)),
            }
        }

        Ok(config)
    }
}
