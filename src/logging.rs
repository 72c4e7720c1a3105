//! Logger initialisation for the command line front end.
use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// How chatty the logger should be when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Warnings and errors only.
    Quiet,
    /// Informational messages and above.
    #[default]
    Normal,
    /// Everything down to debug messages.
    Verbose,
}

impl Verbosity {
    /// Map the `--verbose`/`--quiet` flags onto a level; verbose wins.
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Self::Verbose,
            (false, true) => Self::Quiet,
            (false, false) => Self::Normal,
        }
    }

    /// The default level filter for this verbosity.
    #[must_use]
    pub const fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Warn,
            Self::Normal => LevelFilter::Info,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than once
/// keeps the first logger, so tests may initialise freely.
pub fn init(verbosity: Verbosity) {
    let env = Env::default().default_filter_or(verbosity.level().to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    if builder.try_init().is_err() {
        debug!("logger already initialised; keeping the existing one");
    }
}
