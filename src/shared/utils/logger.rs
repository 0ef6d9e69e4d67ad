use log::{debug, error, info, log, Level, LevelFilter};
use std::sync::Once;
use std::time::{Duration, Instant};

static INIT: Once = Once::new();

/// Timings above this are reported at warn level.
pub const SLOW_OPERATION: Duration = Duration::from_millis(100);

/// Install the process-wide logger.
/// Defaults favour this crate; `RUST_LOG` overrides any of them.
pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::Builder::new()
            .filter_level(LevelFilter::Info)
            .filter_module("movie_catalog_lib", LevelFilter::Debug)
            .filter_module("diesel", LevelFilter::Warn)
            .filter_module("r2d2", LevelFilter::Warn)
            .filter_module("hyper", LevelFilter::Warn)
            .filter_module("axum", LevelFilter::Warn)
            .parse_default_env()
            .format_timestamp_millis()
            .format_module_path(false)
            .init();

        info!("Logger initialized (max level {})", log::max_level());
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Log lines shared by the HTTP layer and the repositories
pub struct LogContext;

impl LogContext {
    /// One line per answered request; server errors and client errors stand out.
    pub fn request(method: &str, path: &str, status: u16, elapsed: Duration) {
        log!(
            Self::level_for_status(status),
            "HTTP {} {} -> {} in {}ms",
            method,
            path,
            status,
            elapsed.as_millis()
        );
    }

    pub fn level_for_status(status: u16) -> Level {
        match status {
            500..=u16::MAX => Level::Error,
            400..=499 => Level::Warn,
            _ => Level::Info,
        }
    }

    pub fn error_with_context(error: &dyn std::error::Error, context: &str) {
        error!("{}: {}", context, error);
    }

    pub fn timing(operation: &str, elapsed: Duration, detail: Option<&str>) {
        let level = Self::level_for_elapsed(elapsed);
        match detail {
            Some(detail) => log!(
                level,
                "{} took {}ms ({})",
                operation,
                elapsed.as_millis(),
                detail
            ),
            None => log!(level, "{} took {}ms", operation, elapsed.as_millis()),
        }
    }

    pub fn level_for_elapsed(elapsed: Duration) -> Level {
        if elapsed > SLOW_OPERATION {
            Level::Warn
        } else {
            Level::Debug
        }
    }
}

/// Measures a named operation from construction until `finish_with_info`.
pub struct TimedOperation {
    started: Instant,
    operation: &'static str,
}

impl TimedOperation {
    pub fn new(operation: &'static str) -> Self {
        debug!("{} started", operation);
        Self {
            started: Instant::now(),
            operation,
        }
    }

    pub fn finish_with_info(self, info: &str) -> Duration {
        let elapsed = self.started.elapsed();
        LogContext::timing(self.operation, elapsed, Some(info));
        elapsed
    }
}
