use time::macros::format_description;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    filter_or_default(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        default_level,
    )
}

fn filter_or_default(directives: Option<&str>, default_level: &str) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Installs the compact stderr logger used by the `foundry-tasks` binary.
///
/// Stdout is left alone so rendered markup can be piped.
pub fn init_logger(default_level: &str) {
    let time_format =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:2]");

    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(fmt::time::LocalTime::new(time_format))
                .with_target(false)
                .with_level(true)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .with_span_events(fmt::format::FmtSpan::NONE)
                .compact(),
        )
        .with(env_filter(default_level))
        .try_init();

    if installed.is_err() {
        tracing::debug!("global logger already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(DEFAULT_LEVEL);
        init_logger("debug");
    }

    #[test]
    fn default_level_applies_without_directives() {
        assert_eq!(filter_or_default(None, "warn").to_string(), "warn");
    }

    #[test]
    fn directives_override_default_level() {
        assert_eq!(filter_or_default(Some("debug"), "warn").to_string(), "debug");
    }

    #[test]
    fn invalid_directives_fall_back_to_default_level() {
        let filter = filter_or_default(Some("task_table=loudest"), "warn");
        assert_eq!(filter.to_string(), "warn");
    }
}
