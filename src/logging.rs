//! Diagnostic logging.
//!
//! Events go to stderr through `tracing-subscriber`. `RUST_LOG` overrides the
//! default filter, which only lets this crate's warnings through so that
//! normal runs show nothing but the user-facing notifications.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `--verbose` raises it to debug.
fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "open_in=debug"
    } else {
        "open_in=warn"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time()
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_filter(verbose)).is_ok());
        }
    }

    #[test]
    fn test_default_filter_targets_this_crate() {
        assert_eq!(default_filter(false), "open_in=warn");
        assert_eq!(default_filter(true), "open_in=debug");
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
