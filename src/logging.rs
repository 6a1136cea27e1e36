//! Log output of the `lunar-birthday` binary.

use tracing_subscriber::EnvFilter;

/// Engine and request-tracing targets; everything else stays silent.
const TARGETS: &[&str] = &["lunar_birthday", "tower_http"];

/// Filter directives for `-v` repeated `verbosity` times: warnings only by
/// default, then info, debug and trace.
fn directives(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber. A set `RUST_LOG` takes precedence over
/// `verbosity`.
pub fn init(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!("lunar_birthday=warn,tower_http=warn", directives(0));
        assert_eq!("lunar_birthday=info,tower_http=info", directives(1));
        assert_eq!("lunar_birthday=debug,tower_http=debug", directives(2));
        assert_eq!("lunar_birthday=trace,tower_http=trace", directives(7));
    }
}
