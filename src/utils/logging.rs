use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Maps `-v` repetitions to a level for this crate.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Diagnostics go to stderr so stdout stays clean for tables and exports.
/// `RUST_LOG` takes precedence over `-v`.
pub fn enable_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level_for(verbosity)
        ))
    });

    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::WARN);
        assert_eq!(level_for(2), LevelFilter::DEBUG);
        assert_eq!(level_for(9), LevelFilter::TRACE);
    }
}
