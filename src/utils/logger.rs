use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Without `--verbose` only warnings
/// and errors are shown, so a plain run leaves stderr empty.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "lumos_artifacts=debug,info"
    } else {
        "lumos_artifacts=warn"
    }
}

/// Logs go to stderr; stdout is reserved for the artifact success lines.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run_hides_info_events() {
        assert_eq!(default_filter(false), "lumos_artifacts=warn");
        assert!(default_filter(true).starts_with("lumos_artifacts=debug"));
    }
}
