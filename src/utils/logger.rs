use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `verbose` forces debug output regardless of the configured `level`.
pub fn init_cli_logger(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_filter_directives(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// 伺服器部署用 JSON 日誌，方便集中收集
pub fn init_json_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "geolocation_service={level},tower_http={level},warn"
        ))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

fn cli_filter_directives(verbose: bool, level: &str) -> String {
    if verbose {
        "geolocation_service=debug,tower_http=debug,info".to_string()
    } else {
        format!("geolocation_service={level},warn")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_filter_uses_configured_level() {
        assert_eq!(cli_filter_directives(false, "warn"), "geolocation_service=warn,warn");
        assert_eq!(cli_filter_directives(false, "trace"), "geolocation_service=trace,warn");
    }

    #[test]
    fn test_verbose_overrides_level() {
        assert!(cli_filter_directives(true, "error").starts_with("geolocation_service=debug"));
    }
}
