use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LIBRARY_TARGET: &str = "expertise_lambdas";

/// Directives used when `RUST_LOG` is unset: this library and the calling
/// binary at `level`, dependencies (sqlx, hyper, aws) at warn.
fn default_directives(binary_target: &str, level: &str) -> String {
    if binary_target == LIBRARY_TARGET {
        format!("warn,{}={}", LIBRARY_TARGET, level)
    } else {
        format!("warn,{}={},{}={}", LIBRARY_TARGET, level, binary_target, level)
    }
}

fn env_filter(binary_target: &str, level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(binary_target, level)))
}

/// Human-readable logs on stderr, so stdout carries only the JSON result.
///
/// Call with `env!("CARGO_CRATE_NAME")` so the binary's own events pass the filter.
pub fn init_cli_logger(binary_target: &str, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(env_filter(binary_target, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .compact(),
        )
        .init();
}

/// One JSON object per event for CloudWatch; the request id comes from the event fields.
pub fn init_lambda_logger(binary_target: &str) {
    tracing_subscriber::registry()
        .with(env_filter(binary_target, "info"))
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_span_list(false)
                .with_target(false)
                .without_time(),
        )
        .init();
}
