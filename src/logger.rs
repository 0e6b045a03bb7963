use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr so they never mix with the answers printed on stdout.
/// `RUST_LOG` wins over `verbose` when it is set.
/// Call once, from `main`; a second call panics.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "aoc2020=debug" } else { "aoc2020=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

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
