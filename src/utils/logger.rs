use tracing_subscriber::EnvFilter;

const QUIET_DIRECTIVE: &str = "portfolio_catalog=info";
const VERBOSE_DIRECTIVE: &str = "portfolio_catalog=debug,info";

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        QUIET_DIRECTIVE
    }
}

/// Installs the compact stderr logger. `RUST_LOG` wins over `--verbose`.
///
/// Stdout is reserved for exported catalogs, so nothing is logged there.
/// A second call is a no-op.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if installed.is_err() {
        tracing::debug!("Logger already installed");
    }
}
