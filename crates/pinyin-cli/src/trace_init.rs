use std::io;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Log to stderr. `RUST_LOG` takes precedence; otherwise `verbose` selects
/// between `debug` and `warn` for the pinyin crates.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let default = if verbose {
            "pinyin_core=debug,pinyin_cli=debug"
        } else {
            "warn"
        };
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_target(true)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
            )
            .init();
    });
}
