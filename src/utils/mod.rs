use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "showbiz=info";

/// Initializes the global tracing subscriber. `RUST_LOG` adds to the default directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        // A subscriber installed by an embedding application takes precedence.
        let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    });
}
