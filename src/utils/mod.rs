use std::sync::OnceLock;

use tracing_subscriber::filter::{Directive, LevelFilter};

use crate::config::DEFAULT_LOG_DIRECTIVE;

/// Directive the subscriber was installed with; set exactly once per process.
static ACTIVE_DIRECTIVE: OnceLock<String> = OnceLock::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_DIRECTIVE);
}

/// Same as [`init_tracing`] but with a caller-chosen default directive.
///
/// `RUST_LOG` still takes part in filtering. An unparsable directive falls
/// back to the crate default. Only the first call in a process has any effect.
pub fn init_tracing_with(directive: &str) {
    ACTIVE_DIRECTIVE.get_or_init(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let directive = parse_directive(directive);
        let applied = directive.to_string();
        let filter = EnvFilter::from_default_env().add_directive(directive);

        // Another subscriber may already be installed by the host application.
        let _ = fmt().with_env_filter(filter).try_init();
        tracing::info!(directive = %applied, "Ledger Core tracing initialized.");
        applied
    });
}

/// The directive tracing was initialized with, if initialization happened.
pub fn active_directive() -> Option<&'static str> {
    ACTIVE_DIRECTIVE.get().map(String::as_str)
}

fn parse_directive(raw: &str) -> Directive {
    raw.parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse())
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO))
}
