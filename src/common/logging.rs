use once_cell::sync::OnceCell;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};
use time::macros::format_description;

// true once the subscriber actually owns the global dispatcher.
static LOGGER: OnceCell<bool> = OnceCell::new();

/// Installs the process-wide JSON subscriber. Only the first call does any work,
/// so the handler can call it per invocation without paying for it twice.
pub fn init() {
    LOGGER.get_or_init(|| match try_install() {
        Ok(()) => true,
        Err(e) => {
            // Another subscriber already owns the global slot (test harness, embedding binary).
            eprintln!("logging not installed: {e}");
            false
        }
    });
}

pub fn is_initialized() -> bool {
    LOGGER.get().copied().unwrap_or(false)
}

fn try_install() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Default to info if RUST_LOG not set
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    // RFC3339-like with UTC
    let timer = UtcTime::new(format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z"));

    let fmt_layer = fmt::layer()
        .event_format(fmt::format().json().with_current_span(false).with_span_list(false))
        .fmt_fields(fmt::format::JsonFields::new())
        .with_timer(timer)
        .with_writer(std::io::stdout);

    let subscriber = Registry::default().with(env_filter).with(fmt_layer);

    set_global_default(subscriber)?;
    // The subscriber is live at this point; a missing `log` bridge only loses dependency records.
    if let Err(e) = LogTracer::init() {
        eprintln!("log bridge not installed: {e}");
    }
    Ok(())
}

pub fn short_uuid() -> String {
    let id = uuid::Uuid::new_v4().to_string();
    id.split('-').next().unwrap_or(&id).to_string()
}

pub mod events {
    pub const HANDLER_START: &str = "handler_start";
    pub const HEALTH_INVOKED: &str = "health_invoked";

    pub const INVOKE_START: &str = "invoke_start";
    pub const INVOKE_RESPONSE: &str = "invoke_response";

    pub const HEALTH_CHECK_PASSED: &str = "health_check_passed";
    pub const HEALTH_CHECK_FAILED: &str = "health_check_failed";
}
