//! Optional step tracing for search methods.
//!
//! Methods report progress through an injected [`Tracer`] rather than a
//! global logger. The default is [`NopTracer`], which discards everything;
//! enable the `tracing` cargo feature and install a [`TracingTracer`] to
//! forward messages to the [`tracing`](https://docs.rs/tracing) ecosystem.

/// A sink for per-step search diagnostics.
///
/// All methods default to doing nothing, so an implementation only needs
/// to override the levels it cares about.
///
/// ```
/// use minima::Tracer;
///
/// struct Collector(std::sync::Mutex<Vec<String>>);
///
/// impl Tracer for Collector {
///     fn info(&self, message: &str) {
///         self.0.lock().unwrap().push(message.to_owned());
///     }
/// }
/// ```
pub trait Tracer: Send + Sync {
    /// Fine-grained per-step details.
    fn debug(&self, message: &str) {
        let _ = message;
    }

    /// Progress milestones: adopted incumbents, convergence, exits.
    fn info(&self, message: &str) {
        let _ = message;
    }

    /// Suspicious but recoverable conditions.
    fn warn(&self, message: &str) {
        let _ = message;
    }

    /// Contract violations observed mid-search.
    fn error(&self, message: &str) {
        let _ = message;
    }
}

/// A tracer that discards every message. This is the default when no
/// tracer is configured.
pub struct NopTracer;

impl Tracer for NopTracer {}

/// Forwards messages to the `tracing` crate at matching levels.
#[cfg(feature = "tracing")]
pub struct TracingTracer;

#[cfg(feature = "tracing")]
impl Tracer for TracingTracer {
    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
