//! The process-wide assert handler and its standard implementations.

use std::sync::{Arc, RwLock};
use tattle_failure::{AssertionFailure, Fluent};

/// Policy invoked when a [`soft_assert!`](crate::soft_assert) condition is
/// false.
///
/// The handler receives the fully formatted message string. Implementations
/// either never return (terminate the process) or return the failure to
/// raise, which the macro propagates to the caller.
pub trait AssertHandler: Send + Sync {
    /// Handles one assertion failure described by `message`.
    fn handle(&self, message: &str) -> Result<(), AssertionFailure>;

    /// A human-readable name, for logging which handler is installed.
    fn name(&self) -> &'static str;
}

/// Writes the message to stderr and aborts the process. Non-recoverable.
///
/// This is the default handler.
pub struct TerminateHandler;

impl AssertHandler for TerminateHandler {
    fn handle(&self, message: &str) -> Result<(), AssertionFailure> {
        eprintln!("{message}");
        std::process::abort();
    }

    fn name(&self) -> &'static str {
        "terminate_handler"
    }
}

/// Raises an [`AssertionFailure`] carrying the message. Recoverable by a
/// caller further up.
pub struct RaiseHandler;

impl AssertHandler for RaiseHandler {
    fn handle(&self, message: &str) -> Result<(), AssertionFailure> {
        Err(AssertionFailure::new().with("message", message))
    }

    fn name(&self) -> &'static str {
        "raise_handler"
    }
}

static HANDLER: RwLock<Option<Arc<dyn AssertHandler>>> = RwLock::new(None);

/// Installs `handler` as the process-wide assert handler.
///
/// Swapping is a process-wide configuration action intended for
/// single-threaded startup; a swap concurrent with in-flight assertion
/// checks is the host program's synchronization problem, not this
/// library's.
pub fn set_assert_handler(handler: Arc<dyn AssertHandler>) {
    *HANDLER.write().unwrap() = Some(handler);
}

/// The currently installed assert handler ([`TerminateHandler`] until one
/// is set).
pub fn assert_handler() -> Arc<dyn AssertHandler> {
    HANDLER
        .read()
        .unwrap()
        .clone()
        .unwrap_or_else(|| Arc::new(TerminateHandler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tattle_failure::Failure;

    #[test]
    fn raise_handler_returns_the_failure() {
        let failure = RaiseHandler
            .handle("Assertion '1 == 0' failed: boom @here:1")
            .unwrap_err();
        assert_eq!(failure.kind_name(), "AssertionFailure");
        assert_eq!(
            failure.context().get_as::<String>("message"),
            Some("Assertion '1 == 0' failed: boom @here:1".to_string())
        );
    }

    #[test]
    fn handlers_report_their_names() {
        assert_eq!(TerminateHandler.name(), "terminate_handler");
        assert_eq!(RaiseHandler.name(), "raise_handler");
    }

    #[test]
    fn swap_installs_the_new_handler() {
        set_assert_handler(Arc::new(RaiseHandler));
        assert_eq!(assert_handler().name(), "raise_handler");
    }
}
