//! Process-wide error observer.
//!
//! Cross-cutting logging hook: when registered, the observer is invoked
//! exactly once with every transport/service failure, immediately before the
//! `Failure` outcome is returned to the caller. It never sees precondition
//! faults or malformed-payload errors, which surface as `Err` instead.

use std::sync::{Arc, RwLock};

use crate::types::ServiceError;

type ErrorObserver = dyn Fn(&ServiceError) + Send + Sync;

static OBSERVER: RwLock<Option<Arc<ErrorObserver>>> = RwLock::new(None);

/// Registers the process-wide error observer, replacing any previous one.
///
/// # Example
///
/// ```
/// gamestack_client_sdk::observer::set(|error| {
///     eprintln!("call failed: {error}");
/// });
/// # gamestack_client_sdk::observer::clear();
/// ```
pub fn set<F>(observer: F)
where
    F: Fn(&ServiceError) + Send + Sync + 'static,
{
    if let Ok(mut slot) = OBSERVER.write() {
        *slot = Some(Arc::new(observer));
    }
}

/// Unregisters the process-wide error observer.
pub fn clear() {
    if let Ok(mut slot) = OBSERVER.write() {
        *slot = None;
    }
}

/// Invokes the observer, if registered. The lock is released before the
/// callback runs, so observers may themselves issue calls.
pub(crate) fn notify(error: &ServiceError) {
    let observer = OBSERVER.read().ok().and_then(|slot| slot.as_ref().map(Arc::clone));
    if let Some(observer) = observer {
        observer(error);
    }
}
