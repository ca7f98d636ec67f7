use serde_json::Value;

/// Fire-and-forget analytics event sink.
///
/// Tracking must never influence the outcome of the operation that emitted
/// the event, so the trait is infallible and synchronous.
pub trait EventTracker: Send + Sync {
    fn track(&self, event: &str, properties: Value);
}
