//! Analytics event sink backed by the tracing pipeline.

use serde_json::Value;

use pukeko_core::ports::EventTracker;

/// Emits tracking events as structured log records. Stands in for a real
/// product-analytics client; events are fire-and-forget either way.
pub struct TracingEventTracker;

impl EventTracker for TracingEventTracker {
    fn track(&self, event: &str, properties: Value) {
        tracing::info!(event = %event, properties = %properties, "Analytics event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tracking_never_panics() {
        TracingEventTracker.track("post_created", json!({ "platforms": "twitter" }));
    }
}
