//! Boundary to the notification collaborator.
//!
//! The evaluator never renders or notifies anything itself. It hands each
//! zone-entered result to a `ZoneSink`, and reports DWELL and EXIT through
//! the sink's hooks, which do nothing unless the caller overrides them.

use crate::error::Result;
use parking_lot::Mutex;
use sprayzone_types::event::SprayingRequest;

/// Receiver for the evaluator's results.
pub trait ZoneSink: Send + Sync {
    /// Deliver the spraying points for a geofence whose trigger lies inside the polygon.
    fn notify_zone_entered(&self, request: SprayingRequest) -> Result<()>;

    /// Called for every request id of a DWELL event.
    fn on_dwell(&self, _request_id: &str) -> Result<()> {
        Ok(())
    }

    /// Called for every request id of an EXIT event.
    fn on_exit(&self, _request_id: &str) -> Result<()> {
        Ok(())
    }
}

/// Adapts a closure into a sink that only handles zone-entered requests.
pub struct FnSink<F>(pub F);

impl<F> ZoneSink for FnSink<F>
where
    F: Fn(SprayingRequest) -> Result<()> + Send + Sync,
{
    fn notify_zone_entered(&self, request: SprayingRequest) -> Result<()> {
        (self.0)(request)
    }
}

/// In-memory sink that records every request it receives.
#[derive(Default)]
pub struct MemorySink {
    entered: Mutex<Vec<SprayingRequest>>,
    dwelling: Mutex<Vec<String>>,
    exited: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zone-entered requests received so far, oldest first.
    pub fn entered(&self) -> Vec<SprayingRequest> {
        self.entered.lock().clone()
    }

    pub fn dwelling(&self) -> Vec<String> {
        self.dwelling.lock().clone()
    }

    pub fn exited(&self) -> Vec<String> {
        self.exited.lock().clone()
    }

    /// Remove and return the recorded zone-entered requests.
    pub fn take_entered(&self) -> Vec<SprayingRequest> {
        std::mem::take(&mut *self.entered.lock())
    }
}

impl ZoneSink for MemorySink {
    fn notify_zone_entered(&self, request: SprayingRequest) -> Result<()> {
        self.entered.lock().push(request);
        Ok(())
    }

    fn on_dwell(&self, request_id: &str) -> Result<()> {
        self.dwelling.lock().push(request_id.to_string());
        Ok(())
    }

    fn on_exit(&self, request_id: &str) -> Result<()> {
        self.exited.lock().push(request_id.to_string());
        Ok(())
    }
}

impl<T: ZoneSink + ?Sized> ZoneSink for std::sync::Arc<T> {
    fn notify_zone_entered(&self, request: SprayingRequest) -> Result<()> {
        (**self).notify_zone_entered(request)
    }

    fn on_dwell(&self, request_id: &str) -> Result<()> {
        (**self).on_dwell(request_id)
    }

    fn on_exit(&self, request_id: &str) -> Result<()> {
        (**self).on_exit(request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SprayError;
    use std::sync::Arc;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        sink.notify_zone_entered(SprayingRequest::new("a", vec![])).unwrap();
        sink.notify_zone_entered(SprayingRequest::new("b", vec![])).unwrap();
        sink.on_dwell("c").unwrap();
        sink.on_exit("d").unwrap();

        let ids: Vec<String> = sink.entered().into_iter().map(|r| r.request_id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(sink.dwelling(), vec!["c"]);
        assert_eq!(sink.exited(), vec!["d"]);

        assert_eq!(sink.take_entered().len(), 2);
        assert!(sink.entered().is_empty());
    }

    #[test]
    fn test_fn_sink_uses_default_hooks() {
        let sink = FnSink(|request: SprayingRequest| -> Result<()> {
            if request.is_empty() {
                Err(SprayError::Notification("nothing to spray".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(sink.notify_zone_entered(SprayingRequest::new("x", vec![])).is_err());
        assert!(sink.on_dwell("x").is_ok());
        assert!(sink.on_exit("x").is_ok());
    }

    #[test]
    fn test_arc_forwards_hooks() {
        let sink = Arc::new(MemorySink::new());
        let shared: Arc<MemorySink> = Arc::clone(&sink);
        ZoneSink::on_exit(&shared, "z").unwrap();
        assert_eq!(sink.exited(), vec!["z"]);
    }
}
