//! Dispatcher double that records every call.

use std::sync::Mutex;

use async_trait::async_trait;
use greenapi::{DispatchRequest, Dispatcher, ResponseEnvelope, TransportError};

pub struct RecordingDispatcher {
    calls: Mutex<Vec<DispatchRequest>>,
    reply: Result<ResponseEnvelope, TransportError>,
}

impl Default for RecordingDispatcher {
    fn default() -> Self {
        Self::replying(ResponseEnvelope::new(200, "OK", b"{}".to_vec()))
    }
}

#[allow(dead_code)]
impl RecordingDispatcher {
    pub fn replying(envelope: ResponseEnvelope) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Ok(envelope),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Err(TransportError::new(message)),
        }
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last(&self) -> DispatchRequest {
        self.calls
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no call recorded")
    }
}

#[async_trait]
impl Dispatcher for RecordingDispatcher {
    async fn dispatch(&self, request: DispatchRequest) -> Result<ResponseEnvelope, TransportError> {
        self.calls.lock().unwrap().push(request);
        self.reply.clone()
    }
}
