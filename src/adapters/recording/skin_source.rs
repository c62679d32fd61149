//! Recording adapter for the `SkinSource` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::skin_source::{FetchFuture, SkinSource};

/// Records skin fetches while delegating to an inner implementation.
pub struct RecordingSkinSource {
    inner: Box<dyn SkinSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSkinSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn SkinSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl SkinSource for RecordingSkinSource {
    fn fetch(&self, uuid: &str) -> FetchFuture<'_> {
        let input = json!({ "uuid": uuid });
        let inner_future = self.inner.fetch(uuid);
        Box::pin(async move {
            let result = inner_future.await;
            record_result(&self.recorder, "skin_source", "fetch", &input, &result);
            result
        })
    }
}
