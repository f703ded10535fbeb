use assert_call::call;

use crate::{MemoryUrlStore, QueryParams, UrlStore};

/// A `MemoryUrlStore` that records every history write with `call!`.
pub struct RecordingStore(pub MemoryUrlStore);

impl RecordingStore {
    pub fn new(location: &str) -> Self {
        Self(MemoryUrlStore::new(location))
    }
}

impl UrlStore for RecordingStore {
    fn query_parameters(&self) -> QueryParams {
        self.0.query_parameters()
    }
    fn path(&self) -> String {
        self.0.path()
    }
    fn push_history_state(&self, path: &str) {
        call!("push {path}");
        self.0.push_history_state(path)
    }
    fn replace_history_state(&self, path: &str) {
        call!("replace {path}");
        self.0.replace_history_state(path)
    }
}
