use std::sync::{Mutex, PoisonError};

use crate::interfaces::BuildSink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Output(String),
    Close(i32),
}

/// Records every sink event in order
#[derive(Debug, Default)]
pub struct BufferSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// All output chunks joined together
    pub fn output(&self) -> String {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Output(chunk) => Some(chunk),
                SinkEvent::Close(_) => None,
            })
            .collect()
    }

    pub fn close_codes(&self) -> Vec<i32> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SinkEvent::Close(code) => Some(code),
                SinkEvent::Output(_) => None,
            })
            .collect()
    }

    fn push(&self, event: SinkEvent) {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
    }
}

impl BuildSink for BufferSink {
    fn on_output(&self, chunk: &str) {
        self.push(SinkEvent::Output(chunk.to_string()));
    }

    fn on_close(&self, exit_code: i32) {
        self.push(SinkEvent::Close(exit_code));
    }
}
