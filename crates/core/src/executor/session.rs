use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use tracing::{debug, info, warn};

use super::{BuildExecutor, MarkerWatcher};
use crate::error::Result;
use crate::interfaces::{BuildSink, ContextSource};
use crate::types::BuildTaskDescriptor;

/// A task that rebuilds whenever the marker file changes.
///
/// Builds run one at a time on a worker thread. Requests arriving while a
/// build is running collapse into a single follow-up build, so overlapping
/// invocations never happen. Closing stops the watcher and discards queued
/// requests without waiting; a child process that is already running is left
/// to finish.
pub struct BuildSession {
    trigger: Option<Sender<()>>,
    watcher: Option<MarkerWatcher>,
    worker: Option<JoinHandle<()>>,
    closed: Arc<AtomicBool>,
}

impl BuildSession {
    /// Start watching `marker` and queue the first build
    pub fn open(
        executor: BuildExecutor,
        task: BuildTaskDescriptor,
        source: Arc<dyn ContextSource>,
        sink: Arc<dyn BuildSink>,
        marker: PathBuf,
    ) -> Result<Self> {
        let (trigger, requests) = mpsc::channel();
        let watcher = MarkerWatcher::watch(&marker, trigger.clone())?;
        let closed = Arc::new(AtomicBool::new(false));

        info!("Watching {:?} for rebuild requests of '{}'", marker, task.label);
        let worker_closed = closed.clone();
        let worker = thread::Builder::new()
            .name("cppbuild-session".to_string())
            .spawn(move || run_queue(requests, worker_closed, executor, task, source, sink))?;

        let session = Self {
            trigger: Some(trigger),
            watcher: Some(watcher),
            worker: Some(worker),
            closed,
        };
        session.request_build();
        Ok(session)
    }

    /// Ask for another build; returns false once the session is closed
    pub fn request_build(&self) -> bool {
        if self.closed.load(Ordering::SeqCst) {
            return false;
        }
        self.trigger
            .as_ref()
            .is_some_and(|trigger| trigger.send(()).is_ok())
    }

    /// Stop watching and drop queued requests. Returns immediately; a build
    /// in flight runs to completion on the worker.
    pub fn close(mut self) {
        self.stop();
        // Detach the worker
        self.worker.take();
    }

    /// Block until the session ends
    pub fn wait(mut self) {
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Build session worker panicked");
            }
        }
    }

    fn stop(&mut self) {
        self.closed.store(true, Ordering::SeqCst);
        if self.watcher.take().is_some() {
            debug!("Stopped watching marker");
        }
        self.trigger.take();
    }
}

impl Drop for BuildSession {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_queue(
    requests: Receiver<()>,
    closed: Arc<AtomicBool>,
    executor: BuildExecutor,
    task: BuildTaskDescriptor,
    source: Arc<dyn ContextSource>,
    sink: Arc<dyn BuildSink>,
) {
    while requests.recv().is_ok() {
        // Coalesce requests that piled up during the previous build
        while requests.try_recv().is_ok() {}

        if closed.load(Ordering::SeqCst) {
            debug!("Session closed, dropping queued build of '{}'", task.label);
            break;
        }

        match executor.execute(&task, source.as_ref(), sink.as_ref()) {
            Ok(outcome) => debug!("Session build of '{}' finished: {:?}", task.label, outcome),
            Err(err) => warn!("Session build of '{}' failed: {}", task.label, err),
        }
    }
    debug!("Build session for '{}' ended", task.label);
}
