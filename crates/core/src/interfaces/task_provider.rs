use crate::types::{BuildTaskDescriptor, TaskDefinition};

/// The two capabilities a host's task system needs
pub trait TaskProvider {
    /// Tasks available for the active file
    fn provide_tasks(&mut self) -> Vec<BuildTaskDescriptor>;

    /// Turn a persisted definition into a runnable task.
    ///
    /// Returns `None` for definitions this provider does not own.
    fn resolve_task(&self, definition: &TaskDefinition) -> Option<BuildTaskDescriptor>;
}
