pub mod compiler;
pub mod context;
pub mod platform;
pub mod task;

pub use compiler::{CompilerDescriptor, MSVC_COMPILER, UserCompiler};
pub use context::ActiveContext;
pub use platform::HostPlatform;
pub use task::{
    BuildTaskDescriptor, LabelStyle, PersistedTask, SourceLanguage, TASK_TYPE, TaskDefinition,
    TaskGroup, TaskOptions,
};
