//! Task synthesis: one build task per usable compiler for the active file

mod synthesizer;

pub use synthesizer::{LABEL_SUFFIX, SOURCE_PREFIX, TaskSynthesizer, normalize_label, task_label};
