pub mod workspace;

pub use workspace::{active_context, load_provider, workspace_root};
