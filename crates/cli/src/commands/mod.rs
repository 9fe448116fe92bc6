pub mod ensure;
pub mod init;
pub mod list;
pub mod run;
pub mod tasks;

pub use ensure::ensure_command;
pub use init::init_command;
pub use list::list_command;
pub use run::run_command;
pub use tasks::tasks_command;
