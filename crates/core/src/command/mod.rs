pub mod resolved;
pub mod variables;

pub use resolved::{ResolvedCommand, quote_command};
pub use variables::VariableResolver;
