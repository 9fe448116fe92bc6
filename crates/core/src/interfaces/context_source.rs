use crate::types::ActiveContext;

/// Answers "what is the active file right now".
///
/// Queried again at each build launch, so values may change between
/// synthesis and execution.
pub trait ContextSource: Send + Sync {
    fn active_context(&self) -> Option<ActiveContext>;
}

impl ContextSource for ActiveContext {
    fn active_context(&self) -> Option<ActiveContext> {
        Some(self.clone())
    }
}

impl ContextSource for Option<ActiveContext> {
    fn active_context(&self) -> Option<ActiveContext> {
        self.clone()
    }
}
