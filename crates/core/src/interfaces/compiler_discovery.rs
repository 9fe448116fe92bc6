use crate::types::CompilerDescriptor;

/// Supplies the compilers known on this machine
pub trait CompilerDiscovery: Send + Sync {
    fn known_compilers(&self) -> Vec<CompilerDescriptor>;
}

/// A fixed list, as supplied by configuration or tests
impl CompilerDiscovery for Vec<CompilerDescriptor> {
    fn known_compilers(&self) -> Vec<CompilerDescriptor> {
        self.clone()
    }
}
