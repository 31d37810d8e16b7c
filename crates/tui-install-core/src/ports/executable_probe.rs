//! Executable presence probe.

/// Answers whether an executable name resolves through the search path.
///
/// This is a presence check only: no version or functionality validation.
pub trait ExecutableProbe: Send + Sync {
    fn is_available(&self, name: &str) -> bool;
}
