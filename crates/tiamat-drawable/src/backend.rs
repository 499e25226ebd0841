use std::sync::Arc;

use anyhow::Result;

/// Activation capability exposed by the native rendering backend.
///
/// The backend owns context creation, surface configuration, and command
/// submission; none of that is visible here. This trait is the single
/// entry point this crate consumes: make *some* native context current for
/// the calling thread. Failure semantics are the backend's own and
/// propagate unchanged to whoever asked for activation.
///
/// Backends are injected into [`DrawableHandle`](crate::DrawableHandle)
/// rather than reached through process-wide state, so hosts can wire up
/// test doubles or several independent contexts.
pub trait NativeBackend {
    /// Makes the backend's context current for the calling thread.
    fn make_context_current(&self) -> Result<()>;
}

impl<B: NativeBackend + ?Sized> NativeBackend for &B {
    fn make_context_current(&self) -> Result<()> {
        (**self).make_context_current()
    }
}

impl<B: NativeBackend + ?Sized> NativeBackend for Box<B> {
    fn make_context_current(&self) -> Result<()> {
        (**self).make_context_current()
    }
}

impl<B: NativeBackend + ?Sized> NativeBackend for Arc<B> {
    fn make_context_current(&self) -> Result<()> {
        (**self).make_context_current()
    }
}
