use anyhow::Result;

/// Toolkit-facing drawable-lifecycle contract.
///
/// A *drawable* is the toolkit's view of a renderable surface whose context
/// can be made the active target for drawing commands on a thread. The
/// contract is deliberately narrow: a current-target query, activation,
/// release, and disposal, plus one no-op the toolkit's capability set
/// requires.
pub trait Drawable {
    /// Returns whether this drawable believes it is the calling thread's
    /// active rendering target.
    ///
    /// This reflects local bookkeeping only. It is never verified against
    /// the backend's actual current-context state, so a `true` result is
    /// not proof that the last [`make_current`](Drawable::make_current)
    /// succeeded.
    fn is_current(&self) -> bool;

    /// Marks this drawable current, then asks the native backend to
    /// activate its context for the calling thread.
    ///
    /// The flag flips before the backend is invoked and stays set even when
    /// activation fails; the backend's error is returned to the caller
    /// unchanged. Calling this while already current re-invokes the backend.
    fn make_current(&mut self) -> Result<()>;

    /// Marks this drawable as no longer current.
    ///
    /// Local bookkeeping only. The backend exposes no release entry point,
    /// so nothing is forwarded.
    fn release_context(&mut self);

    /// Marks this drawable as no longer current ahead of disposal.
    ///
    /// Performs no native cleanup; the backend owns the real context's
    /// lifetime. Nothing here prevents reuse of the handle afterwards, but
    /// hosts are expected to drop it.
    fn destroy(&mut self);

    /// Accepts an opaque buffer of pointer-sized CL sharing property words.
    ///
    /// Present only to complete the toolkit's capability set. The input is
    /// neither read nor validated, and no backend call is made.
    fn set_cl_sharing_properties(&mut self, properties: &[usize]) {
        let _ = properties;
    }
}
