use anyhow::Result;

use crate::backend::NativeBackend;
use crate::drawable::Drawable;

/// Adapter satisfying [`Drawable`] on top of an injected [`NativeBackend`].
///
/// Holds a single `current` flag and the backend handle, nothing else. The
/// flag is perceived state, not arbitrated access: the backend is trusted
/// to honor activation requests, and nothing stops another path from
/// changing the native current context behind this handle's back.
///
/// Intended for single-threaded-per-handle use: the thread that renders is
/// the thread that calls these operations. `&mut self` receivers enforce
/// exclusive access; no further synchronization exists or is implied.
pub struct DrawableHandle<B: NativeBackend> {
    backend: B,
    current: bool,
}

impl<B: NativeBackend> DrawableHandle<B> {
    /// Creates a handle that is not current.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            current: false,
        }
    }

    /// Returns the injected backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: NativeBackend> Drawable for DrawableHandle<B> {
    fn is_current(&self) -> bool {
        self.current
    }

    fn make_current(&mut self) -> Result<()> {
        // Flag first, then activation. On backend failure the flag stays
        // set and the error surfaces unchanged; callers that need ground
        // truth must not read it off `is_current`.
        self.current = true;
        self.backend.make_context_current()
    }

    fn release_context(&mut self) {
        self.current = false;
    }

    fn destroy(&mut self) {
        self.current = false;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use anyhow::bail;

    use super::*;

    /// Backend double: counts activations, optionally rejecting them.
    struct Probe {
        activations: Cell<u32>,
        reject: bool,
    }

    impl Probe {
        fn ok() -> Self {
            Self {
                activations: Cell::new(0),
                reject: false,
            }
        }

        fn rejecting() -> Self {
            Self {
                activations: Cell::new(0),
                reject: true,
            }
        }

        fn activations(&self) -> u32 {
            self.activations.get()
        }
    }

    impl NativeBackend for Probe {
        fn make_context_current(&self) -> Result<()> {
            self.activations.set(self.activations.get() + 1);
            if self.reject {
                bail!("context activation rejected");
            }
            Ok(())
        }
    }

    // ── flag bookkeeping ──────────────────────────────────────────────────

    #[test]
    fn new_handle_is_not_current() {
        let handle = DrawableHandle::new(Probe::ok());
        assert!(!handle.is_current());
        assert_eq!(handle.backend().activations(), 0);
    }

    #[test]
    fn make_current_sets_flag_and_activates_once() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.make_current().unwrap();
        assert!(handle.is_current());
        assert_eq!(handle.backend().activations(), 1);
    }

    #[test]
    fn make_current_reactivates_when_already_current() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.make_current().unwrap();
        handle.make_current().unwrap();
        assert!(handle.is_current());
        assert_eq!(handle.backend().activations(), 2);
    }

    #[test]
    fn release_clears_flag_without_backend_call() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.make_current().unwrap();
        handle.release_context();
        assert!(!handle.is_current());
        assert_eq!(handle.backend().activations(), 1);
    }

    #[test]
    fn release_when_not_current_stays_not_current() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.release_context();
        assert!(!handle.is_current());
        assert_eq!(handle.backend().activations(), 0);
    }

    #[test]
    fn destroy_clears_flag_without_backend_call() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.make_current().unwrap();
        handle.destroy();
        assert!(!handle.is_current());
        assert_eq!(handle.backend().activations(), 1);
    }

    #[test]
    fn flag_tracks_last_operation_across_a_sequence() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.make_current().unwrap();
        handle.release_context();
        handle.make_current().unwrap();
        handle.make_current().unwrap();
        handle.destroy();
        handle.make_current().unwrap();
        assert!(handle.is_current());
        assert_eq!(handle.backend().activations(), 4);
    }

    // ── failure propagation ───────────────────────────────────────────────

    #[test]
    fn rejected_activation_propagates_and_leaves_flag_set() {
        let mut handle = DrawableHandle::new(Probe::rejecting());
        let err = handle.make_current().unwrap_err();
        assert_eq!(err.to_string(), "context activation rejected");
        assert!(handle.is_current());
        assert_eq!(handle.backend().activations(), 1);
    }

    // ── sharing properties ────────────────────────────────────────────────

    #[test]
    fn sharing_properties_touch_nothing() {
        let mut handle = DrawableHandle::new(Probe::ok());
        handle.set_cl_sharing_properties(&[0xdead, 0xbeef, 0]);
        assert!(!handle.is_current());
        assert_eq!(handle.backend().activations(), 0);

        handle.make_current().unwrap();
        handle.set_cl_sharing_properties(&[]);
        assert!(handle.is_current());
        assert_eq!(handle.backend().activations(), 1);
    }

    // ── injected / shared backends ────────────────────────────────────────

    #[test]
    fn handles_can_share_one_backend() {
        let backend = Arc::new(Probe::ok());
        let mut left = DrawableHandle::new(Arc::clone(&backend));
        let mut right = DrawableHandle::new(Arc::clone(&backend));

        left.make_current().unwrap();
        right.make_current().unwrap();

        // Each handle keeps its own view; neither is corrected when the
        // other activates. The shared backend still sees every request.
        assert!(left.is_current());
        assert!(right.is_current());
        assert_eq!(backend.activations(), 2);
    }

    #[test]
    fn borrowed_backend_works_through_the_passthrough_impl() {
        let backend = Probe::ok();
        {
            let mut handle = DrawableHandle::new(&backend);
            handle.make_current().unwrap();
        }
        assert_eq!(backend.activations(), 1);
    }
}
