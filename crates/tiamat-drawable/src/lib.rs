//! Drawable-lifecycle adapter between a windowing toolkit and a native
//! rendering backend.
//!
//! The native backend owns the real graphics context, from creation to
//! surface configuration and rendering. This crate owns exactly one piece
//! of state: which logical drawable believes it is the calling thread's
//! active rendering target. Activation requests are forwarded to the
//! backend's single entry point; everything else is local bookkeeping.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`backend`] | `NativeBackend`, the consumed activation capability |
//! | [`drawable`] | `Drawable`, the toolkit-facing lifecycle contract |
//! | [`handle`] | `DrawableHandle`, the adapter |
//! | [`logging`] | `init_logging`, `LoggingConfig` |
//! | `gl` | `GlutinBackend` (feature `glutin`) |
//!
//! # Quick start
//!
//! ```rust
//! use tiamat_drawable::{Drawable, DrawableHandle, NativeBackend};
//!
//! struct Stub;
//!
//! impl NativeBackend for Stub {
//!     fn make_context_current(&self) -> anyhow::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut drawable = DrawableHandle::new(Stub);
//! assert!(!drawable.is_current());
//!
//! drawable.make_current().unwrap();
//! assert!(drawable.is_current());
//!
//! drawable.release_context();
//! assert!(!drawable.is_current());
//! ```

pub mod backend;
pub mod drawable;
pub mod handle;
pub mod logging;

#[cfg(feature = "glutin")]
pub mod gl;

pub use backend::NativeBackend;
pub use drawable::Drawable;
pub use handle::DrawableHandle;

#[cfg(feature = "glutin")]
pub use gl::GlutinBackend;
