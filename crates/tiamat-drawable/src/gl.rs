//! Glutin-backed activation bridge.
//!
//! [`GlutinBackend`] adapts an already-created glutin context + window
//! surface pair to [`NativeBackend`]. Creating the display, config,
//! context, and surface stays with the host; this module only forwards
//! activation requests.

use anyhow::{Context, Result};
use glutin::context::PossiblyCurrentContext;
use glutin::prelude::*;
use glutin::surface::{Surface, WindowSurface};

use crate::backend::NativeBackend;

/// Native backend over a glutin context/surface pair.
///
/// Owns both halves so activation always binds the context to the surface
/// it was created against. The pair can be taken back with
/// [`into_parts`](GlutinBackend::into_parts) when the host tears the
/// window down.
pub struct GlutinBackend {
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
}

impl GlutinBackend {
    pub fn new(context: PossiblyCurrentContext, surface: Surface<WindowSurface>) -> Self {
        Self { context, surface }
    }

    /// Releases the wrapped context and surface back to the host.
    pub fn into_parts(self) -> (PossiblyCurrentContext, Surface<WindowSurface>) {
        (self.context, self.surface)
    }
}

impl NativeBackend for GlutinBackend {
    fn make_context_current(&self) -> Result<()> {
        self.context
            .make_current(&self.surface)
            .context("failed to make GL context current")
    }
}
