use std::cell::Cell;

use anyhow::{Result, bail};
use log::info;

use tiamat_drawable::logging::{LoggingConfig, init_logging};
use tiamat_drawable::{Drawable, DrawableHandle, NativeBackend};

/// Stand-in backend: logs and counts activation requests, and can be told
/// to reject the next one so the failure path is visible end to end.
struct ConsoleBackend {
    activations: Cell<u32>,
    reject_next: Cell<bool>,
}

impl ConsoleBackend {
    fn new() -> Self {
        Self {
            activations: Cell::new(0),
            reject_next: Cell::new(false),
        }
    }

    fn reject_next(&self) {
        self.reject_next.set(true);
    }
}

impl NativeBackend for ConsoleBackend {
    fn make_context_current(&self) -> Result<()> {
        self.activations.set(self.activations.get() + 1);
        if self.reject_next.replace(false) {
            bail!("native context is invalid");
        }
        info!(
            "backend: context made current (activation #{})",
            self.activations.get()
        );
        Ok(())
    }
}

fn report(label: &str, drawable: &impl Drawable) {
    let state = if drawable.is_current() { "current" } else { "not current" };
    println!("  {label:<44} -> {state}");
}

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        filter: Some("info".into()),
        ..LoggingConfig::default()
    });

    println!();
    println!("tiamat-drawable lifecycle walkthrough");
    println!("=====================================");
    println!();

    let backend = ConsoleBackend::new();
    let mut drawable = DrawableHandle::new(&backend);

    report("new handle", &drawable);

    drawable.make_current()?;
    report("make_current", &drawable);

    drawable.make_current()?;
    report("make_current again (backend re-invoked)", &drawable);

    drawable.release_context();
    report("release_context (no backend call)", &drawable);

    drawable.set_cl_sharing_properties(&[0x1084, 0]);
    report("set_cl_sharing_properties (no-op)", &drawable);

    // Failure path: the error propagates, yet the handle keeps believing
    // it is current. Perceived state and ground truth diverge here.
    backend.reject_next();
    match drawable.make_current() {
        Ok(()) => println!("  unexpected: activation succeeded"),
        Err(err) => println!("  make_current failed: {err}"),
    }
    report("after failed activation (flag still set!)", &drawable);

    drawable.destroy();
    report("destroy", &drawable);

    println!();
    println!(
        "backend saw {} activation request(s) in total",
        backend.activations.get()
    );

    Ok(())
}
