use libc::{sighandler_t, signal, SIGINT};

extern "C" fn on_sigint(_: i32) {
    // the foreground child owns the interrupt
}

/// Keeps SIGINT away from the interpreter while a child runs; the previous
/// disposition comes back when the guard drops.
pub(super) struct InterruptGuard {
    previous: sighandler_t,
}

impl InterruptGuard {
    pub(super) fn install() -> Self {
        let previous = unsafe { signal(SIGINT, on_sigint as sighandler_t) };
        Self { previous }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        unsafe {
            signal(SIGINT, self.previous);
        }
    }
}
