/// Owns the cancel handle of a running interval or animation-frame loop.
///
/// The loop is cancelled exactly once: on `stop`, or when the guard is
/// dropped, whichever happens first.
pub struct LoopGuard {
    name: &'static str,
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl LoopGuard {
    pub fn new(name: &'static str, cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        log::trace!("loop {name} started");
        Self {
            name,
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.cancel.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            log::trace!("loop {} stopped", self.name);
            cancel();
        }
    }
}

impl Drop for LoopGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for LoopGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoopGuard")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .finish()
    }
}
