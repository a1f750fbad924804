//! Progress hooks for inversion runs.
//!
//! Observers only watch: there is no cancellation, so no hook can stop a
//! run. All methods default to no-ops.

/// State reported after each restart completes
#[derive(Clone, Debug, PartialEq)]
pub struct RestartContext {
    /// Image being reconstructed (0-indexed)
    pub image: usize,
    /// Restart that just finished (0-indexed)
    pub restart: usize,
    /// Restarts planned for this image
    pub restarts: usize,
    /// Final cost of this restart
    pub final_cost: f64,
    /// Lowest final cost seen so far for this image
    pub best_cost: f64,
}

/// Trait for inversion observers
pub trait InversionObserver {
    /// Called before the restarts of an image start
    fn on_image_begin(&mut self, _image: usize, _images: usize) {}

    /// Called after every restart, in restart order
    fn on_restart_end(&mut self, _ctx: &RestartContext) {}

    /// Called once the best restart of an image is known
    fn on_image_end(&mut self, _image: usize, _best_cost: f64) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl InversionObserver for NoopObserver {}

/// Observer that records every restart context, mostly for tests
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    /// Images started, in order
    pub images: Vec<usize>,
    /// Restart contexts, in notification order
    pub restarts: Vec<RestartContext>,
    /// Best cost per finished image
    pub best: Vec<f64>,
}

impl InversionObserver for RecordingObserver {
    fn on_image_begin(&mut self, image: usize, _images: usize) {
        self.images.push(image);
    }

    fn on_restart_end(&mut self, ctx: &RestartContext) {
        self.restarts.push(ctx.clone());
    }

    fn on_image_end(&mut self, _image: usize, best_cost: f64) {
        self.best.push(best_cost);
    }
}
