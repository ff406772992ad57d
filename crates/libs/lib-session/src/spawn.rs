//! Fire-and-forget task execution for the store's session checks.

use futures::future::LocalBoxFuture;

/// Run a `!Send` task to completion on the current thread without awaiting
/// it.
pub trait Spawn {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>);
}

/// Spawns onto the current [`tokio::task::LocalSet`].
///
/// Must be used from inside `LocalSet::run_until` (or a task spawned on one).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioSpawner;

#[cfg(not(target_arch = "wasm32"))]
impl Spawn for TokioSpawner {
    fn spawn_local(&self, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(task);
    }
}
