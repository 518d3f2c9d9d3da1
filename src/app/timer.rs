//! Tokio-backed [`Scheduler`]: each task sleeps on its own and is then
//! posted back into the event loop.

use std::time::Duration;

use tokio::sync::mpsc;

use super::event::AppEvent;
use crate::core::slider::DeferredTask;
use crate::core::stage::Scheduler;

pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }
}

impl Scheduler for TokioScheduler {
    /// Fire-and-forget: tasks are never cancelled, so a task scheduled by
    /// one gesture may run while the next gesture is in progress.
    fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::Deferred(task));
        });
    }
}
