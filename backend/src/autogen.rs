use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};
use crate::{generator, store::CandidateStore};

/// Running periodic generation task. Dropping the handle leaves the task
/// running; call [`AutoGenerationHandle::stop`] to cancel it.
pub struct AutoGenerationHandle {
    task: JoinHandle<()>,
}

impl AutoGenerationHandle {
    pub fn stop(self) {
        self.task.abort();
        info!("Auto-generation stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

/// Inserts one generated candidate every `period`, the first one immediately.
pub fn start(store: Arc<CandidateStore>, period: Duration) -> AutoGenerationHandle {
    info!("Auto-generation started, one candidate every {:?}", period);

    let task = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let candidate = generator::generate(&mut rand::thread_rng());
            match store.insert(candidate) {
                Ok(c) => debug!("Auto-generated candidate {} ({})", c.id, c.name),
                Err(e) => error!("Auto-generation failed: {:?}", e),
            }
        }
    });

    AutoGenerationHandle { task }
}
