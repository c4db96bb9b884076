use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Background tasks keyed by purpose; spawning under a used key aborts the
/// previous task.
#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<&'static str, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, key: &'static str, task: JoinHandle<()>) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.tasks.insert(key, task) {
            previous.abort();
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks.get(key).is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn replacing_a_key_aborts_the_old_task() {
        let mut tasks = TaskManager::new();
        let (alive_tx, alive_rx) = tokio::sync::oneshot::channel::<()>();
        let slow = tokio::spawn(async move {
            let _alive = alive_tx;
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        tasks.spawn("search", slow);
        assert!(tasks.is_running("search"));

        tasks.spawn("search", tokio::spawn(async {}));
        assert!(alive_rx.await.is_err());

        tasks.abort_all();
        assert!(!tasks.is_running("search"));
    }
}
