//! Thread-safe handle to an [`AgentService`]
//!
//! The service itself is single-threaded. Hosts that reach one organizer from
//! several threads share it through this handle: one lock per organizer,
//! many concurrent readers or a single writer.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use super::AgentService;

/// Cloneable, lock-protected organizer
#[derive(Clone)]
pub struct SharedAgent {
    inner: Arc<RwLock<AgentService>>,
}

impl fmt::Debug for SharedAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAgent")
            .field("handles", &Arc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl SharedAgent {
    /// Wrap an organizer
    pub fn new(agent: AgentService) -> Self {
        Self {
            inner: Arc::new(RwLock::new(agent)),
        }
    }

    /// Run a read-only operation under the shared lock
    pub fn read<R>(&self, f: impl FnOnce(&AgentService) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run a mutating operation under the exclusive lock
    pub fn write<R>(&self, f: impl FnOnce(&mut AgentService) -> R) -> R {
        f(&mut *self.inner.write())
    }
}

impl From<AgentService> for SharedAgent {
    fn from(agent: AgentService) -> Self {
        Self::new(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concurrent_writers_are_serialized() {
        let shared = SharedAgent::new(AgentService::new("John Doe"));

        std::thread::scope(|scope| {
            for n in 0..8 {
                let handle = shared.clone();
                scope.spawn(move || {
                    handle
                        .write(|agent| {
                            agent.create_task_with_reminders(
                                &format!("Task {n}"),
                                "parallel",
                                "2025-02-15 10:00",
                                "MEDIUM",
                                ["2025-02-15 09:00"],
                            )
                        })
                        .unwrap();
                });
            }
        });

        let ids: Vec<String> = shared.read(|agent| {
            agent.tasks().iter().map(|t| t.id.to_string()).collect()
        });
        assert_eq!(ids.len(), 8);
        assert_eq!(ids.last().map(String::as_str), Some("task_8"));
    }

    #[test]
    fn readers_see_writes() {
        let shared: SharedAgent = AgentService::new("John Doe").into();
        let other = shared.clone();
        other.write(|agent| {
            agent
                .create_task_with_reminders(
                    "Call",
                    "Call the bank",
                    "2025-02-15 10:00",
                    "LOW",
                    ["2025-02-15 09:00"],
                )
                .map(|_| ())
        })
        .unwrap();

        let count = shared.read(|agent| agent.todays_schedule("2025-02-15").map(|t| t.len()));
        assert_eq!(count.unwrap(), 1);
    }
}
