//! Deferred task queue.
//!
//! Event callbacks may not mutate global dispatch tables while an event is in
//! flight. Work that must wait until the current event finishes (installing an
//! outside-click watch, for example) is posted here and drained by the host
//! between events.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Get the raw u64 value of this task ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Global counter for generating unique task IDs.
static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

fn next_task_id() -> TaskId {
    TaskId(NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed))
}

/// A boxed task closure.
type BoxedTask = Box<dyn FnOnce() + Send + 'static>;

/// Internal task data.
struct TaskData {
    id: TaskId,
    task: BoxedTask,
}

/// FIFO queue of deferred closures.
pub struct TaskQueue {
    /// Pending tasks to execute.
    tasks: VecDeque<TaskData>,
}

impl TaskQueue {
    /// Create a new task queue.
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }

    /// Post a task to run on the next drain.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn post<F>(&mut self, task: F) -> TaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let id = next_task_id();
        self.tasks.push_back(TaskData {
            id,
            task: Box::new(task),
        });
        tracing::trace!(target: "tactile_core::task", ?id, "task posted");
        id
    }

    /// Cancel a pending task.
    ///
    /// Returns `true` if the task was found and cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            self.tasks.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if there are any pending tasks.
    pub fn has_pending(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Get the number of pending tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }

    /// Remove and return all pending tasks without running them.
    ///
    /// Callers that hold a lock on the queue drain it with this, release the
    /// lock, then run the closures, so a task may post new tasks.
    pub fn take_all(&mut self) -> Vec<Box<dyn FnOnce() + Send + 'static>> {
        self.tasks.drain(..).map(|t| t.task).collect()
    }

    /// Process all pending tasks.
    ///
    /// Returns the number of tasks processed.
    pub fn process_all(&mut self) -> usize {
        let count = self.tasks.len();
        while let Some(task_data) = self.tasks.pop_front() {
            (task_data.task)();
        }
        count
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(TaskQueue: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_post_and_process() {
        let mut queue = TaskQueue::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for n in 0..3 {
            let order_clone = order.clone();
            queue.post(move || order_clone.lock().push(n));
        }

        assert_eq!(queue.pending_count(), 3);
        assert_eq!(queue.process_all(), 3);
        assert!(!queue.has_pending());
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_cancel() {
        let mut queue = TaskQueue::new();
        let ran = Arc::new(Mutex::new(false));

        let ran_clone = ran.clone();
        let id = queue.post(move || *ran_clone.lock() = true);

        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        queue.process_all();
        assert!(!*ran.lock());
    }

    #[test]
    fn test_take_all_leaves_queue_empty() {
        let mut queue = TaskQueue::new();
        queue.post(|| {});
        queue.post(|| {});

        let tasks = queue.take_all();
        assert_eq!(tasks.len(), 2);
        assert!(!queue.has_pending());
    }
}
