//! Timer driver backed by Dioxus tasks.
//!
//! Each timer is a task sleeping on `gloo_timers` futures. Cancelling is
//! cancelling the task, which the handle does when dropped.

use dioxus::core::Task;
use dioxus::prelude::*;
use festive_core::TimerDriver;
use gloo_timers::future::TimeoutFuture;

/// Schedules timers as tasks in the current component scope.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskTimers;

/// A scheduled task. Cancels on drop.
pub struct TaskHandle(Task);

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

impl TimerDriver for TaskTimers {
    type Handle = TaskHandle;

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> TaskHandle {
        let period_ms = period_ms.max(1);
        TaskHandle(spawn(async move {
            loop {
                TimeoutFuture::new(period_ms).await;
                callback();
            }
        }))
    }

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> TaskHandle {
        TaskHandle(spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            callback();
        }))
    }
}
