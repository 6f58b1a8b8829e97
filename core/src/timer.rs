//! Timer drivers.
//!
//! A [`TimerDriver`] schedules repeating and one-shot callbacks and hands
//! back a handle per timer. Dropping the handle cancels the timer, so a
//! running burst cycle is simply a handle held by its owner.
//!
//! [`ManualTimers`] is a virtual clock: nothing fires until the owner calls
//! [`ManualTimers::advance`]. It backs the tests and the preview tool.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Schedules deferred callbacks on a single-threaded event loop.
pub trait TimerDriver {
    /// Cancels its timer when dropped.
    type Handle;

    /// Call `callback` every `period_ms`, first after one period.
    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;

    /// Call `callback` once after `delay_ms`.
    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

// ─────────────────────────────────────────────────────────────────────────────
// Manual (virtual clock) driver
// ─────────────────────────────────────────────────────────────────────────────

enum Callback {
    Repeat(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due_ms: u64,
    period_ms: Option<u64>,
    /// `None` while the callback is running
    callback: Option<Callback>,
}

#[derive(Default)]
struct ManualInner {
    now_ms: u64,
    next_id: u64,
    entries: Vec<Entry>,
}

impl ManualInner {
    fn schedule(&mut self, delay_ms: u64, period_ms: Option<u64>, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due_ms: self.now_ms + delay_ms,
            period_ms,
            callback: Some(callback),
        });
        id
    }

    fn remove(&mut self, id: u64) -> Option<Entry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Pop the earliest timer due at or before `limit_ms` and move the clock
    /// to its due time. Repeating entries stay in place without a callback.
    fn take_due(&mut self, limit_ms: u64) -> Option<(u64, Callback)> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.callback.is_some() && e.due_ms <= limit_ms)
            .min_by_key(|(_, e)| (e.due_ms, e.id))
            .map(|(idx, _)| idx)?;

        let entry = &mut self.entries[idx];
        self.now_ms = entry.due_ms;
        let id = entry.id;
        let callback = entry.callback.take()?;
        if entry.period_ms.is_none() {
            self.entries.remove(idx);
        }
        Some((id, callback))
    }

    /// Put a repeating callback back after it ran. Returns it when the timer
    /// was cancelled in the meantime.
    fn rearm(&mut self, id: u64, callback: Box<dyn FnMut()>) -> Option<Box<dyn FnMut()>> {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.due_ms += entry.period_ms.unwrap_or(0);
                entry.callback = Some(Callback::Repeat(callback));
                None
            }
            None => Some(callback),
        }
    }
}

/// Virtual-clock timer driver.
///
/// Clones share one clock. Timers fire in due-time order, ties broken by
/// creation order; a repeating timer re-arms at `due + period`, and a timer
/// cancelled by an earlier callback in the same [`advance`](Self::advance)
/// never fires.
#[derive(Clone, Default)]
pub struct ManualTimers {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Number of live repeating timers.
    pub fn pending_repeating(&self) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.period_ms.is_some())
            .count()
    }

    /// Advance the clock by `ms`, running every callback that comes due.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms() + ms;
        loop {
            // Callbacks may schedule or cancel timers, so the borrow must
            // end before they run.
            let next = self.inner.borrow_mut().take_due(target);
            let Some((id, callback)) = next else {
                break;
            };
            match callback {
                Callback::Once(f) => f(),
                Callback::Repeat(mut f) => {
                    f();
                    let cancelled = self.inner.borrow_mut().rearm(id, f);
                    drop(cancelled);
                }
            }
        }
        self.inner.borrow_mut().now_ms = target;
    }

    fn handle(&self, id: u64) -> ManualHandle {
        ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl TimerDriver for ManualTimers {
    type Handle = ManualHandle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
        let period = u64::from(period_ms.max(1));
        let id = self
            .inner
            .borrow_mut()
            .schedule(period, Some(period), Callback::Repeat(callback));
        tracing::trace!(id, period_ms = period, "scheduled repeating timer");
        self.handle(id)
    }

    fn once(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
        let id = self
            .inner
            .borrow_mut()
            .schedule(u64::from(delay_ms), None, Callback::Once(callback));
        tracing::trace!(id, delay_ms, "scheduled one-shot timer");
        self.handle(id)
    }
}

/// Handle to a [`ManualTimers`] timer. Cancels on drop.
pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl ManualHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            // The removed callback may own other handles; drop it only after
            // the borrow is released.
            let removed = inner.borrow_mut().remove(self.id);
            if removed.is_some() {
                tracing::trace!(id = self.id, "cancelled timer");
            }
            drop(removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, move || c.set(c.get() + 1))
    }

    #[test]
    fn test_every_fires_each_period() {
        let timers = ManualTimers::new();
        let (count, f) = counter();
        let _handle = timers.every(1000, Box::new(f));

        timers.advance(999);
        assert_eq!(count.get(), 0);
        timers.advance(1);
        assert_eq!(count.get(), 1);
        timers.advance(3000);
        assert_eq!(count.get(), 4);
        assert_eq!(timers.now_ms(), 4000);
    }

    #[test]
    fn test_once_fires_once() {
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(0));
        let f = Rc::clone(&fired);
        let _handle = timers.once(500, Box::new(move || f.set(f.get() + 1)));

        timers.advance(10_000);
        assert_eq!(fired.get(), 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_dropping_handle_cancels() {
        let timers = ManualTimers::new();
        let (count, f) = counter();
        let handle = timers.every(100, Box::new(f));

        timers.advance(250);
        assert_eq!(count.get(), 2);
        drop(handle);
        assert_eq!(timers.pending(), 0);
        timers.advance(1000);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_callback_can_cancel_other_timer() {
        let timers = ManualTimers::new();
        let (count, f) = counter();
        let victim = Rc::new(RefCell::new(Some(timers.once(100, Box::new(f)))));

        let slot = Rc::clone(&victim);
        let _killer = timers.once(50, Box::new(move || {
            slot.borrow_mut().take();
        }));

        timers.advance(200);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_callback_can_schedule_timer() {
        let timers = ManualTimers::new();
        let fired = Rc::new(Cell::new(0u64));
        let slot: Rc<RefCell<Option<ManualHandle>>> = Rc::new(RefCell::new(None));

        let driver = timers.clone();
        let fired_inner = Rc::clone(&fired);
        let slot_inner = Rc::clone(&slot);
        let _outer = timers.once(
            100,
            Box::new(move || {
                let clock = driver.clone();
                let handle = driver.once(
                    50,
                    Box::new(move || fired_inner.set(clock.now_ms())),
                );
                *slot_inner.borrow_mut() = Some(handle);
            }),
        );

        timers.advance(1000);
        assert_eq!(fired.get(), 150);
    }

    #[test]
    fn test_due_order_then_creation_order() {
        let timers = ManualTimers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let o = Rc::clone(&order);
        let _a = timers.once(200, Box::new(move || o.borrow_mut().push("a")));
        let o = Rc::clone(&order);
        let _b = timers.once(100, Box::new(move || o.borrow_mut().push("b")));
        let o = Rc::clone(&order);
        let _c = timers.once(100, Box::new(move || o.borrow_mut().push("c")));

        timers.advance(300);
        assert_eq!(*order.borrow(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let timers = ManualTimers::new();
        let (count, f) = counter();
        let _handle = timers.every(0, Box::new(f));

        timers.advance(5);
        assert_eq!(count.get(), 5);
    }
}
