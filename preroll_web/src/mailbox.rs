// Copyright 2026 the Preroll Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Run-to-completion message delivery.
//!
//! Browser callbacks can fire while the orchestrator is still inside one of
//! its own calls (an SDK error thrown synchronously from `requestAds`, a
//! `click` dispatched by `play()`). A [`Mailbox`] queues such messages and
//! delivers them once the running handler has returned, in arrival order.

use alloc::collections::VecDeque;
use core::cell::RefCell;

/// Owns a target and the messages waiting for it.
pub(crate) struct Mailbox<T, M> {
    target: RefCell<T>,
    pending: RefCell<VecDeque<M>>,
}

impl<T, M> Mailbox<T, M> {
    pub(crate) fn new(target: T) -> Self {
        Self {
            target: RefCell::new(target),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Queues `message` and delivers everything pending, unless a delivery
    /// is already in progress further up the stack.
    pub(crate) fn post(&self, message: M, handle: impl FnMut(&mut T, M)) {
        self.pending.borrow_mut().push_back(message);
        self.drain(handle);
    }

    /// Delivers pending messages until the queue is empty.
    pub(crate) fn drain(&self, mut handle: impl FnMut(&mut T, M)) {
        let Ok(mut target) = self.target.try_borrow_mut() else {
            return;
        };
        loop {
            // The queue borrow must end before the handler can post again.
            let next = self.pending.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            handle(&mut target, message);
        }
    }

    /// Runs `f` against the target directly. Returns `None` while a
    /// delivery is in progress.
    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let mut target = self.target.try_borrow_mut().ok()?;
        Some(f(&mut target))
    }

    pub(crate) fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}
