//! Chat logs and schedulers shared by the integration tests

use portfolio::chat::{MessageLog, Scheduler};
use portfolio::types::{ChatMessage, Sender};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

/// Shared vector log; clones append to the same messages.
#[derive(Clone, Debug, Default)]
pub struct SharedLog {
    messages: Rc<RefCell<Vec<ChatMessage>>>,
}

impl SharedLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }

    pub fn senders(&self) -> Vec<Sender> {
        self.messages.borrow().iter().map(|m| m.sender).collect()
    }
}

impl MessageLog for SharedLog {
    fn append(&mut self, message: ChatMessage) {
        self.messages.borrow_mut().push(message);
    }
}

/// Runs every task on the spot, ignoring the delay.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImmediateScheduler;

impl Scheduler for ImmediateScheduler {
    fn run_after(&self, _delay: Duration, task: Box<dyn FnOnce()>) {
        task();
    }
}

/// Queues tasks until `run_pending` is called.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<VecDeque<(Duration, Box<dyn FnOnce()>)>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Run queued tasks in scheduling order; returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            // release the queue before running, tasks may schedule more
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some((_, task)) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn run_after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back((delay, task));
    }
}
