//! FAQ chat session: one per widget, no memory across turns.
//!
//! Message storage and delayed execution are injected so the same session
//! logic drives Dioxus signals in the UI and plain vectors in tests.

use crate::knowledge::find_answer;
use crate::types::{ChatMessage, Sender};
use std::time::Duration;

/// Append-only sink for rendered bubbles.
pub trait MessageLog {
    fn append(&mut self, message: ChatMessage);
}

/// "Wait, then run" capability. Scheduled tasks are never cancelled.
pub trait Scheduler {
    fn run_after(&self, delay: Duration, task: Box<dyn FnOnce()>);
}

pub struct ChatSession<L, S> {
    log: L,
    scheduler: S,
    reply_delay: Duration,
    prompt_delay: Duration,
}

impl<L, S> ChatSession<L, S>
where
    L: MessageLog + Clone + 'static,
    S: Scheduler,
{
    pub fn new(log: L, scheduler: S, reply_delay: Duration, prompt_delay: Duration) -> Self {
        Self {
            log,
            scheduler,
            reply_delay,
            prompt_delay,
        }
    }

    pub fn add_message(&mut self, text: impl Into<String>, sender: Sender) {
        self.log.append(ChatMessage::new(text, sender));
    }

    pub fn greet(&mut self, greeting: &str) {
        self.add_message(greeting, Sender::Bot);
    }

    /// Handle a typed question. Blank input is ignored and left untouched;
    /// otherwise the input is cleared and `true` is returned.
    pub fn submit(&mut self, input: &mut String) -> bool {
        let question = input.trim().to_string();
        if question.is_empty() {
            return false;
        }
        self.add_message(question.as_str(), Sender::User);
        input.clear();
        self.reply_later(&question, self.reply_delay);
        true
    }

    /// Handle a quick-prompt button carrying its own question text.
    pub fn ask_prompt(&mut self, prompt: &str) -> bool {
        if prompt.is_empty() {
            return false;
        }
        self.add_message(prompt, Sender::User);
        self.reply_later(prompt, self.prompt_delay);
        true
    }

    fn reply_later(&self, question: &str, delay: Duration) {
        let reply = find_answer(question);
        let mut log = self.log.clone();
        tracing::debug!(?delay, "bot reply scheduled");
        self.scheduler.run_after(
            delay,
            Box::new(move || log.append(ChatMessage::new(reply, Sender::Bot))),
        );
    }
}

// ============================================
// Dioxus bindings
// ============================================

impl MessageLog for dioxus_signals::Signal<Vec<ChatMessage>> {
    fn append(&mut self, message: ChatMessage) {
        use dioxus_signals::Writable;
        match self.try_write() {
            Ok(mut messages) => messages.push(message),
            Err(err) => tracing::debug!("chat log gone, dropping message: {err}"),
        }
    }
}

/// Spawns the task on the Dioxus runtime, scoped to the calling component.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpawnScheduler;

impl Scheduler for SpawnScheduler {
    fn run_after(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        dioxus::prelude::spawn(async move {
            sleep(delay).await;
            task();
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

// No tokio timer in the browser; wait on a JS timeout instead.
#[cfg(target_arch = "wasm32")]
async fn sleep(delay: Duration) {
    let mut timer = dioxus::prelude::document::eval(&format!(
        "setTimeout(() => dioxus.send(true), {});",
        delay.as_millis()
    ));
    if let Err(err) = timer.recv::<bool>().await {
        tracing::debug!("reply timer failed, answering now: {err:?}");
    }
}
