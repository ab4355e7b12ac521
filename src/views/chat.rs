use crate::chat::{ChatSession, SpawnScheduler};
use crate::config::site_config;
use crate::knowledge::WIDGET_GREETING;
use crate::types::ChatMessage;
use dioxus::prelude::*;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatVariant {
    /// The chat section's panel: `chat-form` / `chat-input` / `chat-log` ids.
    Primary,
    /// A panel inside a `data-chat` container, located by data attributes.
    Embedded,
}

impl ChatVariant {
    fn id(self, id: &'static str) -> Option<&'static str> {
        match self {
            ChatVariant::Primary => Some(id),
            ChatVariant::Embedded => None,
        }
    }

    fn marker(self) -> Option<&'static str> {
        match self {
            ChatVariant::Primary => None,
            ChatVariant::Embedded => Some("true"),
        }
    }
}

/// Open/closed state of the floating chat widget, shared by every toggle.
#[derive(Clone, Copy)]
pub struct WidgetVisibility {
    open: Signal<bool>,
}

impl WidgetVisibility {
    pub fn closed() -> Self {
        Self {
            open: Signal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        (self.open)()
    }

    pub fn toggle(mut self) {
        let next = !*self.open.peek();
        self.open.set(next);
    }
}

fn chat_session(
    messages: Signal<Vec<ChatMessage>>,
) -> ChatSession<Signal<Vec<ChatMessage>>, SpawnScheduler> {
    let config = site_config();
    ChatSession::new(
        messages,
        SpawnScheduler,
        config.reply_delay,
        config.prompt_delay,
    )
}

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn scroll_to_bottom_script(log_id: &str) -> Option<String> {
    let id = serde_json::to_string(log_id).ok()?;
    Some(format!(
        "const log = document.getElementById({id}); if (log) {{ log.scrollTop = log.scrollHeight; }}"
    ))
}

fn scroll_log_to_bottom(log_id: &str) {
    if let Some(script) = scroll_to_bottom_script(log_id) {
        let _ = document::eval(&script);
    }
}

fn widget_class(open: bool) -> &'static str {
    if open { "chat-widget open" } else { "chat-widget" }
}

#[component]
pub fn ChatPanel(
    variant: ChatVariant,
    log_id: &'static str,
    greeting: &'static str,
    #[props(default)] prompts: Vec<&'static str>,
) -> Element {
    let messages = use_signal(Vec::<ChatMessage>::new);
    let mut draft = use_signal(String::new);

    use_effect(move || chat_session(messages).greet(greeting));

    use_effect(move || {
        let count = messages.read().len();
        if count > 0 {
            scroll_log_to_bottom(log_id);
        }
    });

    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let mut text = draft();
        if chat_session(messages).submit(&mut text) {
            draft.set(text);
        }
    };

    let snapshot = messages();

    rsx! {
        div { class: "chat-panel",
            div {
                id: log_id,
                class: "chat-log",
                "data-chat-log": variant.marker(),
                role: "log",
                aria_live: "polite",
                for msg in snapshot.iter() {
                    div { class: "chat-row {msg.sender.as_class()}",
                        div { class: "chat-bubble {msg.sender.as_class()}", "{msg.text}" }
                        if let Some(ts) = format_message_timestamp(msg.created_at) {
                            span { class: "chat-timestamp", "{ts}" }
                        }
                    }
                }
            }
            if !prompts.is_empty() {
                div { class: "chat-prompts",
                    for prompt in prompts.iter().copied() {
                        button {
                            class: "prompt-chip",
                            r#type: "button",
                            "data-prompt": prompt,
                            onclick: move |_| {
                                chat_session(messages).ask_prompt(prompt);
                            },
                            "{prompt}"
                        }
                    }
                }
            }
            form {
                id: variant.id("chat-form"),
                class: "chat-form",
                "data-chat-form": variant.marker(),
                onsubmit: on_submit,
                input {
                    id: variant.id("chat-input"),
                    "data-chat-input": variant.marker(),
                    r#type: "text",
                    autocomplete: "off",
                    placeholder: "Ask about AI work, projects, or booking…",
                    value: "{draft}",
                    oninput: move |ev| draft.set(ev.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Send" }
            }
        }
    }
}

#[component]
pub fn ChatWidget() -> Element {
    let visibility = use_context::<WidgetVisibility>();
    let class = widget_class(visibility.is_open());

    rsx! {
        aside { class: "{class}", "data-chat": "true", aria_label: "Resume agent",
            div { class: "chat-widget-header",
                span { class: "chat-widget-title", "Resume agent" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    "data-chat-toggle": "true",
                    aria_label: "Close chat",
                    onclick: move |_| visibility.toggle(),
                    "×"
                }
            }
            ChatPanel {
                variant: ChatVariant::Embedded,
                log_id: "widget-chat-log",
                greeting: WIDGET_GREETING,
            }
        }
    }
}
