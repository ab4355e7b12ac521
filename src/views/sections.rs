use crate::config::site_config;
use crate::knowledge::PRIMARY_GREETING;
use crate::views::shared::copy_to_clipboard;
use crate::views::{BookingForm, ChatPanel, ChatVariant, Reveal, WidgetVisibility};
use dioxus::prelude::*;
use time::OffsetDateTime;

const QUICK_PROMPTS: &[&str] = &[
    "What do you do with AI agents?",
    "Tell me about the restaurant project",
    "How many hackathons have you organized?",
    "How can I book a session?",
];

struct Project {
    title: &'static str,
    summary: &'static str,
    stack: &'static [&'static str],
}

const PROJECTS: &[Project] = &[
    Project {
        title: "Saaren Pizza & Kebab",
        summary: "Restaurant platform with online ordering, real-time order tracking, reservations, email verification and a bilingual interface.",
        stack: &["React 19", "TypeScript", "Tailwind CSS"],
    },
    Project {
        title: "Central Finland tourism platform",
        summary: "Storytelling, local business discovery and smart itinerary planning for visitors to Central Finland. In progress.",
        stack: &["Full-stack", "AI itineraries"],
    },
    Project {
        title: "Hackathons",
        summary: "Three hackathons and two AI hackathons connecting students and local companies through innovation challenges.",
        stack: &["Events", "Community"],
    },
];

#[component]
pub fn AboutSection() -> Element {
    let widget = use_context::<WidgetVisibility>();
    rsx! {
        Reveal { id: "about", class: "hero",
            p { class: "eyebrow", "Project Specialist · Full-Stack Developer · Central Finland" }
            h1 { class: "hero-title", "I connect talent, tech, and business." }
            p { class: "hero-subtitle",
                "I build agentic workflows and LLM-powered tools that save people time, "
                "and I organise hackathons that bring students and companies together. "
                "Currently at Kehittämisyhtiö Witas Oy and studying MSc Full-Stack Software Development at JAMK."
            }
            div { class: "hero-cta-group",
                a { class: "btn btn-primary", href: "#consulting", "Book a session" }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    "data-chat-toggle": "true",
                    onclick: move |_| widget.toggle(),
                    "Chat with my resume agent"
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        Reveal { id: "projects", class: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "project-grid",
                for project in PROJECTS.iter() {
                    article { class: "project-card",
                        h3 { "{project.title}" }
                        p { "{project.summary}" }
                        div { class: "tag-row",
                            for tech in project.stack.iter() {
                                span { class: "tag-pill", "{tech}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ConsultingSection() -> Element {
    rsx! {
        Reveal { id: "consulting", class: "consulting",
            h2 { class: "section-title", "Consulting" }
            p { class: "text-muted",
                "Tell me what you are working on and when suits you. "
                "I reply with available time slots within 24 hours."
            }
            BookingForm {}
        }
    }
}

#[component]
pub fn ChatSection() -> Element {
    rsx! {
        Reveal { id: "agent", class: "agent",
            h2 { class: "section-title", "Resume agent" }
            p { class: "text-muted", "Ask about my AI work, hackathons, projects, or how to book a session." }
            ChatPanel {
                variant: ChatVariant::Primary,
                log_id: "chat-log",
                greeting: PRIMARY_GREETING,
                prompts: QUICK_PROMPTS.to_vec(),
            }
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let email = site_config().booking_email.clone();
    let copy_payload = email.clone();
    rsx! {
        Reveal { id: "contact", class: "contact",
            h2 { class: "section-title", "Contact" }
            p { class: "text-muted", "Email is the fastest way to reach me." }
            div { class: "contact-row",
                a { class: "contact-link", href: "mailto:{email}", "{email}" }
                button {
                    class: "action-btn",
                    r#type: "button",
                    title: "Copy email address",
                    onclick: move |_| copy_to_clipboard(copy_payload.clone()),
                    "Copy"
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let year = OffsetDateTime::now_utc().year();
    rsx! {
        footer { class: "site-footer",
            p { "© {year} Ehsan (Sani) Mohajer" }
        }
    }
}
