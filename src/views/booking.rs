use crate::booking::BookingRequest;
use crate::config::site_config;
use dioxus::prelude::*;

const TOPICS: &[&str] = &[
    "Consulting",
    "AI agents & automation",
    "Full-stack development",
    "Hackathon partnership",
];

/// Hand the compose link to the platform's mail handler.
fn open_mail_client(uri: &str) {
    let Ok(target) = serde_json::to_string(uri) else {
        return;
    };
    tracing::info!("opening mail client for booking request");
    let _ = document::eval(&format!("window.location.href = {target};"));
}

#[component]
pub fn BookingForm() -> Element {
    let on_submit = move |ev: FormEvent| {
        ev.prevent_default();
        let request = BookingRequest::from_fields(
            ev.values()
                .into_iter()
                .map(|(name, value)| (name, value.as_value())),
        );
        open_mail_client(&request.mailto_uri(&site_config().booking_email));
    };

    rsx! {
        form { id: "booking-form", class: "booking-form", onsubmit: on_submit,
            label { class: "field",
                span { "Name" }
                input { name: "name", r#type: "text", autocomplete: "name" }
            }
            label { class: "field",
                span { "Email" }
                input { name: "email", r#type: "email", autocomplete: "email" }
            }
            label { class: "field",
                span { "Topic" }
                select { name: "topic",
                    for topic in TOPICS.iter() {
                        option { value: *topic, "{topic}" }
                    }
                }
            }
            label { class: "field",
                span { "Preferred time" }
                input { name: "time", r#type: "text", placeholder: "e.g. Friday 10am" }
            }
            button { class: "btn btn-primary", r#type: "submit", "Request a session" }
        }
    }
}
