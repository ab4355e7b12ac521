use crate::ui::SiteTheme;
use crate::views::WidgetVisibility;
use dioxus::prelude::*;

fn toggle_theme(mut theme: Signal<SiteTheme>) {
    theme.with_mut(|controller| {
        if let Err(err) = controller.toggle() {
            tracing::warn!("theme preference not saved: {err}");
        }
    });
}

#[component]
pub fn SiteHeader(theme: Signal<SiteTheme>) -> Element {
    let widget = use_context::<WidgetVisibility>();
    let is_dark = theme.read().is_dark();

    rsx! {
        header { class: "site-header",
            div { class: "header-content",
                a { class: "wordmark", href: "#top", "Sani Mohajer" }
                nav { class: "site-nav",
                    a { href: "#about", "About" }
                    a { href: "#projects", "Projects" }
                    a { href: "#consulting", "Consulting" }
                    a { href: "#contact", "Contact" }
                }
                div { class: "header-actions",
                    button {
                        class: "btn btn-ghost",
                        r#type: "button",
                        "data-chat-toggle": "true",
                        onclick: move |_| widget.toggle(),
                        "Ask my agent"
                    }
                    button {
                        class: format_args!("theme-toggle {}", if is_dark { "active" } else { "" }),
                        r#type: "button",
                        "data-theme-toggle": "true",
                        aria_pressed: is_dark.to_string(),
                        onclick: move |_| toggle_theme(theme),
                        if is_dark { "Light mode" } else { "Dark mode" }
                    }
                }
            }
        }
    }
}
