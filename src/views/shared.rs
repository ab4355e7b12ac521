use crate::reveal::RevealState;
use crate::ui::PageScroll;
use dioxus::prelude::*;
use std::rc::Rc;

/// Section that fades in once its top edge scrolls near the viewport bottom.
#[component]
pub fn Reveal(id: &'static str, #[props(default)] class: &'static str, children: Element) -> Element {
    let scroll = use_context::<PageScroll>();
    let mut state = use_signal(RevealState::default);
    let mut node = use_signal(|| Option::<Rc<MountedData>>::None);

    use_effect(move || {
        let _tick = *scroll.tick.read();
        let viewport = *scroll.viewport_height.read();
        let Some(data) = node() else {
            return;
        };
        if state.peek().is_visible() || viewport <= 0.0 {
            return;
        }
        spawn(async move {
            if let Ok(rect) = data.get_client_rect().await {
                if state.with_mut(|s| s.observe(rect.origin.y, viewport)) {
                    tracing::debug!(section = id, "section revealed");
                }
            }
        });
    });

    rsx! {
        section {
            id: "{id}",
            class: "{state().class()} {class}",
            "data-reveal": "true",
            onmounted: move |ev| node.set(Some(ev.data())),
            {children}
        }
    }
}

/// Copy text to the clipboard: arboard on native, the Clipboard API in the browser.
pub fn copy_to_clipboard(text: String) {
    #[cfg(all(any(feature = "desktop", feature = "mobile"), not(target_arch = "wasm32")))]
    {
        spawn(async move {
            if let Ok(mut cb) = arboard::Clipboard::new() {
                let _ = cb.set_text(text);
            }
        });
    }
    #[cfg(not(all(any(feature = "desktop", feature = "mobile"), not(target_arch = "wasm32"))))]
    {
        let Ok(payload) = serde_json::to_string(&text) else {
            return;
        };
        let _ = document::eval(&format!(
            "if (navigator.clipboard) {{ navigator.clipboard.writeText({payload}); }}"
        ));
    }
}
