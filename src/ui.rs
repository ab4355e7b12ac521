use crate::config::site_config;
use crate::storage::PlatformStore;
use crate::theme::{ThemeController, system_prefers_dark, theme_definition};
use crate::views::{
    AboutSection, ChatSection, ChatWidget, ConsultingSection, ContactSection, ProjectsSection,
    SiteFooter, SiteHeader, WidgetVisibility,
};
use dioxus::prelude::*;
use std::rc::Rc;

const MAIN_CSS: Asset = asset!("/assets/main.css");

pub type SiteTheme = ThemeController<PlatformStore>;

/// Scroll position ticks and viewport height shared with every `Reveal`.
#[derive(Clone, Copy)]
pub struct PageScroll {
    pub tick: Signal<u64>,
    pub viewport_height: Signal<f64>,
}

fn load_theme() -> SiteTheme {
    let mut controller = ThemeController::new(PlatformStore::open(), &site_config().theme_key);
    if let Err(err) = controller.load(system_prefers_dark()) {
        tracing::warn!("theme preference unavailable: {err}");
    }
    controller
}

#[component]
pub fn App() -> Element {
    let theme = use_signal(load_theme);
    let scroll = use_context_provider(|| PageScroll {
        tick: Signal::new(0),
        viewport_height: Signal::new(0.0),
    });
    use_context_provider(WidgetVisibility::closed);
    let mut page = use_signal(|| Option::<Rc<MountedData>>::None);

    let definition = theme_definition(theme.read().mode());

    rsx! {
        ThemeStyles { css: definition.css }
        div {
            id: "top",
            class: "{definition.root_class}",
            onmounted: move |ev| {
                let data = ev.data();
                page.set(Some(data.clone()));
                measure_viewport(data, scroll);
            },
            onscroll: move |_| {
                if let Some(data) = page() {
                    measure_viewport(data, scroll);
                }
            },
            SiteHeader { theme }
            main { class: "content",
                AboutSection {}
                ProjectsSection {}
                ConsultingSection {}
                ChatSection {}
                ContactSection {}
            }
            SiteFooter {}
            ChatWidget {}
        }
    }
}

/// Re-measure the scroll container and bump the tick so reveals re-check.
fn measure_viewport(data: Rc<MountedData>, scroll: PageScroll) {
    let PageScroll {
        mut tick,
        mut viewport_height,
    } = scroll;
    spawn(async move {
        match data.get_client_rect().await {
            Ok(rect) => {
                viewport_height.set(rect.size.height);
                tick += 1;
            }
            Err(err) => tracing::debug!("viewport measurement failed: {err:?}"),
        }
    });
}

#[component]
fn ThemeStyles(css: &'static str) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        style { dangerous_inner_html: "{css}" }
    }
}
