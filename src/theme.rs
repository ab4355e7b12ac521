use crate::storage::{PreferenceStore, StorageResult};
use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub root_class: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            root_class: "page theme-dark",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            root_class: "page",
        },
    }
}

/// Owns the active theme and keeps the stored preference in step with it.
pub struct ThemeController<S> {
    store: S,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            mode: ThemeMode::Light,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Switch to `mode` and persist it. The mode changes even when the write fails.
    pub fn apply_theme(&mut self, mode: ThemeMode) -> StorageResult<()> {
        self.mode = mode;
        tracing::debug!(theme = %mode, "theme applied");
        self.store.set(&self.key, mode.as_str())
    }

    /// Initial theme: stored preference, then the system's dark preference, else light.
    pub fn load(&mut self, system_prefers_dark: bool) -> StorageResult<ThemeMode> {
        let stored = self.store.get(&self.key)?.filter(|value| !value.is_empty());
        match stored {
            Some(value) => {
                let mode = value.parse().unwrap_or_else(|err| {
                    tracing::warn!("ignoring stored theme: {err}");
                    ThemeMode::Light
                });
                self.apply_theme(mode)?;
            }
            None if system_prefers_dark => self.apply_theme(ThemeMode::Dark)?,
            None => {}
        }
        Ok(self.mode)
    }

    pub fn toggle(&mut self) -> StorageResult<ThemeMode> {
        self.apply_theme(self.mode.opposite())?;
        Ok(self.mode)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    crate::config::site_config().prefers_dark
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #fbfaf7;
    --color-bg-secondary: #f0eee8;
    --color-text-primary: #16161a;
    --color-text-muted: #55555f;
    --color-border: #d6d3cb;
    --color-accent: #2b59c3;
    --color-card-bg: #ffffff;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #16161a;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #f0eee8;
    --color-chat-bot-text: #16161a;
    --color-timestamp: #7a7a85;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0e0f13;
    --color-bg-secondary: #171920;
    --color-text-primary: #f2f2f5;
    --color-text-muted: #a3a3b0;
    --color-border: #2a2c36;
    --color-accent: #7aa2ff;
    --color-card-bg: #14161c;
    --color-input-bg: #0e0f13;
    --color-chat-user-bg: #f2f2f5;
    --color-chat-user-text: #0e0f13;
    --color-chat-bot-bg: #1e2029;
    --color-chat-bot-text: #f2f2f5;
    --color-timestamp: #8b8b98;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn starts_light_without_preference() {
        let store = MemoryStore::new();
        let mut controller = ThemeController::new(store.clone(), "theme");
        assert_eq!(controller.load(false).unwrap(), ThemeMode::Light);
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn stored_preference_beats_system_preference() {
        let store = MemoryStore::with_entry("theme", "light");
        let mut controller = ThemeController::new(store, "theme");
        assert_eq!(controller.load(true).unwrap(), ThemeMode::Light);
    }

    #[test]
    fn empty_stored_value_falls_through_to_system() {
        let store = MemoryStore::with_entry("theme", "");
        let mut controller = ThemeController::new(store.clone(), "theme");
        assert_eq!(controller.load(true).unwrap(), ThemeMode::Dark);
        assert_eq!(store.get("theme").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn unknown_stored_value_is_rewritten_as_light() {
        let store = MemoryStore::with_entry("theme", "sepia");
        let mut controller = ThemeController::new(store.clone(), "theme");
        assert_eq!(controller.load(true).unwrap(), ThemeMode::Light);
        assert_eq!(store.get("theme").unwrap(), Some("light".to_string()));
    }

    #[test]
    fn dark_definition_sets_root_class() {
        assert!(theme_definition(ThemeMode::Dark).root_class.contains("theme-dark"));
        assert!(!theme_definition(ThemeMode::Light).root_class.contains("theme-dark"));
    }
}
