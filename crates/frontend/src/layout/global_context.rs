use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Открытые вкладки центральной области и видимость боковой панели
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active tab from `?active=` and keep the URL in sync.
    /// Without a known key in the URL the `fallback` tab is opened.
    pub fn init_router_integration(&self, fallback: &str) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        let requested = params
            .get("active")
            .filter(|key| !tab_label_for_key(key).is_empty())
            .cloned();
        match requested {
            Some(key) => self.open_tab(&key, tab_label_for_key(&key)),
            None if self.opened.with_untracked(Vec::is_empty) => {
                self.open_tab(fallback, tab_label_for_key(fallback))
            }
            None => {}
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key.as_str())]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url)) {
                    log::warn!("Failed to update URL: {:?}", e);
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("Opening tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        let next = self.opened.with_untracked(|tabs| neighbour_of(tabs, key));
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            self.active.set(next);
        }
    }

    /// Сессия закончилась: вкладки следующего пользователя начинаются с нуля
    pub fn reset(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

/// Tab that becomes active when `closed` goes away: the right neighbour,
/// otherwise the left one.
fn neighbour_of(tabs: &[Tab], closed: &str) -> Option<String> {
    let index = tabs.iter().position(|tab| tab.key == closed)?;
    tabs.get(index + 1)
        .or_else(|| index.checked_sub(1).and_then(|i| tabs.get(i)))
        .map(|tab| tab.key.clone())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|key| Tab {
                key: key.to_string(),
                title: key.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_neighbour_prefers_right_then_left() {
        let opened = tabs(&["a", "b", "c"]);
        assert_eq!(neighbour_of(&opened, "b").as_deref(), Some("c"));
        assert_eq!(neighbour_of(&opened, "c").as_deref(), Some("b"));
        assert_eq!(neighbour_of(&tabs(&["a"]), "a"), None);
        assert_eq!(neighbour_of(&opened, "zzz"), None);
    }
}
