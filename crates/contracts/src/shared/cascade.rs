//! Зависимый выпадающий список (организация → клиенты, процесс → активности).
//!
//! Selecting a parent clears the dependent selection and its options and
//! returns the generation the next options fetch must carry. Options that
//! arrive for a superseded parent are dropped.

use super::list::RequestGeneration;

#[derive(Debug, Clone, PartialEq)]
pub struct DependentSelect<T> {
    parent: Option<String>,
    options: Vec<T>,
    selected: Option<String>,
    loading: bool,
    error: Option<String>,
    generation: RequestGeneration,
}

impl<T> Default for DependentSelect<T> {
    fn default() -> Self {
        Self {
            parent: None,
            options: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            generation: RequestGeneration::default(),
        }
    }
}

impl<T> DependentSelect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated state for the edit form: parent and child already known.
    pub fn preset(parent: &str, selected: &str) -> Self {
        Self {
            parent: Some(parent.to_string()),
            selected: Some(selected.to_string()).filter(|s| !s.is_empty()),
            ..Self::default()
        }
    }

    /// Changes the parent. Returns `(generation, parent_id)` to fetch options
    /// for, or `None` when the parent was cleared or did not change.
    pub fn select_parent(&mut self, parent: &str) -> Option<(u64, String)> {
        let parent = Some(parent.trim().to_string()).filter(|p| !p.is_empty());
        if parent == self.parent {
            return None;
        }
        self.parent = parent.clone();
        self.options.clear();
        self.selected = None;
        self.error = None;
        let generation = self.generation.next();
        match parent {
            Some(parent) => {
                self.loading = true;
                Some((generation, parent))
            }
            None => {
                self.loading = false;
                None
            }
        }
    }

    /// Fetch for the current parent (edit form opened with a preset parent).
    pub fn reload(&mut self) -> Option<(u64, String)> {
        let parent = self.parent.clone()?;
        self.loading = true;
        self.error = None;
        Some((self.generation.next(), parent))
    }

    /// Stores options if `generation` is still current; returns whether they
    /// were accepted. A preset selection missing from the options is dropped.
    pub fn receive(&mut self, generation: u64, options: Vec<T>, id_of: impl Fn(&T) -> &str) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }
        if let Some(selected) = &self.selected {
            if !options.iter().any(|option| id_of(option) == selected) {
                self.selected = None;
            }
        }
        self.options = options;
        self.loading = false;
        true
    }

    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if !self.generation.is_current(generation) {
            return false;
        }
        self.loading = false;
        self.error = Some(message.into());
        true
    }

    pub fn select(&mut self, id: &str) {
        self.selected = Some(id.to_string()).filter(|s| !s.is_empty());
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The child select stays disabled until a parent is chosen.
    pub fn is_enabled(&self) -> bool {
        self.parent.is_some() && !self.loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(option: &(String, String)) -> &str {
        &option.0
    }

    fn option(id: &str) -> (String, String) {
        (id.to_string(), format!("name-{}", id))
    }

    #[test]
    fn test_parent_change_clears_dependent_selection() {
        let mut select = DependentSelect::new();
        let (generation, parent) = select.select_parent("org-1").unwrap();
        assert_eq!(parent, "org-1");
        assert!(select.receive(generation, vec![option("c1"), option("c2")], id));
        select.select("c1");
        assert_eq!(select.selected(), Some("c1"));

        assert!(select.select_parent("org-2").is_some());
        assert_eq!(select.selected(), None);
        assert!(select.options().is_empty());
        assert!(!select.is_enabled());
    }

    #[test]
    fn test_late_options_for_old_parent_are_dropped() {
        let mut select = DependentSelect::new();
        let (first, _) = select.select_parent("org-1").unwrap();
        let (second, _) = select.select_parent("org-2").unwrap();
        assert!(!select.receive(first, vec![option("stale")], id));
        assert!(select.options().is_empty());
        assert!(select.receive(second, vec![option("fresh")], id));
        assert_eq!(select.options()[0].0, "fresh");
        assert!(!select.fail(first, "too late"));
        assert_eq!(select.error(), None);
    }

    #[test]
    fn test_same_or_empty_parent_issues_no_fetch() {
        let mut select: DependentSelect<(String, String)> = DependentSelect::new();
        assert!(select.select_parent("").is_none());
        assert!(select.select_parent("org-1").is_some());
        assert!(select.select_parent("org-1").is_none());
        assert!(select.select_parent("  ").is_none());
        assert_eq!(select.parent(), None);
    }

    #[test]
    fn test_preset_keeps_selection_present_in_options() {
        let mut select = DependentSelect::preset("p1", "a2");
        let (generation, parent) = select.reload().unwrap();
        assert_eq!(parent, "p1");
        select.receive(generation, vec![option("a1"), option("a2")], id);
        assert_eq!(select.selected(), Some("a2"));

        let mut select = DependentSelect::preset("p1", "gone");
        let (generation, _) = select.reload().unwrap();
        select.receive(generation, vec![option("a1")], id);
        assert_eq!(select.selected(), None);
    }
}
