//! Stack of titles naming the menu level currently on screen

use crate::config::ActiveMatch;

/// Titles from the root level down to the current one. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivePath {
    titles: Vec<String>,
}

impl ActivePath {
    pub fn new(root_title: impl Into<String>) -> Self {
        Self {
            titles: vec![root_title.into()],
        }
    }

    /// Enter a child level
    pub fn push(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    /// Leave the current level. The root entry is never removed.
    pub fn pop(&mut self) -> Option<String> {
        if self.titles.len() > 1 {
            self.titles.pop()
        } else {
            None
        }
    }

    /// Title of the level on screen
    pub fn current(&self) -> &str {
        self.titles.last().map(String::as_str).unwrap_or_default()
    }

    /// Depth of the current level (0 at the root)
    pub fn depth(&self) -> usize {
        self.titles.len() - 1
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.titles.len() == 1
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Whether the level at `depth` titled `title` is the one on screen
    pub fn is_current(&self, depth: usize, title: &str) -> bool {
        self.depth() == depth && self.current() == title
    }

    /// Whether the level at `depth` titled `title` is the current level or
    /// one of its ancestors
    pub fn is_on_path(&self, depth: usize, title: &str) -> bool {
        self.titles.get(depth).is_some_and(|t| t == title)
    }

    pub fn is_active(&self, depth: usize, title: &str, rule: ActiveMatch) -> bool {
        match rule {
            ActiveMatch::Contains => self.contains(title),
            ActiveMatch::TopOfStack => self.is_current(depth, title),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.titles
    }

    /// Text for the toggle button
    pub fn trigger_label<'a>(&'a self, home_label: &'a str) -> &'a str {
        if self.is_at_root() {
            home_label
        } else {
            self.current()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_round_trip() {
        let mut path = ActivePath::new("Home");
        path.push("Guides");
        path.push("Auth");
        assert_eq!(path.as_slice(), ["Home", "Guides", "Auth"]);
        assert_eq!(path.depth(), 2);

        assert_eq!(path.pop().as_deref(), Some("Auth"));
        assert_eq!(path.current(), "Guides");
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut path = ActivePath::new("Home");
        assert_eq!(path.pop(), None);
        assert_eq!(path.pop(), None);
        assert_eq!(path.len(), 1);
        assert_eq!(path.current(), "Home");
    }

    #[test]
    fn test_active_rules() {
        let mut path = ActivePath::new("Home");
        path.push("Guides");

        assert!(path.is_active(0, "Home", ActiveMatch::Contains));
        assert!(!path.is_active(0, "Home", ActiveMatch::TopOfStack));
        assert!(path.is_active(1, "Guides", ActiveMatch::TopOfStack));
        // a same-titled level elsewhere in the tree
        assert!(path.is_active(2, "Guides", ActiveMatch::Contains));
        assert!(!path.is_active(2, "Guides", ActiveMatch::TopOfStack));
    }

    #[test]
    fn test_on_path_checks_position() {
        let mut path = ActivePath::new("Home");
        path.push("Guides");
        path.push("Auth");

        assert!(path.is_on_path(1, "Guides"));
        assert!(path.is_on_path(2, "Auth"));
        assert!(!path.is_on_path(2, "Guides"));
        assert!(!path.is_on_path(3, "Auth"));
    }

    #[test]
    fn test_trigger_label() {
        let mut path = ActivePath::new("Home");
        assert_eq!(path.trigger_label("Documentation menu"), "Documentation menu");
        path.push("Guides");
        assert_eq!(path.trigger_label("Documentation menu"), "Guides");
    }
}
