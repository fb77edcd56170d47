//! Navigation menu state
//!
//! The mobile navigation is either expanded or collapsed. Server-rendered pages
//! carry the state in the `menu` query parameter, so the toggle control is a
//! plain link to the page with the opposite state.

/// Whether the navigation menu is expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn open() -> Self {
        Self { open: true }
    }

    pub fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip between expanded and collapsed
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    /// Read the state from a raw query string such as `menu=open&x=1`
    pub fn from_query(query: Option<&str>) -> Self {
        let open = query
            .map(|q| {
                q.split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .any(|(key, value)| key == "menu" && value == "open")
            })
            .unwrap_or(false);
        Self { open }
    }

    /// Query string that reproduces this state
    pub fn as_query(self) -> &'static str {
        if self.open {
            "?menu=open"
        } else {
            "?menu=closed"
        }
    }

    pub fn menu_class(self) -> &'static str {
        if self.open {
            "nav-menu active"
        } else {
            "nav-menu"
        }
    }

    pub fn toggle_class(self) -> &'static str {
        if self.open {
            "nav-toggle active"
        } else {
            "nav-toggle"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        assert!(!MenuState::default().is_open());
        assert_eq!(MenuState::default(), MenuState::closed());
    }

    #[test]
    fn test_toggle_twice_round_trips() {
        for state in [MenuState::open(), MenuState::closed()] {
            assert_eq!(state.toggle().toggle(), state);
            assert_ne!(state.toggle(), state);
        }
    }

    #[test]
    fn test_classes_follow_state() {
        assert_eq!(MenuState::closed().menu_class(), "nav-menu");
        assert_eq!(MenuState::open().menu_class(), "nav-menu active");
        assert_eq!(MenuState::open().toggle_class(), "nav-toggle active");
    }

    #[test]
    fn test_from_query() {
        assert!(MenuState::from_query(Some("menu=open")).is_open());
        assert!(MenuState::from_query(Some("a=1&menu=open")).is_open());
        assert!(!MenuState::from_query(Some("menu=closed")).is_open());
        assert!(!MenuState::from_query(Some("menu=OPEN")).is_open());
        assert!(!MenuState::from_query(Some("menu")).is_open());
        assert!(!MenuState::from_query(None).is_open());
    }

    #[test]
    fn test_query_matches_state() {
        let open = MenuState::open();
        assert_eq!(MenuState::from_query(Some(&open.as_query()[1..])), open);
        let closed = MenuState::closed();
        assert_eq!(MenuState::from_query(Some(&closed.as_query()[1..])), closed);
    }
}
