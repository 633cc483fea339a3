//! Mobile nav menu (hamburger) state.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Nav-link click or a click outside the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Page scrolling is locked while the menu is open.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locks_scroll_and_close_releases() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        assert!(menu.body_scroll_locked());

        menu.close();
        assert!(!menu.body_scroll_locked());
        menu.close();
        assert!(!menu.is_open());
    }
}
