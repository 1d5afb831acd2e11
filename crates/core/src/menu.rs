//! Menu selection state with wrap-around navigation.

pub const MAIN_MENU: [&str; 3] = ["Start Game", "Controls", "Quit"];
pub const PAUSE_MENU: [&str; 3] = ["Resume", "Main Menu", "Quit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    options: &'static [&'static str],
    selected: usize,
}

impl Menu {
    pub const fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    pub fn main() -> Self {
        Self::new(&MAIN_MENU)
    }

    pub fn pause() -> Self {
        Self::new(&PAUSE_MENU)
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn up(&mut self) {
        let n = self.options.len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    pub fn down(&mut self) {
        let n = self.options.len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    /// Select by index (mouse hover). Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_both_ways() {
        let mut m = Menu::main();
        m.up();
        assert_eq!(m.selected(), 2);
        m.down();
        assert_eq!(m.selected(), 0);
        m.down();
        m.down();
        m.down();
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut m = Menu::pause();
        assert!(m.select(1));
        assert!(!m.select(3));
        assert_eq!(m.selected(), 1);
        m.reset();
        assert_eq!(m.selected(), 0);
    }

    #[test]
    fn empty_menu_is_inert() {
        let mut m = Menu::new(&[]);
        m.up();
        m.down();
        assert_eq!(m.selected(), 0);
    }
}
