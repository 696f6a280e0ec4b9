/// Open state of the overlay menu and its dropdown anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    dropdowns: Vec<bool>,
}

impl MenuState {
    pub fn new(dropdown_count: usize) -> Self {
        Self {
            open: false,
            dropdowns: vec![false; dropdown_count],
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Dropdown anchor click. Wide viewports keep exactly the clicked
    /// dropdown active; narrow ones toggle it independently of the others.
    pub fn click_dropdown(&mut self, index: usize, viewport_width: u32, desktop_min_width: u32) {
        if index >= self.dropdowns.len() {
            return;
        }
        if viewport_width >= desktop_min_width {
            for (i, active) in self.dropdowns.iter_mut().enumerate() {
                *active = i == index;
            }
        } else {
            self.dropdowns[index] = !self.dropdowns[index];
        }
    }

    pub fn is_dropdown_active(&self, index: usize) -> bool {
        self.dropdowns.get(index).copied().unwrap_or(false)
    }
}

/// Exponential ease-out registered as the menu timeline's `"custom"` ease.
pub fn custom_ease(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_keeps_one_dropdown() {
        let mut menu = MenuState::new(3);
        menu.click_dropdown(0, 1280, 768);
        menu.click_dropdown(2, 1280, 768);
        assert!(!menu.is_dropdown_active(0));
        assert!(menu.is_dropdown_active(2));
        // Clicking the active one again keeps it active.
        menu.click_dropdown(2, 1280, 768);
        assert!(menu.is_dropdown_active(2));
    }

    #[test]
    fn test_mobile_toggles_independently() {
        let mut menu = MenuState::new(3);
        menu.click_dropdown(0, 375, 768);
        menu.click_dropdown(1, 375, 768);
        assert!(menu.is_dropdown_active(0));
        assert!(menu.is_dropdown_active(1));
        menu.click_dropdown(0, 375, 768);
        assert!(!menu.is_dropdown_active(0));
    }

    #[test]
    fn test_open_close_and_out_of_range() {
        let mut menu = MenuState::new(1);
        menu.open();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.click_dropdown(5, 1280, 768);
        assert!(!menu.is_dropdown_active(5));
    }

    #[test]
    fn test_custom_ease_endpoints() {
        assert_eq!(custom_ease(0.0), 0.0);
        assert_eq!(custom_ease(1.0), 1.0);
        assert!((custom_ease(0.5) - (1.0 - 2f64.powf(-5.0))).abs() < 1e-12);
    }
}
