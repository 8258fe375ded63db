//! Scroll-spy navigation state.
//!
//! The page registers the bounds of each section as it mounts; the nav bar
//! feeds every (throttled) scroll position through [`ScrollSpy::on_scroll`]
//! and highlights whatever [`ScrollSpy::active`] reports.

/// Section anchors in document order.
pub const SECTIONS: [&str; 5] = ["home", "projects", "tech", "about", "contact"];

/// Added to `scrollY` before matching against section bounds.
pub const SCROLL_OFFSET: f64 = 100.0;

/// Height of the fixed nav bar, subtracted from smooth-scroll targets.
pub const NAV_BAR_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// id -> bounds, kept in the order sections were first registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a section or updates the bounds of an existing one in place.
    pub fn register(&mut self, id: &str, top: f64, height: f64) {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.top = top;
                section.height = height;
            }
            None => self.sections.push(Section {
                id: id.to_string(),
                top,
                height,
            }),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// First section in document order containing `position`.
    pub fn section_at(&self, position: f64) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains(position))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    registry: SectionRegistry,
    active: String,
    mobile_menu_open: bool,
}

impl ScrollSpy {
    /// `ids` is the nav order; the first one starts out active.
    pub fn new(ids: &[&str]) -> Self {
        Self {
            registry: SectionRegistry::new(),
            active: ids.first().map(|id| id.to_string()).unwrap_or_default(),
            mobile_menu_open: false,
        }
    }

    pub fn register_section(&mut self, id: &str, top: f64, height: f64) {
        self.registry.register(id, top, height);
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Recomputes the active section. Returns true when it changed.
    /// A position outside every section leaves the previous value.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let position = scroll_y + SCROLL_OFFSET;
        match self.registry.section_at(position) {
            Some(section) if section.id != self.active => {
                self.active = section.id.clone();
                true
            }
            _ => false,
        }
    }

    /// Closes the mobile menu and returns the smooth-scroll target for `id`,
    /// or `None` when the section was never registered.
    pub fn scroll_to_section(&mut self, id: &str) -> Option<f64> {
        self.mobile_menu_open = false;
        self.registry
            .get(id)
            .map(|section| section.top - NAV_BAR_HEIGHT)
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page() -> ScrollSpy {
        let mut spy = ScrollSpy::new(&SECTIONS);
        spy.register_section("home", 0.0, 800.0);
        spy.register_section("projects", 800.0, 1200.0);
        spy.register_section("tech", 2000.0, 900.0);
        spy.register_section("about", 2900.0, 700.0);
        spy.register_section("contact", 3600.0, 900.0);
        spy
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(ScrollSpy::new(&SECTIONS).active(), "home");
    }

    #[test]
    fn offset_is_applied_before_matching() {
        let mut spy = page();
        assert!(!spy.on_scroll(699.0));
        assert_eq!(spy.active(), "home");
        assert!(spy.on_scroll(700.0));
        assert_eq!(spy.active(), "projects");
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut spy = page();
        spy.on_scroll(3000.0);
        assert_eq!(spy.active(), "about");
        assert!(!spy.on_scroll(10_000.0));
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn overlapping_bounds_prefer_document_order() {
        let mut spy = ScrollSpy::new(&["a", "b"]);
        spy.register_section("a", 0.0, 500.0);
        spy.register_section("b", 200.0, 500.0);
        spy.on_scroll(250.0);
        assert_eq!(spy.active(), "a");
    }

    #[test]
    fn re_registering_updates_bounds_in_place() {
        let mut spy = page();
        spy.register_section("home", 0.0, 1000.0);
        assert_eq!(spy.registry().len(), 5);
        assert_eq!(spy.registry().get("home").map(|s| s.height), Some(1000.0));
        spy.on_scroll(850.0);
        assert_eq!(spy.active(), "projects");
    }

    #[test]
    fn scroll_to_section_subtracts_nav_height_and_closes_menu() {
        let mut spy = page();
        spy.toggle_mobile_menu();
        assert!(spy.is_mobile_menu_open());
        assert_eq!(spy.scroll_to_section("tech"), Some(1920.0));
        assert!(!spy.is_mobile_menu_open());
    }

    #[test]
    fn scroll_to_unknown_section_is_a_no_op() {
        let mut spy = page();
        let before = spy.active().to_string();
        assert_eq!(spy.scroll_to_section("blog"), None);
        assert_eq!(spy.active(), before);
    }

    proptest! {
        #[test]
        fn active_section_is_the_unique_container(
            heights in proptest::collection::vec(1.0f64..2000.0, 5),
            scroll_y in 0.0f64..12_000.0,
        ) {
            let mut spy = ScrollSpy::new(&SECTIONS);
            let mut top = 0.0;
            for (id, height) in SECTIONS.iter().zip(&heights) {
                spy.register_section(id, top, *height);
                top += height;
            }
            let before = spy.active().to_string();
            spy.on_scroll(scroll_y);

            let position = scroll_y + SCROLL_OFFSET;
            let containing: Vec<_> = spy
                .registry()
                .sections
                .iter()
                .filter(|s| s.contains(position))
                .collect();
            prop_assert!(containing.len() <= 1);
            match containing.first() {
                Some(section) => prop_assert_eq!(spy.active(), section.id.as_str()),
                None => prop_assert_eq!(spy.active(), before.as_str()),
            }
        }
    }
}
