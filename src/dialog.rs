// 💬 Detail dialog state machine - Closed ⇄ Open(business)
// Pure selection logic; the terminal renderer sits on top of this

use crate::catalog::{Business, Catalog};

// ============================================================================
// TABS
// ============================================================================

/// Content sections of the detail dialog
///
/// Excursions and Careers are always shown; the other three appear only
/// when the selected business carries non-empty content for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Excursions,
    Technologies,
    History,
    Testimonials,
    Careers,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Excursions => "Экскурсии",
            Tab::Technologies => "Технологии",
            Tab::History => "История",
            Tab::Testimonials => "Отзывы",
            Tab::Careers => "Карьера",
        }
    }

    /// Tabs available for this business, in display order
    pub fn available(business: &Business) -> Vec<Tab> {
        let mut tabs = vec![Tab::Excursions];
        if !business.technologies.is_empty() {
            tabs.push(Tab::Technologies);
        }
        if !business.history.is_empty() {
            tabs.push(Tab::History);
        }
        if !business.testimonials.is_empty() {
            tabs.push(Tab::Testimonials);
        }
        tabs.push(Tab::Careers);
        tabs
    }
}

// ============================================================================
// DIALOG STATE
// ============================================================================

/// Selection state plus transient view state of the open dialog
///
/// Lifecycle: starts Closed, opens on marker activation, closes on the
/// close action, advances to the next catalog entry on "next". Tab,
/// excursion cursor and photo expansion are local view state and reset
/// whenever the dialog moves to a different business.
#[derive(Debug, Default)]
pub struct DialogState {
    selected: Option<String>,
    tab: Option<Tab>,
    expanded: Option<usize>,
    cursor: usize,
}

impl DialogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Active tab (Excursions right after opening)
    pub fn tab(&self) -> Tab {
        self.tab.unwrap_or(Tab::Excursions)
    }

    /// Index of the currently expanded excursion photo, if any
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Excursion list cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Closed → Open(b), or Open(b) → Open(b')
    ///
    /// Reopening on the same business keeps the view state; a different
    /// business resets tab, cursor and expansion.
    pub fn open(&mut self, id: &str) {
        if self.selected.as_deref() != Some(id) {
            self.selected = Some(id.to_string());
            self.reset_view();
        }
    }

    /// Open(b) → Closed
    pub fn close(&mut self) {
        self.selected = None;
        self.reset_view();
    }

    /// Open(b) → Open(next in catalog order), wrapping at the end
    ///
    /// A selection missing from the catalog is a no-op (the id never
    /// drifts outside the known set).
    pub fn advance(&mut self, catalog: &Catalog) {
        let Some(current) = self.selected.as_deref() else {
            return;
        };
        if let Some(next) = catalog.next_after(current) {
            let next_id = next.id.clone();
            self.open(&next_id);
        }
    }

    fn reset_view(&mut self) {
        self.tab = None;
        self.expanded = None;
        self.cursor = 0;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = Some(tab);
    }

    /// Cycle forward through the tabs available for `business`
    pub fn next_tab(&mut self, business: &Business) {
        self.cycle_tab(business, 1);
    }

    /// Cycle backward through the tabs available for `business`
    pub fn prev_tab(&mut self, business: &Business) {
        self.cycle_tab(business, -1);
    }

    fn cycle_tab(&mut self, business: &Business, step: isize) {
        let tabs = Tab::available(business);
        let current = tabs.iter().position(|t| *t == self.tab()).unwrap_or(0);
        let len = tabs.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.tab = Some(tabs[next]);
    }

    pub fn cursor_down(&mut self, business: &Business) {
        if self.cursor + 1 < business.excursions.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Expand or collapse the photo of the excursion under the cursor
    ///
    /// Entries without a photo are not expandable; at most one entry is
    /// expanded at a time.
    pub fn toggle_expanded(&mut self, business: &Business) {
        let Some(excursion) = business.excursions.get(self.cursor) else {
            return;
        };
        if !excursion.has_image() {
            return;
        }
        self.expanded = if self.expanded == Some(self.cursor) {
            None
        } else {
            Some(self.cursor)
        };
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Business, Catalog, Category, Excursion, Technology, Testimonial};

    fn business(id: &str) -> Business {
        Business {
            id: id.to_string(),
            name: format!("Business {}", id),
            category: Category::Tech,
            subcategory: "Test".to_string(),
            x: 40.0,
            y: 40.0,
            description: "A test business".to_string(),
            excursions: vec![
                Excursion::Text("Visit the floor".to_string()),
                Excursion::Detailed {
                    text: "Visit the lab".to_string(),
                    image_url: Some("x.png".to_string()),
                },
            ],
            professions: vec!["Operator".to_string()],
            icon: "Cpu".to_string(),
            color: "#10B981".to_string(),
            technologies: Vec::new(),
            history: Vec::new(),
            testimonials: Vec::new(),
            image_url: None,
            excursion_years: Vec::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![business("a1"), business("a2"), business("a3")])
    }

    #[test]
    fn test_starts_closed() {
        let dialog = DialogState::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.selected_id(), None);
    }

    #[test]
    fn test_open_then_close_leaves_nothing_selected() {
        let mut dialog = DialogState::new();
        dialog.open("a1");
        assert!(dialog.is_open());
        assert_eq!(dialog.selected_id(), Some("a1"));

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.selected_id(), None);
    }

    #[test]
    fn test_advance_twice_then_wrap() {
        let catalog = catalog();
        let mut dialog = DialogState::new();
        dialog.open("a1");

        dialog.advance(&catalog);
        dialog.advance(&catalog);
        assert_eq!(dialog.selected_id(), Some("a3"));

        dialog.advance(&catalog);
        assert_eq!(dialog.selected_id(), Some("a1"));
    }

    #[test]
    fn test_advance_stays_within_catalog() {
        let catalog = catalog();
        let mut dialog = DialogState::new();
        dialog.open("a1");
        for _ in 0..10 {
            dialog.advance(&catalog);
            let id = dialog.selected_id().unwrap();
            assert!(catalog.find(id).is_some());
        }
    }

    #[test]
    fn test_advance_with_unknown_selection_is_noop() {
        let catalog = catalog();
        let mut dialog = DialogState::new();
        dialog.open("ghost");
        dialog.advance(&catalog);
        assert_eq!(dialog.selected_id(), Some("ghost"));
    }

    #[test]
    fn test_advance_when_closed_is_noop() {
        let catalog = catalog();
        let mut dialog = DialogState::new();
        dialog.advance(&catalog);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_tabs_present_iff_content_nonempty() {
        let plain = business("a1");
        assert_eq!(Tab::available(&plain), vec![Tab::Excursions, Tab::Careers]);

        let mut rich = business("a2");
        rich.technologies.push(Technology {
            name: "CNC".to_string(),
            description: "Computer-controlled milling".to_string(),
        });
        rich.testimonials.push(Testimonial {
            text: "Great visit".to_string(),
            author: "A student".to_string(),
            group: None,
        });
        assert_eq!(
            Tab::available(&rich),
            vec![Tab::Excursions, Tab::Technologies, Tab::Testimonials, Tab::Careers]
        );
    }

    #[test]
    fn test_tab_cycling_skips_unavailable_tabs() {
        let b = business("a1");
        let mut dialog = DialogState::new();
        dialog.open("a1");

        assert_eq!(dialog.tab(), Tab::Excursions);
        dialog.next_tab(&b);
        assert_eq!(dialog.tab(), Tab::Careers);
        dialog.next_tab(&b);
        assert_eq!(dialog.tab(), Tab::Excursions);
        dialog.prev_tab(&b);
        assert_eq!(dialog.tab(), Tab::Careers);
    }

    #[test]
    fn test_expansion_only_on_entries_with_photo() {
        let b = business("a1");
        let mut dialog = DialogState::new();
        dialog.open("a1");

        // Entry 0 is plain text: not expandable
        dialog.toggle_expanded(&b);
        assert_eq!(dialog.expanded(), None);

        // Entry 1 carries a photo: toggles on and off
        dialog.cursor_down(&b);
        dialog.toggle_expanded(&b);
        assert_eq!(dialog.expanded(), Some(1));
        dialog.toggle_expanded(&b);
        assert_eq!(dialog.expanded(), None);
    }

    #[test]
    fn test_view_state_resets_when_business_changes() {
        let catalog = catalog();
        let b = business("a1");
        let mut dialog = DialogState::new();
        dialog.open("a1");
        dialog.set_tab(Tab::Careers);
        dialog.cursor_down(&b);
        dialog.toggle_expanded(&b);
        assert_eq!(dialog.expanded(), Some(1));

        dialog.advance(&catalog);
        assert_eq!(dialog.tab(), Tab::Excursions);
        assert_eq!(dialog.cursor(), 0);
        assert_eq!(dialog.expanded(), None);
    }

    #[test]
    fn test_reopening_same_business_keeps_view_state() {
        let b = business("a1");
        let mut dialog = DialogState::new();
        dialog.open("a1");
        dialog.cursor_down(&b);
        dialog.open("a1");
        assert_eq!(dialog.cursor(), 1);
    }

    #[test]
    fn test_cursor_stays_within_excursion_list() {
        let b = business("a1");
        let mut dialog = DialogState::new();
        dialog.open("a1");
        for _ in 0..5 {
            dialog.cursor_down(&b);
        }
        assert_eq!(dialog.cursor(), b.excursions.len() - 1);
        for _ in 0..5 {
            dialog.cursor_up();
        }
        assert_eq!(dialog.cursor(), 0);
    }
}
