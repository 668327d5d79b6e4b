use crate::content::{ProjectEntry, SkillEntry, Skills};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Picks the class (or any value) for the current mode.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }

    /// Label for the control that switches away from this mode.
    pub fn toggle_label(self) -> &'static str {
        self.pick("Light Mode", "Dark Mode")
    }
}

/// Which project card is showing its long description. At most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpansionState {
    expanded: Option<u32>,
}

impl ExpansionState {
    pub fn toggle(&mut self, project_id: u32) {
        self.expanded = if self.expanded == Some(project_id) {
            None
        } else {
            Some(project_id)
        };
    }

    pub fn expanded(&self) -> Option<u32> {
        self.expanded
    }

    pub fn is_expanded(&self, project_id: u32) -> bool {
        self.expanded == Some(project_id)
    }

    /// The expanded project, treating an id not in `projects` as nothing expanded.
    pub fn resolve<'a>(&self, projects: &'a [ProjectEntry]) -> Option<&'a ProjectEntry> {
        let id = self.expanded?;
        projects.iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl CategoryFilter {
    /// Starts on the first declared category.
    pub fn new(skills: &Skills) -> Self {
        Self {
            active: skills
                .default_category()
                .map(|c| c.id.clone())
                .unwrap_or_default(),
        }
    }

    pub fn select(&mut self, category: &str) {
        if self.active != category {
            self.active = category.to_string();
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn visible<'a>(&self, skills: &'a Skills) -> &'a [SkillEntry] {
        skills.for_category(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    fn bundled() -> Portfolio {
        Portfolio::load().expect("bundled content should validate")
    }

    #[test]
    fn test_theme_toggle_is_own_inverse() {
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.toggled(), ThemeMode::Light);
        assert_eq!(mode.toggled().toggled(), mode);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn test_theme_pick() {
        assert_eq!(ThemeMode::Dark.pick("bg-gray-900", "bg-gray-50"), "bg-gray-900");
        assert_eq!(ThemeMode::Light.pick("bg-gray-900", "bg-gray-50"), "bg-gray-50");
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light Mode");
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_expansion_toggle_same_collapses() {
        let mut state = ExpansionState::default();
        state.toggle(4);
        assert!(state.is_expanded(4));
        state.toggle(4);
        assert_eq!(state.expanded(), None);
    }

    #[test]
    fn test_expansion_single_selection() {
        let portfolio = bundled();
        let mut state = ExpansionState::default();

        state.toggle(2);
        let shown = state.resolve(&portfolio.projects).unwrap();
        assert_eq!(shown.id, 2);
        assert!(!shown.long_description.is_empty());
        assert!(!shown.tech_stack.is_empty());

        state.toggle(3);
        assert!(!state.is_expanded(2));
        assert!(state.is_expanded(3));
        assert_eq!(state.resolve(&portfolio.projects).map(|p| p.id), Some(3));

        state.toggle(3);
        assert_eq!(state.expanded(), None);
        assert!(state.resolve(&portfolio.projects).is_none());
    }

    #[test]
    fn test_expansion_unknown_id_resolves_to_none() {
        let portfolio = bundled();
        let mut state = ExpansionState::default();
        state.toggle(999);
        assert!(state.is_expanded(999));
        assert!(state.resolve(&portfolio.projects).is_none());
    }

    #[test]
    fn test_category_filter_select() {
        let portfolio = bundled();
        let skills = &portfolio.skills;
        let mut filter = CategoryFilter::new(skills);
        assert_eq!(filter.active(), "frontend");
        assert_eq!(filter.visible(skills), skills.for_category("frontend"));

        for category in &skills.categories {
            filter.select(&category.id);
            assert!(filter.is_active(&category.id));
            assert_eq!(filter.visible(skills), &skills.by_category[&category.id][..]);
        }

        // reselecting is a no-op
        let before = filter.clone();
        filter.select(before.active());
        assert_eq!(filter, before);
    }

    #[test]
    fn test_category_filter_unknown_is_empty() {
        let portfolio = bundled();
        let mut filter = CategoryFilter::new(&portfolio.skills);
        filter.select("mobile");
        assert!(filter.visible(&portfolio.skills).is_empty());
    }
}
