use crate::model::{NavigationState, Screen, TREES_SECTION};

/// A rejected navigation request. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    #[error("unknown section: {0:?}")]
    InvalidSection(String),
    #[error("cannot go from {from} to {to}")]
    IllegalTransition { from: Screen, to: Screen },
    #[error("no {0} selected")]
    EmptySelection(&'static str),
}

/// Direction of an explicit pipeline/hub edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// The edge table. `TreeSelection → UploadSelection` is absent on purpose:
/// that edge is only taken by [`Navigator::select_sub_department`].
pub fn edge(from: Screen, to: Screen) -> Option<Direction> {
    use crate::model::Screen::*;
    match (from, to) {
        (Dashboard, Inbox | Outbox | Favorites | Recent | Notifications | Reports | TreeSelection) => {
            Some(Direction::Forward)
        }
        (Inbox | Outbox | Favorites | Recent | Notifications | Reports | TreeSelection, Dashboard) => {
            Some(Direction::Backward)
        }
        (UploadSelection, Indexing) => Some(Direction::Forward),
        (Indexing, Review) => Some(Direction::Forward),
        (Review, Instance) => Some(Direction::Forward),
        (Review, Indexing) => Some(Direction::Backward),
        (Instance, UploadSelection) => Some(Direction::Forward),
        _ => None,
    }
}

pub fn is_legal(from: Screen, to: Screen) -> bool {
    edge(from, to).is_some()
}

/// Screens that show the sidebar, from which section changes are allowed
fn has_sidebar(screen: Screen) -> bool {
    screen.is_section() || screen == Screen::UploadSelection
}

/// Owns the navigation state and exposes the only legal transitions
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    pub fn new() -> Self {
        Navigator::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active(&self) -> Screen {
        self.state.active
    }

    /// Reset to the initial state
    pub fn go_home(&mut self) {
        if self.state.active != Screen::Dashboard {
            log::debug!("nav: {} -> dashboard (home)", self.state.active);
        }
        self.state = NavigationState::default();
    }

    pub fn select_section(&mut self, key: &str) -> Result<Screen, NavError> {
        let target =
            Screen::from_key(key).ok_or_else(|| self.reject(NavError::InvalidSection(key.to_string())))?;
        if target == Screen::Dashboard {
            self.go_home();
            return Ok(target);
        }
        let from = self.state.active;
        if !target.is_section() || !has_sidebar(from) {
            return Err(self.reject(NavError::IllegalTransition { from, to: target }));
        }

        self.state.selected_section = target.key().to_string();
        self.state.active = target;
        if !self.state.in_trees() {
            self.state.clear_tree_context();
        }
        log::debug!("nav: {} -> {} (section)", from, target);
        Ok(target)
    }

    pub fn select_tree(&mut self, tree: &str) -> Result<(), NavError> {
        self.require_tree_screen()?;
        self.state.selected_tree = Some(tree.to_string());
        self.state.clear_department_context();
        log::debug!("nav: tree {:?}", tree);
        Ok(())
    }

    /// Flip whether `dept` is expanded. Returns the new expansion state.
    pub fn toggle_department_expansion(&mut self, dept: &str) -> Result<bool, NavError> {
        self.require_tree()?;
        self.require_tree_screen()?;
        if self.state.expanded_departments.shift_remove(dept) {
            Ok(false)
        } else {
            self.state.expanded_departments.insert(dept.to_string());
            Ok(true)
        }
    }

    pub fn select_department(&mut self, dept: &str) -> Result<(), NavError> {
        self.require_tree()?;
        self.require_tree_screen()?;
        self.state.selected_department = Some(dept.to_string());
        self.state.selected_sub_department = None;
        log::debug!("nav: department {:?}", dept);
        Ok(())
    }

    /// Select a leaf of the tree and move straight to the upload screen
    pub fn select_sub_department(&mut self, sub: &str) -> Result<(), NavError> {
        if self.state.selected_department.is_none() {
            return Err(self.reject(NavError::EmptySelection("department")));
        }
        let from = self.state.active;
        if !matches!(from, Screen::TreeSelection | Screen::UploadSelection) {
            return Err(self.reject(NavError::IllegalTransition {
                from,
                to: Screen::UploadSelection,
            }));
        }
        self.state.selected_sub_department = Some(sub.to_string());
        self.state.active = Screen::UploadSelection;
        log::debug!("nav: {} -> upload-selection (sub-department {:?})", from, sub);
        Ok(())
    }

    pub fn advance(&mut self, target: Screen) -> Result<(), NavError> {
        self.step(target, Direction::Forward)
    }

    pub fn retreat(&mut self, target: Screen) -> Result<(), NavError> {
        self.step(target, Direction::Backward)
    }

    fn step(&mut self, target: Screen, direction: Direction) -> Result<(), NavError> {
        let from = self.state.active;
        if edge(from, target) != Some(direction) {
            return Err(self.reject(NavError::IllegalTransition { from, to: target }));
        }
        if target == Screen::Dashboard {
            self.go_home();
            return Ok(());
        }
        if target.is_section() {
            self.state.selected_section = target.key().to_string();
            if !self.state.in_trees() {
                self.state.clear_tree_context();
            }
        }
        self.state.active = target;
        log::debug!("nav: {} -> {}", from, target);
        Ok(())
    }

    /// Tree context is editable only from the trees section while the
    /// sidebar is showing; the pipeline screens keep it frozen.
    fn require_tree_screen(&self) -> Result<(), NavError> {
        let from = self.state.active;
        if !self.state.in_trees() || !has_sidebar(from) {
            return Err(self.reject(NavError::IllegalTransition {
                from,
                to: Screen::TreeSelection,
            }));
        }
        Ok(())
    }

    fn require_tree(&self) -> Result<(), NavError> {
        if self.state.selected_tree.is_none() {
            return Err(self.reject(NavError::EmptySelection("tree")));
        }
        Ok(())
    }

    fn reject(&self, err: NavError) -> NavError {
        log::warn!("nav: rejected on {}: {}", self.state.active, err);
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn in_trees() -> Navigator {
        let mut nav = Navigator::new();
        nav.select_section("trees").unwrap();
        nav
    }

    #[test]
    fn department_scenario_reaches_upload() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.toggle_department_expansion("HR").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_sub_department("Payroll").unwrap();

        let state = nav.state();
        assert_eq!(state.active, Screen::UploadSelection);
        assert_eq!(state.selected_department.as_deref(), Some("HR"));
        assert_eq!(state.selected_sub_department.as_deref(), Some("Payroll"));
        assert!(state.is_expanded("HR"));
    }

    #[test]
    fn go_home_restores_initial_state() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.toggle_department_expansion("Legal").unwrap();
        nav.select_department("Legal").unwrap();
        nav.select_sub_department("Contracts").unwrap();
        nav.advance(Screen::Indexing).unwrap();

        nav.go_home();
        assert_eq!(nav.state(), &NavigationState::default());
        nav.go_home();
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn leaving_trees_clears_tree_context() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.toggle_department_expansion("HR").unwrap();
        nav.select_department("HR").unwrap();

        nav.select_section("inbox").unwrap();
        let state = nav.state();
        assert_eq!(state.active, Screen::Inbox);
        assert_eq!(state.selected_section, "inbox");
        assert!(state.selected_tree.is_none());
        assert!(state.selected_department.is_none());
        assert!(state.selected_sub_department.is_none());
        assert!(state.expanded_departments.is_empty());
    }

    #[test]
    fn unknown_section_is_rejected_without_change() {
        let mut nav = Navigator::new();
        nav.select_section("inbox").unwrap();
        let before = nav.state().clone();
        assert_eq!(
            nav.select_section("settings"),
            Err(NavError::InvalidSection("settings".into()))
        );
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn pipeline_screens_are_not_sections() {
        let mut nav = Navigator::new();
        assert_eq!(
            nav.select_section("indexing"),
            Err(NavError::IllegalTransition {
                from: Screen::Dashboard,
                to: Screen::Indexing
            })
        );
        assert_eq!(nav.active(), Screen::Dashboard);
    }

    #[test]
    fn dashboard_section_goes_home() {
        let mut nav = in_trees();
        nav.select_tree("projects").unwrap();
        nav.select_section("dashboard").unwrap();
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn sections_unreachable_from_sidebarless_screens() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_sub_department("Payroll").unwrap();
        nav.advance(Screen::Indexing).unwrap();
        let before = nav.state().clone();
        assert!(matches!(
            nav.select_section("inbox"),
            Err(NavError::IllegalTransition { .. })
        ));
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn sub_department_before_tree_is_rejected() {
        let mut nav = in_trees();
        let before = nav.state().clone();
        assert_eq!(
            nav.select_sub_department("Payroll"),
            Err(NavError::EmptySelection("department"))
        );
        assert_eq!(nav.state(), &before);

        let mut nav = Navigator::new();
        assert_eq!(
            nav.select_sub_department("Payroll"),
            Err(NavError::EmptySelection("department"))
        );
    }

    #[test]
    fn department_needs_a_tree() {
        let mut nav = in_trees();
        assert_eq!(
            nav.select_department("HR"),
            Err(NavError::EmptySelection("tree"))
        );
        assert_eq!(
            nav.toggle_department_expansion("HR"),
            Err(NavError::EmptySelection("tree"))
        );
    }

    #[test]
    fn tree_outside_trees_section_is_rejected() {
        let mut nav = Navigator::new();
        nav.select_section("inbox").unwrap();
        assert_eq!(
            nav.select_tree("departments"),
            Err(NavError::IllegalTransition {
                from: Screen::Inbox,
                to: Screen::TreeSelection
            })
        );
        assert!(nav.state().selected_tree.is_none());
    }

    #[test]
    fn tree_context_frozen_during_pipeline() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.toggle_department_expansion("HR").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_sub_department("Payroll").unwrap();

        for target in [Screen::Indexing, Screen::Review, Screen::Instance] {
            nav.advance(target).unwrap();
            let before = nav.state().clone();
            let illegal = NavError::IllegalTransition {
                from: target,
                to: Screen::TreeSelection,
            };
            assert_eq!(nav.select_tree("clients"), Err(illegal.clone()));
            assert_eq!(nav.select_department("Legal"), Err(illegal.clone()));
            assert_eq!(nav.toggle_department_expansion("Legal"), Err(illegal));
            assert_eq!(nav.state(), &before);
        }

        nav.advance(Screen::UploadSelection).unwrap();
        let state = nav.state();
        assert_eq!(state.selected_department.as_deref(), Some("HR"));
        assert_eq!(state.selected_sub_department.as_deref(), Some("Payroll"));
    }

    #[test]
    fn new_tree_invalidates_deeper_selection() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.toggle_department_expansion("HR").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_tree("clients").unwrap();
        let state = nav.state();
        assert_eq!(state.selected_tree.as_deref(), Some("clients"));
        assert!(state.selected_department.is_none());
        assert!(state.expanded_departments.is_empty());
    }

    #[test]
    fn new_department_clears_sub_department() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_sub_department("Payroll").unwrap();
        nav.select_department("Legal").unwrap();
        assert_eq!(nav.state().selected_department.as_deref(), Some("Legal"));
        assert!(nav.state().selected_sub_department.is_none());
        assert_eq!(nav.active(), Screen::UploadSelection);
    }

    #[test]
    fn expansion_does_not_touch_selection() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.select_department("HR").unwrap();
        assert!(nav.toggle_department_expansion("Sales").unwrap());
        assert!(nav.toggle_department_expansion("HR").unwrap());
        assert!(!nav.toggle_department_expansion("Sales").unwrap());
        assert_eq!(nav.state().selected_department.as_deref(), Some("HR"));
        let expanded: Vec<&str> = nav
            .state()
            .expanded_departments
            .iter()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(expanded, vec!["HR"]);
    }

    #[test]
    fn invariants_hold_across_operation_sequences() {
        let depts = ["HR", "Legal", "Sales"];
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        for round in 0..30usize {
            let dept = depts[round % depts.len()];
            match round % 4 {
                0 => {
                    nav.toggle_department_expansion(dept).unwrap();
                }
                1 => nav.select_department(dept).unwrap(),
                2 => nav.select_sub_department("Leaf").unwrap(),
                _ => {
                    nav.toggle_department_expansion(dept).unwrap();
                    nav.select_department(dept).unwrap();
                }
            }
            assert_eq!(nav.state().check_invariants(), Ok(()));
            if nav.state().selected_sub_department.is_some() {
                assert!(nav.state().selected_department.is_some());
            }
        }
    }

    #[test]
    fn pipeline_edges() {
        let mut nav = in_trees();
        nav.select_tree("departments").unwrap();
        nav.select_department("HR").unwrap();
        nav.select_sub_department("Payroll").unwrap();

        nav.advance(Screen::Indexing).unwrap();
        nav.advance(Screen::Review).unwrap();
        nav.retreat(Screen::Indexing).unwrap();
        nav.advance(Screen::Review).unwrap();
        nav.advance(Screen::Instance).unwrap();
        nav.advance(Screen::UploadSelection).unwrap();
        assert_eq!(nav.active(), Screen::UploadSelection);
        assert_eq!(nav.state().selected_sub_department.as_deref(), Some("Payroll"));
    }

    #[test]
    fn illegal_edges_leave_state_unchanged() {
        let mut nav = in_trees();
        let before = nav.state().clone();
        for target in [Screen::UploadSelection, Screen::Indexing, Screen::Review, Screen::Instance] {
            assert_eq!(
                nav.advance(target),
                Err(NavError::IllegalTransition {
                    from: Screen::TreeSelection,
                    to: target
                })
            );
        }
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn direction_must_match_edge() {
        let mut nav = Navigator::new();
        assert!(nav.retreat(Screen::Inbox).is_err());
        nav.advance(Screen::Inbox).unwrap();
        assert!(nav.advance(Screen::Dashboard).is_err());
        nav.retreat(Screen::Dashboard).unwrap();
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn advance_into_section_sets_section() {
        let mut nav = Navigator::new();
        nav.advance(Screen::TreeSelection).unwrap();
        assert_eq!(nav.state().selected_section, TREES_SECTION);
        nav.select_tree("departments").unwrap();
    }

    #[test]
    fn edge_table() {
        assert!(is_legal(Screen::Dashboard, Screen::Reports));
        assert!(is_legal(Screen::Reports, Screen::Dashboard));
        assert!(!is_legal(Screen::Inbox, Screen::Outbox));
        assert!(!is_legal(Screen::TreeSelection, Screen::UploadSelection));
        assert!(!is_legal(Screen::Indexing, Screen::UploadSelection));
        assert!(!is_legal(Screen::Instance, Screen::Review));
    }
}
