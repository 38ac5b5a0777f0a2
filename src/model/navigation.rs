use indexmap::IndexSet;
use serde::Serialize;

use super::screen::Screen;

/// The section key under which tree selection context is kept
pub const TREES_SECTION: &str = "trees";

/// Which screen is visible plus the selection context carried between screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    pub active: Screen,
    /// Sidebar section key ("" on the dashboard)
    pub selected_section: String,
    pub selected_tree: Option<String>,
    /// Expanded departments in the tree panel, in expansion order
    pub expanded_departments: IndexSet<String>,
    pub selected_department: Option<String>,
    pub selected_sub_department: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            active: Screen::Dashboard,
            selected_section: String::new(),
            selected_tree: None,
            expanded_departments: IndexSet::new(),
            selected_department: None,
            selected_sub_department: None,
        }
    }
}

impl NavigationState {
    /// Whether the trees section is the selected sidebar section
    pub fn in_trees(&self) -> bool {
        self.selected_section == TREES_SECTION
    }

    /// Drop tree, department, sub-department and expansion state
    pub fn clear_tree_context(&mut self) {
        self.selected_tree = None;
        self.clear_department_context();
    }

    /// Drop department, sub-department and expansion state; keep the tree
    pub fn clear_department_context(&mut self) {
        self.expanded_departments.clear();
        self.selected_department = None;
        self.selected_sub_department = None;
    }

    pub fn is_expanded(&self, dept: &str) -> bool {
        self.expanded_departments.contains(dept)
    }

    /// Check the selection chain and the trees-section invariant.
    /// Returns a description of the first violation.
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        if self.selected_sub_department.is_some() && self.selected_department.is_none() {
            return Err("sub-department selected without a department");
        }
        if self.selected_department.is_some() && self.selected_tree.is_none() {
            return Err("department selected without a tree");
        }
        if !self.in_trees()
            && (self.selected_tree.is_some()
                || !self.expanded_departments.is_empty()
                || self.selected_department.is_some())
        {
            return Err("tree context retained outside the trees section");
        }
        Ok(())
    }
}
