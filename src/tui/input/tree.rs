use crate::tui::app::{App, TreeRow};

/// Select the previous/next configured tree, wrapping. With no tree selected
/// the first one is taken.
pub(super) fn cycle_tree(app: &mut App, delta: isize) {
    if !app.tree_panel_visible() {
        return;
    }
    let names: Vec<String> = app.tree_names().iter().map(|n| n.to_string()).collect();
    if names.is_empty() {
        return;
    }
    let current = app
        .session
        .nav()
        .selected_tree
        .as_deref()
        .and_then(|t| names.iter().position(|n| n == t));
    let next = match current {
        Some(i) => (i as isize + delta).rem_euclid(names.len() as isize) as usize,
        None => 0,
    };
    let result = app.session.select_tree(&names[next]);
    if app.report(result).is_some() {
        app.tree_cursor = 0;
    }
}

/// Expand or collapse the department under the cursor (or the parent of a
/// sub-department row)
pub(super) fn toggle_tree_row(app: &mut App) {
    if !app.tree_panel_visible() {
        return;
    }
    let rows = app.tree_rows();
    let Some(row) = rows.get(app.tree_cursor) else {
        return;
    };
    let dept = match row {
        TreeRow::Department(d) => d.clone(),
        TreeRow::SubDepartment { department, .. } => department.clone(),
    };
    let result = app.session.toggle_department(&dept);
    if app.report(result) == Some(false) {
        // Keep the cursor on the collapsed department row
        if let Some(pos) = app
            .tree_rows()
            .iter()
            .position(|r| *r == TreeRow::Department(dept.clone()))
        {
            app.tree_cursor = pos;
        }
    }
}

/// Enter on a tree row. A department row selects the department (and
/// expands it); a sub-department row selects both and opens the upload screen.
pub(super) fn activate_tree_row(app: &mut App) {
    if app.session.nav().selected_tree.is_none() {
        cycle_tree(app, 1);
        return;
    }
    let rows = app.tree_rows();
    let Some(row) = rows.get(app.tree_cursor).cloned() else {
        return;
    };
    match row {
        TreeRow::Department(dept) => {
            let result = app.session.select_department(&dept);
            if app.report(result).is_some() && !app.session.nav().is_expanded(&dept) {
                let result = app.session.toggle_department(&dept);
                app.report(result);
            }
        }
        TreeRow::SubDepartment { department, name } => {
            let result = app.session.select_department(&department);
            if app.report(result).is_none() {
                return;
            }
            let result = app.session.select_sub_department(&name);
            app.report(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use super::super::test_keys::*;
    use crate::model::{Screen, SourceFile};

    #[test]
    fn brackets_cycle_trees() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session.nav().selected_tree.as_deref(), Some("departments"));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session.nav().selected_tree.as_deref(), Some("projects"));
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.session.nav().selected_tree.as_deref(), Some("clients"));
    }

    #[test]
    fn brackets_outside_trees_do_nothing() {
        let mut app = app();
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.session.nav().selected_tree, None);
        assert!(app.error.is_none());
    }

    #[test]
    fn tree_keys_ignored_during_pipeline() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        app.session.select_department("HR").unwrap();
        app.session.select_sub_department("Payroll").unwrap();
        app.session
            .upload(vec![SourceFile::new("Invoice_Jan.pdf", 20480)])
            .unwrap();
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.screen(), Screen::Review);

        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.nav().selected_tree.as_deref(), Some("departments"));
        assert_eq!(app.session.nav().selected_department.as_deref(), Some("HR"));
        assert!(app.session.nav().expanded_departments.is_empty());
        assert!(app.error.is_none());
    }

    #[test]
    fn space_expands_and_collapses() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tree_rows().len(), 7);

        chars(&mut app, "jj ");
        assert!(app.session.nav().is_expanded("HR"));
        assert_eq!(app.tree_rows().len(), 11);

        // Collapse from a sub-department row
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.session.nav().is_expanded("HR"));
        assert_eq!(app.tree_cursor, 2);
    }

    #[test]
    fn enter_on_sub_department_opens_upload() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        chars(&mut app, "jj");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.nav().selected_department.as_deref(), Some("HR"));
        assert_eq!(app.screen(), Screen::TreeSelection);

        chars(&mut app, "jj");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::UploadSelection);
        assert_eq!(
            app.session.nav().selected_sub_department.as_deref(),
            Some("Payroll")
        );
    }

    #[test]
    fn sub_department_of_other_department_switches_department() {
        let mut app = app();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        // Expand Accounting, select HR, then pick an Accounting leaf
        press(&mut app, KeyCode::Char(' '));
        app.session.select_department("HR").unwrap();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.session.nav().selected_department.as_deref(),
            Some("Accounting")
        );
        assert_eq!(
            app.session.nav().selected_sub_department.as_deref(),
            Some("Accounts Payable")
        );
    }
}
