use serde::Serialize;

use crate::model::{NavigationState, Screen};

/// How the content area is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentLayout {
    Single,
    /// Indexing form on the left, document preview on the right
    SplitFormPreview,
}

/// Which chrome accompanies a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewSpec {
    pub screen: Screen,
    pub title: &'static str,
    pub sidebar: bool,
    pub toolbar: bool,
    pub action_bar: bool,
    pub layout: ContentLayout,
}

pub fn view_spec(screen: Screen) -> ViewSpec {
    let in_pipeline = matches!(screen, Screen::Indexing | Screen::Review | Screen::Instance);
    ViewSpec {
        screen,
        title: screen.title(),
        sidebar: !in_pipeline,
        toolbar: screen != Screen::Dashboard,
        action_bar: screen == Screen::Indexing,
        layout: if screen == Screen::Indexing {
            ContentLayout::SplitFormPreview
        } else {
            ContentLayout::Single
        },
    }
}

/// Every screen with its chrome, in declaration order
pub fn all_views() -> Vec<ViewSpec> {
    Screen::ALL.iter().map(|&s| view_spec(s)).collect()
}

/// Header breadcrumb trail for the current navigation state
pub fn breadcrumbs(nav: &NavigationState) -> Vec<String> {
    let dept = nav.selected_department.as_deref().unwrap_or("");
    let sub = nav.selected_sub_department.as_deref().unwrap_or("");
    let mut crumbs = vec![Screen::Dashboard.title().to_string()];
    match nav.active {
        Screen::Dashboard => {}
        Screen::UploadSelection => {
            crumbs.push(Screen::TreeSelection.title().to_string());
            crumbs.push(dept.to_string());
            crumbs.push(sub.to_string());
        }
        Screen::Indexing | Screen::Review | Screen::Instance => {
            crumbs.push(dept.to_string());
            crumbs.push(sub.to_string());
            crumbs.push(nav.active.title().to_string());
        }
        other => crumbs.push(other.title().to_string()),
    }
    crumbs.retain(|c| !c.is_empty());
    crumbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chrome_per_screen() {
        let dash = view_spec(Screen::Dashboard);
        assert!(dash.sidebar && !dash.toolbar && !dash.action_bar);

        let inbox = view_spec(Screen::Inbox);
        assert!(inbox.sidebar && inbox.toolbar && !inbox.action_bar);

        let upload = view_spec(Screen::UploadSelection);
        assert!(upload.sidebar && upload.toolbar);

        let indexing = view_spec(Screen::Indexing);
        assert!(!indexing.sidebar && indexing.toolbar && indexing.action_bar);
        assert_eq!(indexing.layout, ContentLayout::SplitFormPreview);

        for screen in [Screen::Review, Screen::Instance] {
            let spec = view_spec(screen);
            assert!(!spec.sidebar && spec.toolbar && !spec.action_bar);
            assert_eq!(spec.layout, ContentLayout::Single);
        }
    }

    #[test]
    fn only_indexing_has_action_bar() {
        let with_bar: Vec<Screen> = all_views()
            .into_iter()
            .filter(|v| v.action_bar)
            .map(|v| v.screen)
            .collect();
        assert_eq!(with_bar, vec![Screen::Indexing]);
    }

    #[test]
    fn breadcrumb_trails() {
        let mut nav = NavigationState::default();
        assert_eq!(breadcrumbs(&nav), vec!["Dashboard"]);

        nav.active = Screen::Inbox;
        assert_eq!(breadcrumbs(&nav), vec!["Dashboard", "Document Inbox"]);

        nav.active = Screen::UploadSelection;
        nav.selected_department = Some("HR".into());
        nav.selected_sub_department = Some("Payroll".into());
        assert_eq!(
            breadcrumbs(&nav),
            vec!["Dashboard", "Document Trees", "HR", "Payroll"]
        );

        nav.active = Screen::Review;
        assert_eq!(breadcrumbs(&nav), vec!["Dashboard", "HR", "Payroll", "Review"]);
    }
}
