use serde::Serialize;

use crate::model::{DocumentDraft, Instance, NavigationState, Screen, Tree};
use crate::ops::notify::{Notice, NoticeLevel, NoticeLog};
use crate::ops::registry::{ContentLayout, ViewSpec};
use crate::ops::session::Session;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// Final state of a `run` session
#[derive(Serialize)]
pub struct StateJson<'a> {
    pub screen: Screen,
    pub navigation: &'a NavigationState,
    pub favorites: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<&'a DocumentDraft>,
    pub instances: &'a [Instance],
    pub notices: &'a [Notice],
}

pub fn state_to_json(session: &Session) -> StateJson<'_> {
    let draft = session.draft();
    StateJson {
        screen: session.active(),
        navigation: session.nav(),
        favorites: session.favorites().iter().map(|id| id.0).collect(),
        draft: if draft.is_empty() { None } else { Some(draft) },
        instances: session.instances(),
        notices: &session.notifier().notices,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "-" }
}

fn layout_label(layout: ContentLayout) -> &'static str {
    match layout {
        ContentLayout::Single => "single",
        ContentLayout::SplitFormPreview => "form+preview",
    }
}

/// One aligned row per screen
pub fn format_views(views: &[ViewSpec]) -> Vec<String> {
    let key_w = views.iter().map(|v| v.screen.key().len()).max().unwrap_or(0);
    let title_w = views.iter().map(|v| v.title.len()).max().unwrap_or(0);
    let mut lines = vec![format!(
        "{:<key_w$}  {:<title_w$}  {:<7}  {:<7}  {:<10}  {}",
        "KEY", "TITLE", "SIDEBAR", "TOOLBAR", "ACTION-BAR", "LAYOUT"
    )];
    for v in views {
        lines.push(format!(
            "{:<key_w$}  {:<title_w$}  {:<7}  {:<7}  {:<10}  {}",
            v.screen.key(),
            v.title,
            yes_no(v.sidebar),
            yes_no(v.toolbar),
            yes_no(v.action_bar),
            layout_label(v.layout),
        ));
    }
    lines
}

/// Tree name, then departments and indented sub-departments
pub fn format_tree(name: &str, tree: &Tree) -> Vec<String> {
    let mut lines = vec![name.to_string()];
    for (dept, subs) in tree {
        lines.push(format!("  {}", dept));
        for sub in subs {
            lines.push(format!("    {}", sub));
        }
    }
    lines
}

fn format_draft(draft: &DocumentDraft, indent: &str) -> Vec<String> {
    let mut lines = vec![
        format!("{}file: {} ({})", indent, draft.file_name, draft.file_size),
        format!("{}title: {}", indent, draft.title),
        format!("{}category: {}", indent, draft.category),
        format!("{}type: {}", indent, draft.document_type),
        format!("{}date: {}", indent, draft.date),
    ];
    if !draft.tags.is_empty() {
        lines.push(format!(
            "{}tags: {}",
            indent,
            draft
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ")
        ));
    }
    if !draft.description.is_empty() {
        lines.push(format!("{}description: {}", indent, draft.description));
    }
    lines
}

fn notice_mark(level: NoticeLevel) -> char {
    match level {
        NoticeLevel::Success => '\u{2713}',
        NoticeLevel::Info => 'i',
    }
}

/// Human-readable final state of a `run` session
pub fn format_state(session: &Session<NoticeLog>) -> Vec<String> {
    let nav = session.nav();
    let mut lines = vec![
        format!("screen: {}", nav.active),
        format!(
            "section: {}",
            if nav.selected_section.is_empty() {
                "-"
            } else {
                nav.selected_section.as_str()
            }
        ),
    ];
    if let Some(tree) = &nav.selected_tree {
        lines.push(format!("tree: {}", tree));
    }
    if !nav.expanded_departments.is_empty() {
        let expanded: Vec<&str> = nav.expanded_departments.iter().map(|d| d.as_str()).collect();
        lines.push(format!("expanded: {}", expanded.join(", ")));
    }
    if let Some(dept) = &nav.selected_department {
        lines.push(format!("department: {}", dept));
    }
    if let Some(sub) = &nav.selected_sub_department {
        lines.push(format!("sub-department: {}", sub));
    }
    let favorites: Vec<String> = session.favorites().iter().map(|id| id.to_string()).collect();
    lines.push(format!("favorites: {}", favorites.join(", ")));

    let draft = session.draft();
    if !draft.is_empty() {
        lines.push("draft:".to_string());
        lines.extend(format_draft(draft, "  "));
    }
    for instance in session.instances() {
        lines.push(format!(
            "saved: {} at {}",
            instance.id(),
            instance.created().format("%Y-%m-%dT%H:%M:%SZ")
        ));
        lines.extend(format_draft(instance.document(), "  "));
    }
    let notices = &session.notifier().notices;
    if !notices.is_empty() {
        lines.push("notices:".to_string());
        for notice in notices {
            lines.push(format!("  {} {}", notice_mark(notice.level), notice.text));
        }
    }
    lines
}
