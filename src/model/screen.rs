use std::fmt;

use serde::{Deserialize, Serialize};

/// One named view state of the navigation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Dashboard,
    Inbox,
    Outbox,
    Favorites,
    #[serde(rename = "trees")]
    TreeSelection,
    Recent,
    Notifications,
    Reports,
    UploadSelection,
    Indexing,
    Review,
    Instance,
}

impl Screen {
    pub const ALL: [Screen; 12] = [
        Screen::Dashboard,
        Screen::Inbox,
        Screen::Outbox,
        Screen::Favorites,
        Screen::TreeSelection,
        Screen::Recent,
        Screen::Notifications,
        Screen::Reports,
        Screen::UploadSelection,
        Screen::Indexing,
        Screen::Review,
        Screen::Instance,
    ];

    /// Sidebar sections, in sidebar order
    pub const SECTIONS: [Screen; 8] = [
        Screen::Dashboard,
        Screen::Inbox,
        Screen::Outbox,
        Screen::TreeSelection,
        Screen::Recent,
        Screen::Notifications,
        Screen::Favorites,
        Screen::Reports,
    ];

    /// The stable string key used by sections, the CLI and JSON output
    pub fn key(self) -> &'static str {
        match self {
            Screen::Dashboard => "dashboard",
            Screen::Inbox => "inbox",
            Screen::Outbox => "outbox",
            Screen::Favorites => "favorites",
            Screen::TreeSelection => "trees",
            Screen::Recent => "recent",
            Screen::Notifications => "notifications",
            Screen::Reports => "reports",
            Screen::UploadSelection => "upload-selection",
            Screen::Indexing => "indexing",
            Screen::Review => "review",
            Screen::Instance => "instance",
        }
    }

    /// Parse a screen key. `tree-selection` is accepted for `trees`.
    pub fn from_key(key: &str) -> Option<Screen> {
        if key == "tree-selection" {
            return Some(Screen::TreeSelection);
        }
        Screen::ALL.iter().copied().find(|s| s.key() == key)
    }

    /// Whether this screen is reachable as a sidebar section
    pub fn is_section(self) -> bool {
        Screen::SECTIONS.contains(&self)
    }

    /// Breadcrumb / heading label
    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Inbox => "Document Inbox",
            Screen::Outbox => "Document Outbox",
            Screen::Favorites => "Favorites",
            Screen::TreeSelection => "Document Trees",
            Screen::Recent => "Recently Viewed",
            Screen::Notifications => "Notifications",
            Screen::Reports => "Reports",
            Screen::UploadSelection => "Upload",
            Screen::Indexing => "Indexing",
            Screen::Review => "Review",
            Screen::Instance => "Document Saved",
        }
    }

    /// Short label for the sidebar
    pub fn sidebar_label(self) -> &'static str {
        match self {
            Screen::TreeSelection => "Document Trees",
            Screen::Inbox => "Inbox",
            Screen::Outbox => "Outbox",
            other => other.title(),
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
