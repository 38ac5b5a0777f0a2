use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::io::files::ListedFiles;
use crate::model::{DocumentId, DraftField, SourceFile};
use crate::ops::notify::Notifier;
use crate::ops::session::{Session, SessionError};

/// One step of `dk run`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Home,
    Section(String),
    Tree(String),
    Expand(String),
    Department(String),
    SubDepartment(String),
    Upload(SourceFile),
    /// Start a scan and let it complete immediately
    Scan,
    Field(DraftField, String),
    AddTag(String),
    RemoveTag(String),
    Next,
    Back,
    Save,
    New,
    Cancel,
    Favorite(DocumentId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action: {0:?}")]
    Unknown(String),
    #[error("malformed action {action:?}: {reason}")]
    Malformed { action: String, reason: &'static str },
}

fn split_pair<'a>(action: &str, arg: &'a str, reason: &'static str) -> Result<(&'a str, &'a str), ActionError> {
    arg.split_once('=').ok_or_else(|| ActionError::Malformed {
        action: action.to_string(),
        reason,
    })
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| ActionError::Malformed {
            action: s.to_string(),
            reason,
        };

        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let action = match (verb, arg) {
            ("home", None) => Action::Home,
            ("scan", None) => Action::Scan,
            ("next", None) => Action::Next,
            ("back", None) => Action::Back,
            ("save", None) => Action::Save,
            ("new", None) => Action::New,
            ("cancel", None) => Action::Cancel,
            ("section", Some(key)) => Action::Section(key.to_string()),
            ("tree", Some(name)) => Action::Tree(name.to_string()),
            ("expand", Some(dept)) => Action::Expand(dept.to_string()),
            ("dept", Some(dept)) => Action::Department(dept.to_string()),
            ("sub", Some(sub)) => Action::SubDepartment(sub.to_string()),
            ("tag+", Some(tag)) => Action::AddTag(tag.to_string()),
            ("tag-", Some(tag)) => Action::RemoveTag(tag.to_string()),
            ("upload", Some(arg)) => {
                let (name, bytes) = split_pair(s, arg, "expected upload:<name>=<bytes>")?;
                let size = bytes
                    .parse::<u64>()
                    .map_err(|_| malformed("file size must be a whole number of bytes"))?;
                Action::Upload(SourceFile::new(name, size))
            }
            ("field", Some(arg)) => {
                let (name, value) = split_pair(s, arg, "expected field:<name>=<value>")?;
                let field = DraftField::from_key(name).ok_or_else(|| {
                    malformed("field must be one of title, category, type, date, description")
                })?;
                Action::Field(field, value.to_string())
            }
            ("fav", Some(id)) => {
                let id = id
                    .parse::<u32>()
                    .map_err(|_| malformed("document id must be a number"))?;
                Action::Favorite(DocumentId(id))
            }
            (
                "home" | "scan" | "next" | "back" | "save" | "new" | "cancel",
                Some(_),
            ) => return Err(malformed("takes no argument")),
            (
                "section" | "tree" | "expand" | "dept" | "sub" | "tag+" | "tag-" | "upload"
                | "field" | "fav",
                None,
            ) => return Err(malformed("missing argument")),
            _ => return Err(ActionError::Unknown(s.to_string())),
        };
        Ok(action)
    }
}

/// Parse every action up front so a typo fails before anything runs
pub fn parse_actions(raw: &[String]) -> Result<Vec<Action>, ActionError> {
    raw.iter().map(|s| s.parse()).collect()
}

/// Apply one action to the session. `scan_delay` is how far the clock is
/// advanced so a started scan completes.
pub fn apply<N: Notifier>(
    session: &mut Session<N>,
    action: &Action,
    scan_delay: Duration,
) -> Result<(), SessionError> {
    match action {
        Action::Home => session.go_home(),
        Action::Section(key) => {
            session.select_section(key)?;
        }
        Action::Tree(name) => session.select_tree(name)?,
        Action::Expand(dept) => {
            session.toggle_department(dept)?;
        }
        Action::Department(dept) => session.select_department(dept)?,
        Action::SubDepartment(sub) => session.select_sub_department(sub)?,
        Action::Upload(file) => {
            session.choose_files(&ListedFiles(vec![file.clone()]))?;
        }
        Action::Scan => {
            let now = Instant::now();
            session.start_scan(now)?;
            session.tick(now + scan_delay);
        }
        Action::Field(field, value) => session.update_field(*field, value)?,
        Action::AddTag(tag) => {
            session.add_tag(tag)?;
        }
        Action::RemoveTag(tag) => {
            session.remove_tag(tag)?;
        }
        Action::Next => session.next()?,
        Action::Back => session.back()?,
        Action::Save => {
            session.save(chrono::Utc::now())?;
        }
        Action::New => session.new_document()?,
        Action::Cancel => session.cancel(),
        Action::Favorite(id) => {
            session.toggle_favorite(*id);
        }
    }
    Ok(())
}
