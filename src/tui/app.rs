use std::collections::{HashMap, HashSet};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::model::{AppConfig, Catalog, DocumentId, DraftField, Screen, Tree};
use crate::ops::notify::{Notice, Notifier};
use crate::ops::session::{Session, SessionError};

use super::input;
use super::render;
use super::theme::Theme;

/// How long a notice or error stays in the status row
pub const STATUS_TTL: Duration = Duration::from_secs(3);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the prompt line
    Prompt,
}

/// What the prompt line is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// Whitespace-separated file paths for upload
    Files,
    Field(DraftField),
    AddTag,
    RemoveTag,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Files => "files",
            PromptKind::Field(f) => f.label(),
            PromptKind::AddTag => "add tag",
            PromptKind::RemoveTag => "remove tag",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
}

impl Prompt {
    pub fn new(kind: PromptKind, initial: &str) -> Self {
        Prompt {
            kind,
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }
}

/// A visible row of the tree panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Department(String),
    SubDepartment { department: String, name: String },
}

/// A visible row of the reports screen, by index into the catalog groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRow {
    Group(usize),
    Report { group: usize, index: usize },
}

impl ReportRow {
    pub fn group(self) -> usize {
        match self {
            ReportRow::Group(g) | ReportRow::Report { group: g, .. } => g,
        }
    }
}

/// A row of the indexing form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    Field(DraftField),
    Tags,
}

pub const FORM_ROWS: [FormRow; 6] = [
    FormRow::Field(DraftField::Title),
    FormRow::Field(DraftField::Category),
    FormRow::Field(DraftField::DocumentType),
    FormRow::Field(DraftField::Date),
    FormRow::Tags,
    FormRow::Field(DraftField::Description),
];

/// Shows the latest notice in the status row for a few seconds
#[derive(Debug, Clone, Default)]
pub struct StatusNotifier {
    latest: Option<(Notice, Instant)>,
}

impl StatusNotifier {
    /// The latest notice if it is still fresh at `now`
    pub fn current(&self, now: Instant) -> Option<&Notice> {
        self.latest
            .as_ref()
            .filter(|(_, at)| now.duration_since(*at) < STATUS_TTL)
            .map(|(n, _)| n)
    }

    pub fn clear(&mut self) {
        self.latest = None;
    }
}

impl Notifier for StatusNotifier {
    fn notify(&mut self, notice: Notice) {
        self.latest = Some((notice, Instant::now()));
    }
}

/// Main application state
pub struct App {
    pub session: Session<StatusNotifier>,
    pub config: AppConfig,
    pub catalog: Catalog,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Help overlay visible
    pub show_help: bool,
    /// Cursor per list screen
    pub list_cursors: HashMap<Screen, usize>,
    /// Cursor into the flat tree rows
    pub tree_cursor: usize,
    /// Cursor into [`FORM_ROWS`]
    pub form_cursor: usize,
    /// Report categories currently open
    pub expanded_reports: HashSet<String>,
    pub prompt: Option<Prompt>,
    /// Last rejected action, shown in the status row
    pub error: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        let theme = Theme::from_config(&config.ui);
        let session = Session::new(&config, StatusNotifier::default());
        // The first category starts open
        let expanded_reports = catalog
            .reports
            .first()
            .map(|g| g.category.clone())
            .into_iter()
            .collect();
        App {
            session,
            config,
            catalog,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            list_cursors: HashMap::new(),
            tree_cursor: 0,
            form_cursor: 0,
            expanded_reports,
            prompt: None,
            error: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.active()
    }

    /// The tree panel shows, and takes keys, only on the tree and upload
    /// screens of the trees section
    pub fn tree_panel_visible(&self) -> bool {
        self.session.nav().in_trees()
            && matches!(self.screen(), Screen::TreeSelection | Screen::UploadSelection)
    }

    /// Apply a session result, surfacing a rejection in the status row
    pub fn report<T>(&mut self, result: Result<T, SessionError>) -> Option<T> {
        match result {
            Ok(v) => {
                self.error = None;
                Some(v)
            }
            Err(e) => {
                self.session.notifier_mut().clear();
                self.error = Some((e.to_string(), Instant::now()));
                None
            }
        }
    }

    pub fn current_error(&self, now: Instant) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|(_, at)| now.duration_since(*at) < STATUS_TTL)
            .map(|(e, _)| e.as_str())
    }

    /// Names of configured trees, in config order
    pub fn tree_names(&self) -> Vec<&str> {
        self.config.trees.keys().map(|k| k.as_str()).collect()
    }

    pub fn selected_tree(&self) -> Option<&Tree> {
        let name = self.session.nav().selected_tree.as_deref()?;
        self.config.tree(name)
    }

    /// Departments of the selected tree, with the sub-departments of
    /// expanded departments inlined below them
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        let Some(tree) = self.selected_tree() else {
            return Vec::new();
        };
        let nav = self.session.nav();
        let mut rows = Vec::new();
        for (dept, subs) in tree {
            rows.push(TreeRow::Department(dept.clone()));
            if nav.is_expanded(dept) {
                for sub in subs {
                    rows.push(TreeRow::SubDepartment {
                        department: dept.clone(),
                        name: sub.clone(),
                    });
                }
            }
        }
        rows
    }

    /// Report categories, each followed by its reports when open
    pub fn report_rows(&self) -> Vec<ReportRow> {
        let mut rows = Vec::new();
        for (g, group) in self.catalog.reports.iter().enumerate() {
            rows.push(ReportRow::Group(g));
            if self.expanded_reports.contains(&group.category) {
                rows.extend((0..group.reports.len()).map(|index| ReportRow::Report { group: g, index }));
            }
        }
        rows
    }

    /// Open or close a report category. Returns whether it is now open.
    pub fn toggle_report_group(&mut self, group: usize) -> bool {
        let Some(category) = self.catalog.reports.get(group).map(|g| g.category.clone()) else {
            return false;
        };
        if self.expanded_reports.remove(&category) {
            false
        } else {
            self.expanded_reports.insert(category);
            true
        }
    }

    /// Document ids shown by a list screen, in display order
    pub fn list_ids(&self, screen: Screen) -> Vec<DocumentId> {
        match screen {
            Screen::Inbox => self.catalog.inbox.iter().map(|e| e.id).collect(),
            Screen::Outbox => self.catalog.outbox.iter().map(|e| e.id).collect(),
            Screen::Recent => self.catalog.recent.iter().map(|e| e.id).collect(),
            Screen::Favorites => self
                .catalog
                .favorites(self.session.favorites())
                .iter()
                .map(|d| d.id)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Number of rows the cursor can move over on a list screen
    pub fn list_len(&self, screen: Screen) -> usize {
        match screen {
            Screen::Notifications => self.catalog.notifications.len(),
            Screen::Reports => self.report_rows().len(),
            other => self.list_ids(other).len(),
        }
    }

    /// Cursor for a list screen, clamped to its current length
    pub fn list_cursor(&self, screen: Screen) -> usize {
        let cursor = self.list_cursors.get(&screen).copied().unwrap_or(0);
        cursor.min(self.list_len(screen).saturating_sub(1))
    }

    pub fn form_row(&self) -> FormRow {
        FORM_ROWS[self.form_cursor.min(FORM_ROWS.len() - 1)]
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(config_path.map(Path::new), &cwd)?;
    let mut app = App::new(config, Catalog::sample());
    log::info!("tui: starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("tui: exiting");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.session.tick(Instant::now());
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(AppConfig::default(), Catalog::sample())
    }

    #[test]
    fn tree_rows_follow_expansion() {
        let mut app = app();
        assert!(app.tree_rows().is_empty());
        app.session.select_section("trees").unwrap();
        app.session.select_tree("departments").unwrap();
        assert_eq!(app.tree_rows().len(), 7);

        app.session.toggle_department("HR").unwrap();
        let rows = app.tree_rows();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[2], TreeRow::Department("HR".into()));
        assert_eq!(
            rows[4],
            TreeRow::SubDepartment {
                department: "HR".into(),
                name: "Payroll".into()
            }
        );
    }

    #[test]
    fn report_rows_follow_open_categories() {
        let mut app = app();
        let rows = app.report_rows();
        assert_eq!(rows[0], ReportRow::Group(0));
        assert_eq!(rows[1], ReportRow::Report { group: 0, index: 0 });
        assert_eq!(rows[5], ReportRow::Group(1));

        assert!(!app.toggle_report_group(0));
        assert_eq!(app.report_rows().len(), 5);
        assert!(app.toggle_report_group(4));
        let rows = app.report_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[6], ReportRow::Report { group: 4, index: 1 });
        assert_eq!(rows[6].group(), 4);
        assert!(!app.toggle_report_group(99));
    }

    #[test]
    fn favorites_list_tracks_the_set() {
        let mut app = app();
        assert_eq!(app.list_ids(Screen::Favorites), vec![DocumentId(1), DocumentId(3)]);
        app.session.toggle_favorite(DocumentId(3));
        assert_eq!(app.list_ids(Screen::Favorites), vec![DocumentId(1)]);
    }

    #[test]
    fn list_cursor_is_clamped() {
        let mut app = app();
        app.list_cursors.insert(Screen::Favorites, 5);
        assert_eq!(app.list_cursor(Screen::Favorites), 1);
        // Five categories plus the four reports of the open one
        assert_eq!(app.list_len(Screen::Reports), 9);
        assert_eq!(app.list_cursor(Screen::Dashboard), 0);
    }

    #[test]
    fn status_notice_expires() {
        let mut status = StatusNotifier::default();
        status.notify(Notice::success("Added to favorites"));
        let now = Instant::now();
        assert!(status.current(now).is_some());
        assert!(status.current(now + STATUS_TTL).is_none());
    }

    #[test]
    fn rejected_action_sets_error() {
        let mut app = app();
        let result = app.session.select_section("nowhere");
        assert!(app.report(result).is_none());
        assert_eq!(
            app.current_error(Instant::now()),
            Some("unknown section: \"nowhere\"")
        );
    }
}
