use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::io::files::FileSource;
use crate::io::scan::ScanJob;
use crate::model::{
    AppConfig, DocumentDraft, DocumentId, DraftField, FavoriteSet, Instance, NavigationState,
    Screen, SourceFile,
};
use crate::ops::navigator::{NavError, Navigator};
use crate::ops::notify::{Notice, NoticeLog, Notifier};
use crate::ops::pipeline::{Pipeline, PipelineError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Nav(#[from] NavError),
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}

/// The single owner of navigation, favorites and the draft pipeline.
///
/// Every user action is one method call that runs to completion; a rejected
/// action leaves all three untouched.
pub struct Session<N: Notifier = NoticeLog> {
    nav: Navigator,
    favorites: FavoriteSet,
    pipeline: Pipeline,
    instances: Vec<Instance>,
    scan: Option<ScanJob>,
    notifier: N,
    accept: Vec<String>,
    scan_delay: Duration,
    next_seq: u32,
}

impl Session<NoticeLog> {
    pub fn with_log(config: &AppConfig) -> Self {
        Session::new(config, NoticeLog::default())
    }
}

impl<N: Notifier> Session<N> {
    pub fn new(config: &AppConfig, notifier: N) -> Self {
        Session {
            nav: Navigator::new(),
            favorites: FavoriteSet::from_ids(config.favorites.initial.iter().map(|&id| DocumentId(id))),
            pipeline: Pipeline::new(),
            instances: Vec::new(),
            scan: None,
            notifier,
            accept: config.upload.accept.clone(),
            scan_delay: Duration::from_millis(config.scan.delay_ms),
            next_seq: 1,
        }
    }

    // -- accessors ---------------------------------------------------------

    pub fn nav(&self) -> &NavigationState {
        self.nav.state()
    }

    pub fn active(&self) -> Screen {
        self.nav.active()
    }

    pub fn draft(&self) -> &DocumentDraft {
        self.pipeline.draft()
    }

    pub fn uploaded_files(&self) -> &[SourceFile] {
        self.pipeline.files()
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn last_instance(&self) -> Option<&Instance> {
        self.instances.last()
    }

    pub fn scan_pending(&self) -> bool {
        self.scan.is_some()
    }

    pub fn scan_remaining(&self, now: Instant) -> Option<Duration> {
        self.scan.as_ref().map(|job| job.remaining(now))
    }

    pub fn accept(&self) -> &[String] {
        &self.accept
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    // -- navigation --------------------------------------------------------

    /// Back to the dashboard, discarding the draft, uploaded files and any
    /// pending scan
    pub fn go_home(&mut self) {
        self.nav.go_home();
        self.pipeline.reset();
        if self.scan.take().is_some() {
            log::debug!("session: pending scan dropped");
        }
    }

    pub fn select_section(&mut self, key: &str) -> Result<Screen, SessionError> {
        let screen = self.nav.select_section(key)?;
        if screen == Screen::Dashboard {
            self.go_home();
        } else {
            self.drop_scan_if_left_upload();
        }
        Ok(screen)
    }

    pub fn select_tree(&mut self, tree: &str) -> Result<(), SessionError> {
        Ok(self.nav.select_tree(tree)?)
    }

    pub fn toggle_department(&mut self, dept: &str) -> Result<bool, SessionError> {
        Ok(self.nav.toggle_department_expansion(dept)?)
    }

    pub fn select_department(&mut self, dept: &str) -> Result<(), SessionError> {
        Ok(self.nav.select_department(dept)?)
    }

    pub fn select_sub_department(&mut self, sub: &str) -> Result<(), SessionError> {
        Ok(self.nav.select_sub_department(sub)?)
    }

    // -- favorites ---------------------------------------------------------

    pub fn toggle_favorite(&mut self, id: DocumentId) -> bool {
        let now_favorite = self.favorites.toggle(id);
        if now_favorite {
            self.emit(Notice::success("Added to favorites"));
        } else {
            self.emit(Notice::success("Removed from favorites"));
        }
        now_favorite
    }

    // -- pipeline ----------------------------------------------------------

    /// Ask the upload collaborator for files and start the draft from them
    pub fn choose_files(&mut self, source: &dyn FileSource) -> Result<usize, SessionError> {
        self.require(Screen::UploadSelection, Screen::Indexing)?;
        let files = source.choose(&self.accept);
        self.upload(files)
    }

    /// Start the draft from `files` and move on to indexing
    pub fn upload(&mut self, files: Vec<SourceFile>) -> Result<usize, SessionError> {
        self.require(Screen::UploadSelection, Screen::Indexing)?;
        let count = files.len();
        let department = self.nav.state().selected_department.clone();
        self.pipeline.start_upload(files, department.as_deref())?;
        self.nav.advance(Screen::Indexing)?;
        self.scan = None;
        self.emit(Notice::success(format!("{} file(s) uploaded successfully", count)));
        Ok(count)
    }

    /// Schedule a scan. A scan already in flight is left alone.
    pub fn start_scan(&mut self, now: Instant) -> Result<(), SessionError> {
        self.require(Screen::UploadSelection, Screen::Indexing)?;
        if self.scan.is_some() {
            return Ok(());
        }
        self.scan = Some(ScanJob::start(now, self.scan_delay));
        self.emit(Notice::success("Scanning initiated..."));
        Ok(())
    }

    /// Complete a due scan. Returns whether one completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let file = match self.scan.as_mut().and_then(|job| job.poll(now)) {
            Some(file) => file,
            None => return false,
        };
        self.scan = None;
        match self.upload(vec![file]) {
            Ok(_) => {
                self.emit(Notice::success("Document scanned successfully"));
                true
            }
            Err(e) => {
                log::warn!("session: scan result discarded: {}", e);
                false
            }
        }
    }

    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), SessionError> {
        self.require(Screen::Indexing, Screen::Indexing)?;
        self.pipeline.update_field(field, value);
        Ok(())
    }

    pub fn add_tag(&mut self, tag: &str) -> Result<bool, SessionError> {
        self.require(Screen::Indexing, Screen::Indexing)?;
        Ok(self.pipeline.add_tag(tag))
    }

    pub fn remove_tag(&mut self, tag: &str) -> Result<bool, SessionError> {
        self.require(Screen::Indexing, Screen::Indexing)?;
        Ok(self.pipeline.remove_tag(tag))
    }

    /// Indexing → Review
    pub fn next(&mut self) -> Result<(), SessionError> {
        Ok(self.nav.advance(Screen::Review)?)
    }

    /// Review → Indexing
    pub fn back(&mut self) -> Result<(), SessionError> {
        Ok(self.nav.retreat(Screen::Indexing)?)
    }

    /// Review → Instance, committing the draft
    pub fn save(&mut self, now: DateTime<Utc>) -> Result<&Instance, SessionError> {
        self.nav.advance(Screen::Instance)?;
        let instance = self.pipeline.commit(self.next_seq, now);
        self.next_seq += 1;
        log::info!("session: saved {}", instance.id());
        self.instances.push(instance);
        self.emit(Notice::success("Document saved successfully"));
        Ok(&self.instances[self.instances.len() - 1])
    }

    /// Instance → UploadSelection with a fresh draft
    pub fn new_document(&mut self) -> Result<(), SessionError> {
        self.nav.advance(Screen::UploadSelection)?;
        self.pipeline.reset();
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.emit(Notice::info("Operation cancelled"));
    }

    // -- helpers -----------------------------------------------------------

    fn require(&self, screen: Screen, to: Screen) -> Result<(), NavError> {
        let from = self.nav.active();
        if from != screen {
            log::warn!("session: {} requires {}, on {}", to, screen, from);
            return Err(NavError::IllegalTransition { from, to });
        }
        Ok(())
    }

    fn drop_scan_if_left_upload(&mut self) {
        if self.nav.active() != Screen::UploadSelection && self.scan.take().is_some() {
            log::debug!("session: left upload, pending scan dropped");
        }
    }

    fn emit(&mut self, notice: Notice) {
        log::info!("notice: {}", notice.text);
        self.notifier.notify(notice);
    }
}
