//! Page that records every hook call into a shared journal

use crate::page::{Page, PageBase};
use crate::window::HostWindow;
use std::cell::RefCell;
use std::rc::Rc;

/// Hook kinds observed by the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Pushed,
    Popped,
    Focus,
    Header,
    Body,
}

/// Shared, ordered log of `(page name, hook)` pairs
#[derive(Debug, Default, Clone)]
pub struct Journal(Rc<RefCell<Vec<(String, Hook)>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, name: &str, hook: Hook) {
        self.0.borrow_mut().push((name.to_string(), hook));
    }

    pub fn entries(&self) -> Vec<(String, Hook)> {
        self.0.borrow().clone()
    }

    /// Names of pages that received `hook`, in call order
    pub fn calls(&self, hook: Hook) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter(|(_, h)| *h == hook)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct RecordingPage {
    base: PageBase,
    name: String,
    journal: Journal,
}

impl RecordingPage {
    pub fn new(host: &HostWindow, name: &str, journal: &Journal) -> Self {
        Self {
            base: PageBase::new(host),
            name: name.to_string(),
            journal: journal.clone(),
        }
    }
}

impl Page for RecordingPage {
    fn base(&self) -> &PageBase {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn on_pushed(&mut self) {
        self.journal.record(&self.name, Hook::Pushed);
    }

    fn on_popped(&mut self) {
        self.journal.record(&self.name, Hook::Popped);
    }

    fn on_focus(&mut self) {
        self.journal.record(&self.name, Hook::Focus);
    }

    fn draw_header(&mut self) {
        self.journal.record(&self.name, Hook::Header);
    }

    fn draw_body(&mut self) {
        self.journal.record(&self.name, Hook::Body);
    }
}
