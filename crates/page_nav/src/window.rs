//! Host Window
//!
//! The consumer-facing entry point. A host window owns exactly one
//! [`PageStack`] and forwards navigation calls, focus notifications and redraw
//! requests to it. Focus and draw hooks reach the top page only.

use crate::config::NavigatorConfig;
use crate::error::NavigationResult;
use crate::page::Page;
use crate::stack::PageStack;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique window identity, used for page ownership checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    fn next() -> Self {
        Self(NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg(test)]
    pub(crate) fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notifications delivered by the surrounding windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Window gained focus
    Focused,

    /// Window lost focus
    Unfocused,

    /// Window was resized
    Resized {
        /// New window width
        width: u32,
        /// New window height
        height: u32,
    },

    /// Window close requested
    CloseRequested,
}

/// Window hosting a LIFO stack of pages
#[derive(Debug)]
pub struct HostWindow {
    id: WindowId,
    title: String,
    pages: PageStack,
}

impl HostWindow {
    /// Create a window with default configuration
    pub fn new() -> Self {
        Self::with_config(&NavigatorConfig::default())
    }

    /// Create a window from a navigator configuration
    pub fn with_config(config: &NavigatorConfig) -> Self {
        let id = WindowId::next();
        let pages = PageStack::new(id)
            .with_max_depth(config.max_depth)
            .with_transition_logging(config.log_transitions);

        log::info!("Created window {} '{}'", id, config.title);
        Self {
            id,
            title: config.title.clone(),
            pages,
        }
    }

    /// Identity compared against each page's host at push time
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Window title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Number of pages on the stack
    pub fn page_count(&self) -> usize {
        self.pages.count()
    }

    /// True when the stack holds no page
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Read-only view of the underlying stack
    pub fn pages(&self) -> &PageStack {
        &self.pages
    }

    /// Current top page, if any
    pub fn top_page(&self) -> Option<&(dyn Page + 'static)> {
        self.pages.peek_top()
    }

    /// Push a page onto this window's stack.
    ///
    /// Fails with `NullPage` for `None` and `OwnershipMismatch` when the page
    /// was built against another window.
    pub fn push_page(&mut self, page: Option<Box<dyn Page>>) -> NavigationResult<()> {
        self.pages.push(page)
    }

    /// Push a concrete page
    pub fn push<P: Page + 'static>(&mut self, page: P) -> NavigationResult<()> {
        self.push_page(Some(Box::new(page)))
    }

    /// Pop the top page and return it. Fails with `EmptyStack` on an empty stack.
    pub fn pop_page(&mut self) -> NavigationResult<Box<dyn Page>> {
        self.pages.pop()
    }

    /// Pop every page, top to bottom. Returns how many pages were popped.
    pub fn pop_all(&mut self) -> usize {
        let mut popped = 0;
        while self.page_count() > 0 && self.pop_page().is_ok() {
            popped += 1;
        }
        popped
    }

    /// Deliver a focus notification to the top page. No-op when empty.
    pub fn focus(&mut self) {
        match self.pages.top_mut() {
            Some(top) => {
                log::trace!("Window {}: focus -> '{}'", self.id, top.name());
                top.on_focus();
            }
            None => log::trace!("Window {}: focus with no pages", self.id),
        }
    }

    /// Run the header and body hooks of the top page for one redraw cycle
    pub fn draw(&mut self) {
        if let Some(top) = self.pages.top_mut() {
            log::trace!("Window {}: draw '{}'", self.id, top.name());
            top.draw_header();
            top.draw_body();
        }
    }

    /// Route a windowing system event
    pub fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Focused => self.focus(),
            WindowEvent::CloseRequested => {
                let popped = self.pop_all();
                log::info!("Window {} closing, popped {} page(s)", self.id, popped);
            }
            WindowEvent::Unfocused | WindowEvent::Resized { .. } => {
                log::trace!("Window {}: ignoring {:?}", self.id, event);
            }
        }
    }
}

impl Default for HostWindow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NavigationError;
    use crate::page::PageBase;

    struct EmptyPage {
        base: PageBase,
    }

    impl EmptyPage {
        fn new(host: &HostWindow) -> Self {
            Self { base: PageBase::new(host) }
        }
    }

    impl Page for EmptyPage {
        fn base(&self) -> &PageBase {
            &self.base
        }
    }

    #[test]
    fn test_window_ids_are_unique() {
        let a = HostWindow::new();
        let b = HostWindow::new();
        assert_ne!(a.id(), b.id());
        assert!(b.id().raw() > a.id().raw());
    }

    #[test]
    fn test_config_applies_title_and_depth() {
        let config = NavigatorConfig {
            title: "Inspector".to_string(),
            max_depth: Some(1),
            ..NavigatorConfig::default()
        };
        let mut window = HostWindow::with_config(&config);
        assert_eq!(window.title(), "Inspector");

        let first = EmptyPage::new(&window);
        let second = EmptyPage::new(&window);
        window.push(first).unwrap();
        assert_eq!(
            window.push(second),
            Err(NavigationError::DepthLimitExceeded { limit: 1 })
        );
        assert_eq!(window.page_count(), 1);
    }

    #[test]
    fn test_pop_all_on_empty_window() {
        let mut window = HostWindow::new();
        assert_eq!(window.pop_all(), 0);
        assert!(window.is_empty());
    }

    #[test]
    fn test_pop_all_counts_popped_pages() {
        let mut window = HostWindow::new();
        for _ in 0..3 {
            let page = EmptyPage::new(&window);
            window.push(page).unwrap();
        }

        assert_eq!(window.pop_all(), 3);
        assert!(window.is_empty());
    }

    #[test]
    fn test_focus_and_draw_on_empty_window_are_noops() {
        let mut window = HostWindow::new();
        window.focus();
        window.draw();
        window.handle_event(WindowEvent::Resized { width: 640, height: 480 });
        assert_eq!(window.page_count(), 0);
    }

    #[test]
    fn test_close_request_pops_everything() {
        let mut window = HostWindow::new();
        let a = EmptyPage::new(&window);
        let b = EmptyPage::new(&window);
        window.push(a).unwrap();
        window.push(b).unwrap();

        window.handle_event(WindowEvent::CloseRequested);
        assert!(window.is_empty());
    }
}
