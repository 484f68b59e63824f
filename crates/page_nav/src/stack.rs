//! Page Stack
//!
//! LIFO container of pages owned by exactly one host window. Enforces the
//! ownership check and drives the pushed/popped lifecycle hooks.

use crate::error::{NavigationError, NavigationResult};
use crate::page::{Page, PageState};
use crate::window::WindowId;

/// Ordered stack of pages, last pushed is first popped
pub struct PageStack {
    /// Window that owns this stack; pages must be bound to it
    owner: WindowId,

    /// Pages from bottom to top
    entries: Vec<Box<dyn Page>>,

    /// Optional upper bound on `entries.len()`
    max_depth: Option<usize>,

    /// Emit debug logs for push/pop transitions
    log_transitions: bool,
}

impl PageStack {
    /// Create an empty stack owned by `owner`
    pub fn new(owner: WindowId) -> Self {
        Self {
            owner,
            entries: Vec::new(),
            max_depth: None,
            log_transitions: true,
        }
    }

    /// Limit the number of pages the stack accepts
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Toggle transition logging
    pub fn with_transition_logging(mut self, enabled: bool) -> Self {
        self.log_transitions = enabled;
        self
    }

    /// Window that owns this stack
    pub fn owner(&self) -> WindowId {
        self.owner
    }

    /// Current depth
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// True when no page is on the stack
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Push `page` on top and run its pushed hook.
    ///
    /// On error the stack is left untouched and no hook runs.
    pub fn push(&mut self, page: Option<Box<dyn Page>>) -> NavigationResult<()> {
        let page = match page {
            Some(page) => page,
            None => return self.reject(NavigationError::NullPage),
        };

        let base = page.base();
        if base.host() != self.owner {
            return self.reject(NavigationError::OwnershipMismatch {
                page_host: base.host(),
                window: self.owner,
            });
        }

        match base.state() {
            PageState::Created => {}
            PageState::Pushed => {
                return self.reject(NavigationError::PageAlreadyPushed(page.name().to_string()));
            }
            PageState::Popped => {
                return self.reject(NavigationError::PageAlreadyPopped(page.name().to_string()));
            }
        }

        if let Some(limit) = self.max_depth {
            if self.entries.len() >= limit {
                return self.reject(NavigationError::DepthLimitExceeded { limit });
            }
        }

        page.base().set_state(PageState::Pushed);
        self.entries.push(page);

        let depth = self.entries.len();
        if let Some(top) = self.entries.last_mut() {
            if self.log_transitions {
                log::debug!("Window {}: pushed '{}' (depth {})", self.owner, top.name(), depth);
            }
            top.on_pushed();
        }

        Ok(())
    }

    /// Remove the top page, run its popped hook and hand it back
    pub fn pop(&mut self) -> NavigationResult<Box<dyn Page>> {
        let Some(mut page) = self.entries.pop() else {
            return self.reject(NavigationError::EmptyStack);
        };

        page.base().set_state(PageState::Popped);
        if self.log_transitions {
            log::debug!(
                "Window {}: popped '{}' (depth {})",
                self.owner,
                page.name(),
                self.entries.len()
            );
        }
        page.on_popped();

        Ok(page)
    }

    /// Current top page, if any
    pub fn peek_top(&self) -> Option<&(dyn Page + 'static)> {
        self.entries.last().map(|page| page.as_ref())
    }

    /// Mutable access to the current top page, used for focus and draw routing
    pub fn top_mut(&mut self) -> Option<&mut (dyn Page + 'static)> {
        self.entries.last_mut().map(|page| page.as_mut())
    }

    /// Iterate pages from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Page + 'static)> {
        self.entries.iter().map(|page| page.as_ref())
    }

    fn reject<T>(&self, error: NavigationError) -> NavigationResult<T> {
        log::warn!("Window {}: {}", self.owner, error);
        Err(error)
    }
}

impl std::fmt::Debug for PageStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageStack")
            .field("owner", &self.owner)
            .field("entries", &self.entries)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
