//! Page capability
//!
//! A page is one navigable unit inside a host window. Concrete pages embed a
//! [`PageBase`] that records the owning window and the lifecycle state, and
//! override whichever hooks they need. Every hook defaults to a no-op.

use crate::window::{HostWindow, WindowId};
use std::cell::Cell;

/// Lifecycle of a page relative to its host's stack
///
/// Transitions are monotonic: `Created -> Pushed -> Popped`. `Popped` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    /// Constructed but never pushed
    Created,
    /// Currently held by its host's stack
    Pushed,
    /// Removed from the stack
    Popped,
}

/// Host binding and lifecycle state shared by every page
///
/// Only the page stack advances the state; pages get shared access only.
#[derive(Debug, PartialEq, Eq)]
pub struct PageBase {
    host: WindowId,
    state: Cell<PageState>,
}

impl PageBase {
    /// Bind a new page to `host`. The binding cannot be changed afterwards.
    pub fn new(host: &HostWindow) -> Self {
        Self {
            host: host.id(),
            state: Cell::new(PageState::Created),
        }
    }

    /// Window this page was constructed against
    pub fn host(&self) -> WindowId {
        self.host
    }

    /// Current lifecycle state
    pub fn state(&self) -> PageState {
        self.state.get()
    }

    pub(crate) fn set_state(&self, state: PageState) {
        self.state.set(state);
    }
}

/// A navigable page with lifecycle and rendering hooks
pub trait Page {
    /// Binding created with [`PageBase::new`]
    fn base(&self) -> &PageBase;

    /// Human readable name used in logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Called once, right after the page became the top of its host's stack
    fn on_pushed(&mut self) {}

    /// Called once, right after the page was removed from the stack.
    /// Must release anything acquired in [`Page::on_pushed`].
    fn on_popped(&mut self) {}

    /// Called on every focus event received while this page is on top
    fn on_focus(&mut self) {}

    /// Header rendering hook, only invoked for the top page
    fn draw_header(&mut self) {}

    /// Body rendering hook, only invoked for the top page
    fn draw_body(&mut self) {}
}

impl dyn Page {
    /// Window this page belongs to
    pub fn host(&self) -> WindowId {
        self.base().host()
    }

    /// Current lifecycle state
    pub fn state(&self) -> PageState {
        self.base().state()
    }
}

impl std::fmt::Debug for dyn Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("name", &self.name())
            .field("host", &self.host())
            .field("state", &self.state())
            .finish()
    }
}
