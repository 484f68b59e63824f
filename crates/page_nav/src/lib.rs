//! # Page Nav
//!
//! Multi-page navigation controller for a single host window.
//!
//! ## Features
//!
//! - **LIFO Page Stack**: Push/pop navigation with lifecycle hooks
//! - **Ownership Checks**: Pages can only enter the window they were built for
//! - **Focus Routing**: Focus and redraw hooks reach the top page only
//! - **Named Pages**: Registry of page factories, openable from configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use page_nav::prelude::*;
//!
//! struct HomePage {
//!     base: PageBase,
//! }
//!
//! impl Page for HomePage {
//!     fn base(&self) -> &PageBase {
//!         &self.base
//!     }
//!
//!     fn on_focus(&mut self) {
//!         // Refresh view state
//!     }
//! }
//!
//! fn main() -> Result<(), NavigationError> {
//!     let mut window = HostWindow::new();
//!     let home = HomePage { base: PageBase::new(&window) };
//!     window.push(home)?;
//!     window.handle_event(WindowEvent::Focused);
//!     window.pop_page()?;
//!     assert_eq!(window.page_count(), 0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod logging;
pub mod page;
pub mod registry;
pub mod stack;
pub mod window;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError, NavigatorConfig};
pub use error::{NavigationError, NavigationResult};
pub use page::{Page, PageBase, PageState};
pub use registry::PageRegistry;
pub use stack::PageStack;
pub use window::{HostWindow, WindowEvent, WindowId};

/// Common imports for navigator users
pub mod prelude {
    pub use crate::{
        Config, ConfigError, NavigatorConfig,
        NavigationError, NavigationResult,
        Page, PageBase, PageState,
        PageRegistry, PageStack,
        HostWindow, WindowEvent, WindowId,
    };
}
