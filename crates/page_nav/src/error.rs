//! Navigation error taxonomy
//!
//! Every variant is a programmer error: callers are expected to prevent it by
//! construction rather than retry. A failed operation never mutates the stack.

use crate::window::WindowId;
use thiserror::Error;

/// Errors raised by push/pop operations on a page stack
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// Push was called without a page instance
    #[error("cannot push a null page")]
    NullPage,

    /// The page was constructed against a different host window
    #[error("page belongs to window {page_host}, not window {window}")]
    OwnershipMismatch {
        /// Host the page was bound to at construction
        page_host: WindowId,
        /// Window the push was attempted on
        window: WindowId,
    },

    /// Pop was called on an empty stack
    #[error("cannot pop from an empty page stack")]
    EmptyStack,

    /// The page's binding is already on a stack, e.g. one `PageBase` shared by two pages
    #[error("page '{0}' is already on a stack")]
    PageAlreadyPushed(String),

    /// The page has already been popped once and cannot re-enter a stack
    #[error("page '{0}' was already popped and cannot be pushed again")]
    PageAlreadyPopped(String),

    /// The configured maximum depth has been reached
    #[error("page stack depth limit of {limit} reached")]
    DepthLimitExceeded {
        /// Configured maximum number of pages
        limit: usize,
    },
}

/// Result alias for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
