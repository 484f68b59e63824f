//! Named page factories
//!
//! Lets configuration or commands open pages by name. A lookup for an unknown
//! name yields `None`, which the host window rejects as a null page.

use crate::page::Page;
use crate::window::HostWindow;
use std::collections::HashMap;

type PageFactory = Box<dyn Fn(&HostWindow) -> Box<dyn Page>>;

/// Registry of page constructors keyed by name
#[derive(Default)]
pub struct PageRegistry {
    factories: HashMap<String, PageFactory>,
}

impl PageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `name`, replacing any previous entry
    pub fn register<F, P>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&HostWindow) -> P + 'static,
        P: Page + 'static,
    {
        let name = name.into();
        if self.factories.contains_key(&name) {
            log::warn!("Replacing page factory '{}'", name);
        }
        self.factories
            .insert(name, Box::new(move |host: &HostWindow| Box::new(factory(host)) as Box<dyn Page>));
    }

    /// Whether a factory exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the page registered as `name`, bound to `host`
    pub fn create(&self, name: &str, host: &HostWindow) -> Option<Box<dyn Page>> {
        let page = self.factories.get(name).map(|factory| factory(host));
        if page.is_none() {
            log::warn!("No page registered as '{}'", name);
        }
        page
    }
}

impl std::fmt::Debug for PageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRegistry")
            .field("names", &self.names())
            .finish()
    }
}
