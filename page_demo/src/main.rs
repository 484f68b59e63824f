//! Scripted walkthrough of a host window navigating between pages
//!
//! Usage: `page_demo [config.toml|config.ron]`

use page_nav::logging;
use page_nav::prelude::*;
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "navigator.toml";

#[derive(Error, Debug)]
enum DemoError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),
}

/// Landing page, shows a greeting
struct WelcomePage {
    base: PageBase,
    visits: u32,
}

impl WelcomePage {
    fn new(host: &HostWindow) -> Self {
        Self { base: PageBase::new(host), visits: 0 }
    }
}

impl Page for WelcomePage {
    fn base(&self) -> &PageBase {
        &self.base
    }

    fn name(&self) -> &str {
        "welcome"
    }

    fn on_focus(&mut self) {
        self.visits += 1;
        log::info!("Welcome back (focus #{})", self.visits);
    }

    fn draw_header(&mut self) {
        log::info!("[welcome] header");
    }

    fn draw_body(&mut self) {
        log::info!("[welcome] body");
    }
}

/// Note list that holds its buffer only while it is on the stack
struct NotesPage {
    base: PageBase,
    notes: Option<Vec<String>>,
}

impl NotesPage {
    fn new(host: &HostWindow) -> Self {
        Self { base: PageBase::new(host), notes: None }
    }
}

impl Page for NotesPage {
    fn base(&self) -> &PageBase {
        &self.base
    }

    fn name(&self) -> &str {
        "notes"
    }

    fn on_pushed(&mut self) {
        self.notes = Some(vec!["buy milk".to_string(), "water plants".to_string()]);
        log::info!("Loaded notes");
    }

    fn on_popped(&mut self) {
        if let Some(notes) = self.notes.take() {
            log::info!("Released {} note(s)", notes.len());
        }
    }

    fn draw_body(&mut self) {
        for note in self.notes.iter().flatten() {
            log::info!("[notes] - {}", note);
        }
    }
}

fn registry() -> PageRegistry {
    let mut registry = PageRegistry::new();
    registry.register("welcome", WelcomePage::new);
    registry.register("notes", NotesPage::new);
    registry
}

fn run(config: &NavigatorConfig) -> Result<(), DemoError> {
    let registry = registry();
    let mut window = HostWindow::with_config(config);

    let start = config.start_page.as_deref().unwrap_or("welcome");
    window.push_page(registry.create(start, &window))?;
    window.handle_event(WindowEvent::Focused);
    window.draw();

    window.push_page(registry.create("notes", &window))?;
    window.handle_event(WindowEvent::Resized { width: 800, height: 600 });
    window.draw();

    window.pop_page()?;
    window.handle_event(WindowEvent::Focused);

    log::info!("{} page(s) left before close", window.page_count());
    window.handle_event(WindowEvent::CloseRequested);

    Ok(())
}

fn main() -> Result<(), DemoError> {
    logging::init_with_level(logging::LevelFilter::Info);

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = NavigatorConfig::load_or_default(&path)?;
    log::info!("Starting '{}' with pages {:?}", config.title, registry().names());

    run(&config)
}
