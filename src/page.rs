//! Page - Host Page Surface
//!
//! Location, reported languages, and navigation of the page the switcher
//! runs against. Hosts adapt their real location/navigator pair; tests
//! and the simulator use [`SimulatedPage`].

/// Trait for the host page's environment
pub trait Page {
    /// Current URL path of the page
    fn path(&self) -> String;

    /// Primary reported language tag, if any
    fn language(&self) -> Option<String>;

    /// Full language preference list, most preferred first
    fn languages(&self) -> Vec<String>;

    /// Request a full-page navigation to `path`.
    ///
    /// A navigation unconditionally tears down the page context; the
    /// switcher performs no further work after requesting one.
    fn navigate(&mut self, path: &str);
}

/// Plain in-memory page used by tests and the simulator
pub struct SimulatedPage {
    path: String,
    languages: Vec<String>,
    navigations: Vec<String>,
}

impl SimulatedPage {
    /// Create a page at `path` reporting `languages`
    pub fn new(path: impl Into<String>, languages: Vec<String>) -> Self {
        Self {
            path: path.into(),
            languages,
            navigations: Vec::new(),
        }
    }

    /// Navigations requested so far, oldest first
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}

impl Page for SimulatedPage {
    fn path(&self) -> String {
        self.path.clone()
    }

    fn language(&self) -> Option<String> {
        self.languages.first().cloned()
    }

    fn languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn navigate(&mut self, path: &str) {
        // The simulated context records the request; the real page would
        // be torn down here.
        self.navigations.push(path.to_string());
    }
}
