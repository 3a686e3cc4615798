//! LanguageSwitcher - The Switching Engine
//!
//! One synchronous pass per page load: redirect check, toggle injection,
//! navbar localization, in that order. A redirect tears down the page
//! context, so the pass stops once one is issued. All host access goes
//! through the injected [`Page`], [`Document`], and [`PreferenceStore`]
//! seams.

use tracing::{debug, info, warn};

use crate::constants::{
    MENU_TEXT_SELECTOR, NAV_CONTAINER_SELECTORS, NAV_LINK_SELECTOR, NAV_RIGHT_LIST_SELECTOR,
    TOGGLE_CLASS, TOGGLE_LABEL_TO_EN, TOGGLE_LABEL_TO_ZH, TOGGLE_SELECTOR, TOGGLE_STYLE,
    TOGGLE_TITLE_TO_EN, TOGGLE_TITLE_TO_ZH, ZH_SEGMENT,
};
use crate::dom::{Document, NodeId};
use crate::domain::config::SiteConfig;
use crate::i18n::{self, Locale};
use crate::page::Page;
use crate::routing::{PathPair, alternate_path, is_zh_page};
use crate::store::PreferenceStore;

/// The language switching engine
pub struct LanguageSwitcher<P, D, S> {
    page: P,
    dom: D,
    store: S,
    config: SiteConfig,
}

impl<P: Page, D: Document, S: PreferenceStore> LanguageSwitcher<P, D, S> {
    /// Create an engine over the host seams
    pub fn new(page: P, dom: D, store: S, config: SiteConfig) -> Self {
        Self {
            page,
            dom,
            store,
            config,
        }
    }

    /// Page-ready entry point, invoked once per page load
    pub fn run(&mut self) {
        if self.auto_redirect() {
            // The requested navigation tears down this page; nothing
            // left to mutate.
            return;
        }
        self.inject_toggle();
        self.localize_navbar();
    }

    // ==================== Redirect Policy ====================

    /// First-visit redirect. Returns true when a navigation was issued.
    ///
    /// Once any preference is recorded the policy never fires again;
    /// the manual toggle is the only way to move between locales.
    fn auto_redirect(&mut self) -> bool {
        if self.store.load().is_some() {
            return false;
        }

        let detected = i18n::detect(self.page.language().as_deref(), &self.page.languages());
        let wants_zh = detected == Locale::Zh;
        let on_zh = is_zh_page(&self.page.path());
        if wants_zh == on_zh {
            debug!(locale = detected.as_str(), "Reported language matches page; no redirect");
            return false;
        }

        let target = alternate_path(&self.page.path(), &self.config.site_base);
        if let Err(e) = self.store.save(detected) {
            warn!(error = %e, "Failed to record language preference");
        }
        info!(locale = detected.as_str(), target = %target, "First-visit language redirect");
        self.page.navigate(&target);
        true
    }

    // ==================== Toggle Control ====================

    /// Insert the language toggle into the navbar.
    ///
    /// Guarded on an existing toggle, so repeated invocations leave a
    /// single control in the document.
    fn inject_toggle(&mut self) {
        if self.dom.query(TOGGLE_SELECTOR).is_some() {
            debug!("Toggle already present; skipping injection");
            return;
        }

        if let Some(right_list) = self.dom.query(NAV_RIGHT_LIST_SELECTOR) {
            let toggle = self.create_toggle();
            let item = self.dom.create_element("li");
            self.dom.set_attribute(item, "class", "nav-item");
            self.dom.append_child(item, toggle);
            // First item in the right-aligned list, ahead of any icons
            self.dom.prepend_child(right_list, item);
            return;
        }

        // Fallback: append directly to a generic navbar container
        let container = NAV_CONTAINER_SELECTORS
            .iter()
            .find_map(|s| self.dom.query(s));
        let Some(container) = container else {
            debug!("No navbar container found; toggle not injected");
            return;
        };
        let toggle = self.create_toggle();
        self.dom.append_child(container, toggle);
    }

    fn create_toggle(&mut self) -> NodeId {
        let pair = PathPair::of(&self.page.path(), &self.config.site_base);
        let toggle = self.dom.create_element("a");
        self.dom
            .set_attribute(toggle, "class", &format!("nav-link {TOGGLE_CLASS}"));
        // Plain-link fallback target, kept even though clicks are
        // handled explicitly
        self.dom.set_attribute(toggle, "href", &pair.alternate);
        self.dom.set_attribute(toggle, "style", TOGGLE_STYLE);

        if is_zh_page(&pair.current) {
            self.dom.set_text(toggle, TOGGLE_LABEL_TO_EN);
            self.dom.set_attribute(toggle, "title", TOGGLE_TITLE_TO_EN);
        } else {
            self.dom.set_text(toggle, TOGGLE_LABEL_TO_ZH);
            self.dom.set_attribute(toggle, "title", TOGGLE_TITLE_TO_ZH);
        }

        toggle
    }

    /// Click handler for the toggle control.
    ///
    /// The host wires the control's click event (default prevented) to
    /// this method: record the explicit choice, then navigate.
    pub fn handle_toggle_click(&mut self) {
        let path = self.page.path();
        let current = if is_zh_page(&path) {
            Locale::Zh
        } else {
            Locale::En
        };
        let chosen = current.opposite();
        if let Err(e) = self.store.save(chosen) {
            warn!(error = %e, "Failed to record language preference");
        }

        let target = alternate_path(&path, &self.config.site_base);
        info!(locale = chosen.as_str(), target = %target, "Manual language toggle");
        self.page.navigate(&target);
    }

    // ==================== Navbar Localization ====================

    /// Translate labels and rewrite hrefs so navbar links stay within
    /// the zh subtree. Runs only on zh pages, once over the links
    /// present at call time.
    fn localize_navbar(&mut self) {
        if !is_zh_page(&self.page.path()) {
            return;
        }

        let links = self.dom.query_all(NAV_LINK_SELECTOR);
        if links.is_empty() {
            debug!("No navbar links to localize");
            return;
        }

        for link in links {
            // The freshly injected toggle already points at the
            // alternate locale; rewriting it would undo that.
            if self.has_class(link, TOGGLE_CLASS) {
                continue;
            }
            self.localize_label(link);
            self.rewrite_href(link);
        }
    }

    fn localize_label(&mut self, link: NodeId) {
        let target = self
            .dom
            .query_within(link, MENU_TEXT_SELECTOR)
            .unwrap_or(link);
        let text = self.dom.text(target).trim().to_string();
        if let Some(zh) = i18n::nav_label_zh(&text) {
            debug!(en = %text, zh = %zh, "Translated navbar label");
            self.dom.set_text(target, zh);
        }
    }

    fn rewrite_href(&mut self, link: NodeId) {
        let Some(href) = self.dom.attribute(link, "href") else {
            return;
        };
        if href.contains(ZH_SEGMENT) || href.starts_with("http") {
            return;
        }

        let base = &self.config.site_base;
        let rewritten = if let Some(rest) = href.strip_prefix("../") {
            // Parent-relative links climbed out of zh/; stay in place
            format!("./{rest}")
        } else if let Some(rest) = href.strip_prefix("./") {
            format!("./zh/{rest}")
        } else if href.starts_with(base.as_str()) && !href.starts_with(&format!("{base}zh/")) {
            format!("{}zh/{}", base, &href[base.len()..])
        } else {
            return;
        };

        debug!(from = %href, to = %rewritten, "Rewrote navbar href");
        self.dom.set_attribute(link, "href", &rewritten);
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.dom
            .attribute(node, "class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    // ==================== Accessors ====================

    /// The host page
    pub fn page(&self) -> &P {
        &self.page
    }

    /// The document
    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// The preference store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::page::SimulatedPage;
    use crate::store::MemoryPreferenceStore;

    const EN_HOME: &str = "/cooperation.tw/index.html";
    const ZH_HOME: &str = "/cooperation.tw/zh/index.html";

    /// Bootstrap-shaped navbar: left link list plus right-aligned list
    fn navbar_doc() -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        let nav = doc.append_element(doc.root(), "nav", "navbar");
        let container = doc.append_element(nav, "div", "container-fluid");
        let collapse = doc.append_element(container, "div", "navbar-collapse");
        doc.append_element(collapse, "ul", "navbar-nav");
        doc.append_element(collapse, "ul", "navbar-nav ms-auto");
        doc
    }

    fn add_link(doc: &mut MemoryDocument, label: &str, href: Option<&str>, spanned: bool) -> NodeId {
        let list = doc.query(".navbar-nav").expect("navbar list missing");
        let item = doc.append_element(list, "li", "nav-item");
        let link = doc.append_element(item, "a", "nav-link");
        if let Some(href) = href {
            doc.set_attribute(link, "href", href);
        }
        if spanned {
            let span = doc.append_element(link, "span", "menu-text");
            doc.set_text(span, label);
        } else {
            doc.set_text(link, label);
        }
        link
    }

    fn switcher(
        path: &str,
        languages: &[&str],
        store: MemoryPreferenceStore,
        doc: MemoryDocument,
    ) -> LanguageSwitcher<SimulatedPage, MemoryDocument, MemoryPreferenceStore> {
        let page = SimulatedPage::new(path, languages.iter().map(|s| s.to_string()).collect());
        LanguageSwitcher::new(page, doc, store, SiteConfig::default())
    }

    #[test]
    fn zh_visitor_first_visit_redirects_once() {
        let mut sw = switcher(EN_HOME, &["zh-TW"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();

        assert_eq!(sw.page().navigations(), [ZH_HOME.to_string()]);
        assert_eq!(sw.store().load(), Some(Locale::Zh));
        // The dying page gets no toggle
        assert_eq!(sw.dom().query(TOGGLE_SELECTOR), None);
    }

    #[test]
    fn recorded_preference_disables_redirect() {
        let mut sw = switcher(
            EN_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            navbar_doc(),
        );
        sw.run();

        assert!(sw.page().navigations().is_empty());
        assert!(sw.dom().query(TOGGLE_SELECTOR).is_some());
    }

    #[test]
    fn en_visitor_on_zh_page_redirects_back() {
        let mut sw = switcher(ZH_HOME, &["en-US"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();

        assert_eq!(sw.page().navigations(), [EN_HOME.to_string()]);
        assert_eq!(sw.store().load(), Some(Locale::En));
    }

    #[test]
    fn matching_locale_records_nothing() {
        let mut sw = switcher(ZH_HOME, &["zh-Hant"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();

        assert!(sw.page().navigations().is_empty());
        // Agreement is not a decision; the first-visit window stays open
        assert_eq!(sw.store().load(), None);
    }

    #[test]
    fn toggle_on_en_page_offers_chinese() {
        let mut sw = switcher(EN_HOME, &["en-US"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();

        let toggle = sw.dom().query(TOGGLE_SELECTOR).expect("toggle missing");
        assert_eq!(sw.dom().text(toggle), "中文");
        assert_eq!(sw.dom().attribute(toggle, "title").as_deref(), Some("切換為中文"));
        assert_eq!(sw.dom().attribute(toggle, "href").as_deref(), Some(ZH_HOME));

        // Wrapped in li.nav-item, first in the right-aligned list
        let item = sw.dom().parent(toggle).expect("toggle not attached");
        assert_eq!(sw.dom().tag(item), "li");
        let list = sw.dom().parent(item).expect("item not attached");
        assert_eq!(sw.dom().children(list)[0], item);
    }

    #[test]
    fn toggle_on_zh_page_offers_english() {
        let mut sw = switcher(
            ZH_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            navbar_doc(),
        );
        sw.run();

        let toggle = sw.dom().query(TOGGLE_SELECTOR).expect("toggle missing");
        assert_eq!(sw.dom().text(toggle), "EN");
        assert_eq!(
            sw.dom().attribute(toggle, "title").as_deref(),
            Some("Switch to English")
        );
        assert_eq!(sw.dom().attribute(toggle, "href").as_deref(), Some(EN_HOME));
    }

    #[test]
    fn repeated_runs_inject_a_single_toggle() {
        let mut sw = switcher(EN_HOME, &["en-US"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();
        sw.run();

        assert_eq!(sw.dom().query_all(TOGGLE_SELECTOR).len(), 1);
    }

    #[test]
    fn toggle_falls_back_to_navbar_container() {
        let mut doc = MemoryDocument::new();
        let nav = doc.append_element(doc.root(), "nav", "navbar");
        let container = doc.append_element(nav, "div", "container");

        let mut sw = switcher(EN_HOME, &["en-US"], MemoryPreferenceStore::new(), doc);
        sw.run();

        let toggle = sw.dom().query(TOGGLE_SELECTOR).expect("toggle missing");
        // Appended directly, no list item wrapper
        assert_eq!(sw.dom().parent(toggle), Some(container));
    }

    #[test]
    fn missing_navbar_is_a_silent_no_op() {
        let mut sw = switcher(
            EN_HOME,
            &["en-US"],
            MemoryPreferenceStore::new(),
            MemoryDocument::new(),
        );
        sw.run();

        assert_eq!(sw.dom().query(TOGGLE_SELECTOR), None);
        assert!(sw.page().navigations().is_empty());
    }

    #[test]
    fn zh_page_translates_labels_and_rewrites_hrefs() {
        let mut doc = navbar_doc();
        let methodology = add_link(&mut doc, "Methodology", Some("../methodology/index.html"), true);
        let skills = add_link(&mut doc, "Skills", Some("./skills/index.html"), false);
        let blog = add_link(
            &mut doc,
            "Blog",
            Some("/cooperation.tw/blog/index.html"),
            false,
        );
        let about = add_link(&mut doc, "About", Some("../about/index.html"), false);

        let mut sw = switcher(
            ZH_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            doc,
        );
        sw.run();

        assert_eq!(sw.dom().text(methodology), "方法論");
        assert_eq!(
            sw.dom().attribute(methodology, "href").as_deref(),
            Some("./methodology/index.html")
        );

        assert_eq!(sw.dom().text(skills), "技能");
        assert_eq!(
            sw.dom().attribute(skills, "href").as_deref(),
            Some("./zh/skills/index.html")
        );

        assert_eq!(sw.dom().text(blog), "部落格");
        assert_eq!(
            sw.dom().attribute(blog, "href").as_deref(),
            Some("/cooperation.tw/zh/blog/index.html")
        );

        // Unmapped label keeps its text; its href is still rewritten
        assert_eq!(sw.dom().text(about), "About");
        assert_eq!(
            sw.dom().attribute(about, "href").as_deref(),
            Some("./about/index.html")
        );
    }

    #[test]
    fn zh_scoped_and_external_hrefs_are_untouched() {
        let mut doc = navbar_doc();
        let scoped = add_link(&mut doc, "Skills", Some("/cooperation.tw/zh/skills/index.html"), false);
        let external = add_link(&mut doc, "GitHub", Some("https://github.com/aico"), false);
        let bare = add_link(&mut doc, "Lab", None, false);

        let mut sw = switcher(
            ZH_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            doc,
        );
        sw.run();

        assert_eq!(
            sw.dom().attribute(scoped, "href").as_deref(),
            Some("/cooperation.tw/zh/skills/index.html")
        );
        assert_eq!(
            sw.dom().attribute(external, "href").as_deref(),
            Some("https://github.com/aico")
        );
        assert_eq!(sw.dom().attribute(bare, "href"), None);
    }

    #[test]
    fn en_page_navbar_is_untouched() {
        let mut doc = navbar_doc();
        let link = add_link(&mut doc, "Methodology", Some("./methodology/index.html"), false);

        let mut sw = switcher(EN_HOME, &["en-US"], MemoryPreferenceStore::new(), doc);
        sw.run();

        assert_eq!(sw.dom().text(link), "Methodology");
        assert_eq!(
            sw.dom().attribute(link, "href").as_deref(),
            Some("./methodology/index.html")
        );
    }

    #[test]
    fn localizer_leaves_the_toggle_href_alone() {
        let mut sw = switcher(
            ZH_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            navbar_doc(),
        );
        sw.run();

        // The toggle sits in the right-aligned navbar-nav list, so the
        // localizer walks over it; its English-root href must survive.
        let toggle = sw.dom().query(TOGGLE_SELECTOR).expect("toggle missing");
        assert_eq!(sw.dom().attribute(toggle, "href").as_deref(), Some(EN_HOME));
    }

    #[test]
    fn click_on_en_page_records_zh_and_navigates() {
        let mut sw = switcher(EN_HOME, &["en-US"], MemoryPreferenceStore::new(), navbar_doc());
        sw.run();
        sw.handle_toggle_click();

        assert_eq!(sw.store().load(), Some(Locale::Zh));
        assert_eq!(sw.page().navigations(), [ZH_HOME.to_string()]);
    }

    #[test]
    fn click_on_zh_page_records_en_and_navigates() {
        let mut sw = switcher(
            ZH_HOME,
            &["zh-TW"],
            MemoryPreferenceStore::with(Locale::Zh),
            navbar_doc(),
        );
        sw.run();
        sw.handle_toggle_click();

        assert_eq!(sw.store().load(), Some(Locale::En));
        assert_eq!(sw.page().navigations(), [EN_HOME.to_string()]);
    }
}
