//! Engine Constants
//!
//! Centralized fixed strings: the persisted preference key, the deployed
//! site base, and the navbar contract the switcher consumes.

/// Key under which the visitor's language preference is persisted
pub const PREFERENCE_KEY: &str = "aico-lang";

/// Path prefix identifying the deployed site root
pub const SITE_BASE: &str = "/cooperation.tw/";

/// Path segment marking the Chinese subtree
pub const ZH_SEGMENT: &str = "/zh/";

/// Right-aligned navbar list the toggle is prepended to
pub const NAV_RIGHT_LIST_SELECTOR: &str = ".navbar-collapse .navbar-nav.ms-auto";

/// Fallback containers when the right-aligned list is absent, in order
pub const NAV_CONTAINER_SELECTORS: [&str; 2] = [".navbar .container-fluid", ".navbar .container"];

/// Anchors the zh localizer rewrites
pub const NAV_LINK_SELECTOR: &str = ".navbar-nav .nav-link";

/// Optional nested element carrying a link's visible label
pub const MENU_TEXT_SELECTOR: &str = ".menu-text";

/// Marker class on the injected toggle control
pub const TOGGLE_CLASS: &str = "lang-toggle";

/// Selector form of the toggle marker, used by the idempotency guard
pub const TOGGLE_SELECTOR: &str = ".lang-toggle";

/// Inline style carried by the toggle control
pub const TOGGLE_STYLE: &str = "cursor:pointer; font-weight:600; padding:0.25rem 0.75rem; \
     border:1px solid rgba(255,255,255,0.3); border-radius:4px; \
     margin-left:0.5rem; font-size:0.85rem; color:#F4F6F8; \
     text-decoration:none; white-space:nowrap;";

/// Toggle label and tooltip shown on zh pages (switches back to English)
pub const TOGGLE_LABEL_TO_EN: &str = "EN";
pub const TOGGLE_TITLE_TO_EN: &str = "Switch to English";

/// Toggle label and tooltip shown on English pages (switches to Chinese)
pub const TOGGLE_LABEL_TO_ZH: &str = "中文";
pub const TOGGLE_TITLE_TO_ZH: &str = "切換為中文";

/// Site configuration file name inside the platform config directory
pub const CONFIG_FILE: &str = "aico-switcher.toml";

/// Preference file name inside the platform config directory
pub const PREFERENCES_FILE: &str = "preferences.toml";
