//! i18n - Locale Classification and Navbar Translations
//!
//! Provides the two-value locale model, language-tag classification, and
//! the fixed English-to-Chinese navbar label table.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (site root)
    #[default]
    En,
    /// Traditional Chinese ("/zh/" subtree)
    Zh,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    /// Persisted form of the locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a persisted value. Anything but the two known literals is
    /// treated as no value.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::Zh),
            _ => None,
        }
    }

    /// The other locale
    pub fn opposite(&self) -> Locale {
        match self {
            Locale::En => Locale::Zh,
            Locale::Zh => Locale::En,
        }
    }
}

/// Classify a reported language tag.
///
/// Any tag whose lowercase form starts with "zh" selects the Chinese
/// subtree: "zh", "zh-TW", "zh-Hant", "zh-CN", "zh-HK" all match. The
/// site serves Traditional content to Simplified tags as well; that
/// conflation is intentional and must not be narrowed here.
pub fn classify_tag(tag: &str) -> Locale {
    if tag.to_lowercase().starts_with("zh") {
        Locale::Zh
    } else {
        Locale::En
    }
}

/// Resolve the visitor's locale from the environment's reported languages.
///
/// Uses the primary tag, falling back to the first entry of the
/// preference list, then to the empty string (which classifies as `En`).
pub fn detect(primary: Option<&str>, fallbacks: &[String]) -> Locale {
    let tag = primary
        .map(|s| s.to_string())
        .or_else(|| fallbacks.first().cloned())
        .unwrap_or_default();
    classify_tag(&tag)
}

/// Navbar label translations (English label -> Chinese label)
static NAV_LABELS: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn init_nav_labels() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();

    map.insert("Methodology", "方法論");
    map.insert("Framework", "架構");
    map.insert("Skills", "技能");
    map.insert("Lab", "Lab");
    map.insert("Service", "服務");
    map.insert("Blog", "部落格");

    map
}

fn nav_labels() -> &'static HashMap<&'static str, &'static str> {
    NAV_LABELS.get_or_init(init_nav_labels)
}

/// Translate a navbar label.
///
/// Returns `None` when the label has no entry; the caller leaves such
/// labels untouched.
pub fn nav_label_zh(label: &str) -> Option<&'static str> {
    nav_labels().get(label).copied()
}
