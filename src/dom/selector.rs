//! Selector - Minimal CSS Selector Subset
//!
//! Compound selectors (tag name plus classes) joined by descendant
//! combinators, which covers every selector the switcher consumes.
//! Parsing is total; tokens using unsupported syntax simply fail to
//! match anything.

/// One segment of a descendant selector: optional tag plus classes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(token: &str) -> Self {
        let mut tag = None;
        let mut classes = Vec::new();

        for (i, piece) in token.split('.').enumerate() {
            if i == 0 {
                if !piece.is_empty() {
                    tag = Some(piece.to_string());
                }
            } else if !piece.is_empty() {
                classes.push(piece.to_string());
            }
        }

        Self { tag, classes }
    }

    /// Required tag name, if the compound constrains one
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Required classes
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Parsed descendant selector (e.g. ".navbar-collapse .navbar-nav.ms-auto")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    parts: Vec<Compound>,
}

impl Selector {
    /// Parse a whitespace-separated descendant selector
    pub fn parse(input: &str) -> Self {
        Self {
            parts: input.split_whitespace().map(Compound::parse).collect(),
        }
    }

    /// The compounds, outermost ancestor first
    pub fn parts(&self) -> &[Compound] {
        &self.parts
    }

    /// Whether the selector has no compounds (matches nothing)
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_only_compound() {
        let sel = Selector::parse(".lang-toggle");
        assert_eq!(sel.parts().len(), 1);
        assert_eq!(sel.parts()[0].tag(), None);
        assert_eq!(sel.parts()[0].classes(), ["lang-toggle".to_string()]);
    }

    #[test]
    fn parses_tag_with_classes() {
        let sel = Selector::parse("ul.navbar-nav.ms-auto");
        assert_eq!(sel.parts()[0].tag(), Some("ul"));
        assert_eq!(
            sel.parts()[0].classes(),
            ["navbar-nav".to_string(), "ms-auto".to_string()]
        );
    }

    #[test]
    fn parses_descendant_chain() {
        let sel = Selector::parse(".navbar-collapse .navbar-nav.ms-auto");
        assert_eq!(sel.parts().len(), 2);
        assert_eq!(sel.parts()[0].classes(), ["navbar-collapse".to_string()]);
        assert_eq!(
            sel.parts()[1].classes(),
            ["navbar-nav".to_string(), "ms-auto".to_string()]
        );
    }

    #[test]
    fn empty_input_is_empty_selector() {
        assert!(Selector::parse("").is_empty());
        assert!(Selector::parse("   ").is_empty());
    }
}
