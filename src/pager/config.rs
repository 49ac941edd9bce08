use serde::Deserialize;

/// Long form (aria-label, title) and short form (visible text) of a jump link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Label {
    pub text: String,
    pub short: String,
}

impl Label {
    pub fn new(text: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            short: short.into(),
        }
    }
}

/// Construction-time settings of a [`Paginator`](super::Paginator).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaginatorConfig {
    /// Prefix a page number is appended to, e.g. `?page=`.
    pub link_base: String,
    /// Word prefixed to the page number in aria-label and title.
    pub title: String,
    pub first: Label,
    pub last: Label,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            link_base: "?page=".into(),
            title: "Page".into(),
            first: Label::new("First page", "<<"),
            last: Label::new("Last page", ">>"),
        }
    }
}

impl PaginatorConfig {
    /// Query key the page number is appended to, e.g. `p` for `/items?p=`.
    ///
    /// `None` when the link base does not end in `key=`.
    pub fn page_key(&self) -> Option<&str> {
        let base = self.link_base.strip_suffix('=')?;
        let key = base.rsplit(['?', '&']).next()?;
        (!key.is_empty() && key.len() < base.len()).then_some(key)
    }

    pub fn with_link_base(mut self, link_base: impl Into<String>) -> Self {
        self.link_base = link_base.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_first(mut self, first: Label) -> Self {
        self.first = first;
        self
    }

    pub fn with_last(mut self, last: Label) -> Self {
        self.last = last;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PaginatorConfig =
            serde_json::from_str(r#"{ "title": "Página", "first": { "text": "Primeira página", "short": "«" } }"#)
                .unwrap();

        assert_eq!(config.link_base, "?page=");
        assert_eq!(config.title, "Página");
        assert_eq!(config.first, Label::new("Primeira página", "«"));
        assert_eq!(config.last, Label::new("Last page", ">>"));
    }

    #[test]
    fn page_key_comes_from_link_base() {
        let key = |base: &str| {
            PaginatorConfig::default()
                .with_link_base(base)
                .page_key()
                .map(str::to_owned)
        };

        assert_eq!(key("?page="), Some("page".into()));
        assert_eq!(key("/items?p="), Some("p".into()));
        assert_eq!(key("/items?sort=name&pg="), Some("pg".into()));
        assert_eq!(key("/items/page/"), None);
        assert_eq!(key("/items?="), None);
        assert_eq!(key("page="), None);
    }
}
