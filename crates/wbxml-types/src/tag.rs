//! A single WBXML element identifier.

use crate::CodePage;

/// Identifies one element of the tag stream.
///
/// Two tags are equal when page and token match; `name` is carried along
/// for logs and rendered output only.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Tag {
    pub page: CodePage,
    pub token: u8,
    pub name: &'static str,
}

impl Tag {
    pub const fn new(page: CodePage, token: u8, name: &'static str) -> Self {
        Self { page, token, name }
    }

    /// Find a known tag by page and token.
    pub fn lookup(page: CodePage, token: u8) -> Option<Tag> {
        page.tags().iter().copied().find(|tag| tag.token == token)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.page == other.page && self.token == other.token
    }
}

impl std::hash::Hash for Tag {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.page.hash(state);
        self.token.hash(state);
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.page.namespace(), self.name)
    }
}
