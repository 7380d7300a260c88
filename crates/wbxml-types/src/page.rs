//! WBXML code pages.

use crate::tags;
use crate::Tag;

/// An ActiveSync WBXML code page.
///
/// Only the pages the push layer writes are modelled. The discriminant is
/// the page number that goes on the wire in a `SWITCH_PAGE` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodePage {
    AirSync = 0,
    Contacts = 1,
    Email = 2,
    Calendar = 4,
    FolderHierarchy = 7,
}

impl CodePage {
    /// All modelled pages, in page-number order.
    pub const ALL: [CodePage; 5] = [
        CodePage::AirSync,
        CodePage::Contacts,
        CodePage::Email,
        CodePage::Calendar,
        CodePage::FolderHierarchy,
    ];

    /// Page number as written on the wire.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Resolve a page from its wire number.
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.number() == number)
    }

    /// XML namespace prefix used when a stream is rendered as text.
    pub fn namespace(self) -> &'static str {
        match self {
            CodePage::AirSync => "AirSync",
            CodePage::Contacts => "POOMCONTACTS",
            CodePage::Email => "POOMMAIL",
            CodePage::Calendar => "POOMCAL",
            CodePage::FolderHierarchy => "FolderHierarchy",
        }
    }

    /// Every known tag on this page.
    pub fn tags(self) -> &'static [Tag] {
        match self {
            CodePage::AirSync => tags::airsync::ALL,
            CodePage::Contacts => tags::contacts::ALL,
            CodePage::Email => tags::email::ALL,
            CodePage::Calendar => tags::calendar::ALL,
            CodePage::FolderHierarchy => tags::folder_hierarchy::ALL,
        }
    }
}

impl std::fmt::Display for CodePage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.namespace())
    }
}
