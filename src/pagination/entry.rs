use serde::{Deserialize, Serialize};
use std::fmt;

pub const ELLIPSIS: &str = "...";

/// One indicator in a compact page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "lowercase")]
pub enum PageEntry {
    /// link to the previous page, absent on the first page
    Prev(Option<u64>),
    /// link to the next page, absent on the last page
    Next(Option<u64>),
    Page(u64),
    Curr(u64),
    #[serde(rename = "ellip")]
    Ellipsis,
}

impl PageEntry {
    pub(crate) fn numbered(page: u64, current_page: u64) -> Self {
        if page == current_page {
            Self::Curr(page)
        } else {
            Self::Page(page)
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Prev(_) => "prev",
            Self::Next(_) => "next",
            Self::Page(_) => "page",
            Self::Curr(_) => "curr",
            Self::Ellipsis => "ellip",
        }
    }

    pub fn page(&self) -> Option<u64> {
        match *self {
            Self::Prev(page) | Self::Next(page) => page,
            Self::Page(page) | Self::Curr(page) => Some(page),
            Self::Ellipsis => None,
        }
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Curr(_))
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ellipsis => f.write_str(ELLIPSIS),
            _ => match self.page() {
                Some(page) => write!(f, "{}", page),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        assert_eq!(PageEntry::Prev(None).kind(), "prev");
        assert_eq!(PageEntry::Prev(None).page(), None);
        assert_eq!(PageEntry::Next(Some(3)).page(), Some(3));
        assert_eq!(PageEntry::Ellipsis.kind(), "ellip");
        assert!(PageEntry::numbered(4, 4).is_current());
        assert_eq!(PageEntry::numbered(5, 4), PageEntry::Page(5));
    }

    #[test]
    fn test_display() {
        assert_eq!(PageEntry::Curr(10).to_string(), "10");
        assert_eq!(PageEntry::Ellipsis.to_string(), "...");
        assert_eq!(PageEntry::Prev(None).to_string(), "");
    }

    #[test]
    fn test_serialize() {
        let entries = vec![
            PageEntry::Prev(None),
            PageEntry::Curr(1),
            PageEntry::Ellipsis,
            PageEntry::Next(Some(2)),
        ];
        assert_eq!(
            serde_json::to_value(&entries).unwrap(),
            json!([
                {"kind": "prev", "page": null},
                {"kind": "curr", "page": 1},
                {"kind": "ellip"},
                {"kind": "next", "page": 2},
            ])
        );
        // no payload key for the ellipsis
        assert!(serde_json::to_value(PageEntry::Ellipsis)
            .unwrap()
            .get("page")
            .is_none());
        let parsed: PageEntry = serde_json::from_str(r#"{"kind":"page","page":7}"#).unwrap();
        assert_eq!(parsed, PageEntry::Page(7));
    }
}
