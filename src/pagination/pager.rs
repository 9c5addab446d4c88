use serde::{Deserialize, Serialize};

/// Edge pager for simple prev/next navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct EdgePager {
    pub first: u64,
    pub prev: Option<u64>,
    pub curr: u64,
    pub next: Option<u64>,
    pub last: u64,
}
