use super::paginator::Paginator;
use crate::config::{PaginatorConfig, DEFAULT_ITEM_LIMIT};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub const MAXIMUM_PAGE_SIZE: u64 = 50;

/// Paging parameters as they arrive from a request.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PageQuery {
    #[serde(rename = "pageNum", default = "default_page_num")]
    #[validate(range(min = 1, max = 65535))]
    pub page_num: u64,
    #[validate(range(min = 1, max = MAXIMUM_PAGE_SIZE))]
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: u64,
}

fn default_page_num() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_ITEM_LIMIT
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: default_page_num(),
            page_size: default_page_size(),
        }
    }
}

impl PageQuery {
    pub fn offset(&self) -> u64 {
        self.page_num.saturating_sub(1) * self.page_size
    }

    /// Validate the query and lay it over `total_items`.
    pub fn paginate(&self, total_items: u64, config: &PaginatorConfig) -> Result<Paginator> {
        self.validate()?;
        // validated above, page_num fits in i64
        let paginator = Paginator::new(total_items, self.page_size, self.page_num as i64)?;
        Ok(paginator.with_adjacents(config.adjacents))
    }
}
