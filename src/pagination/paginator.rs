use super::entry::PageEntry;
use super::pager::EdgePager;
use crate::config::{PaginatorConfig, DEFAULT_ADJACENTS};
use crate::error::{coerce, PaginationError, Result};
use serde::Serialize;
use tracing::{debug, trace};

pub const FIRST_PAGE: u64 = 1;

/// Page numbers derived from a total item count, a page size and the
/// requested page.
///
/// Every mutator re-derives the dependent fields, so reads never observe a
/// stale `last_page` or `item_offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    total_items: u64,
    item_limit: u64,
    current_page: u64,
    first_page: u64,
    last_page: u64,
    prev_page: u64,
    next_page: u64,
    item_offset: u64,
    #[serde(skip)]
    adjacents: u64,
}

impl Paginator {
    /// `current_page` outside `1..=last_page` is normalized to the first page.
    pub fn new(total_items: u64, item_limit: u64, current_page: i64) -> Result<Self> {
        if item_limit == 0 {
            return Err(PaginationError::new_zero_item_limit());
        }
        let mut slf = Self {
            total_items,
            item_limit,
            current_page: FIRST_PAGE,
            first_page: FIRST_PAGE,
            last_page: 0,
            prev_page: 0,
            next_page: 0,
            item_offset: 0,
            adjacents: DEFAULT_ADJACENTS,
        };
        slf.recompute(current_page);
        Ok(slf)
    }

    pub fn with_config(total_items: u64, current_page: i64, config: &PaginatorConfig) -> Result<Self> {
        Ok(Self::new(total_items, config.item_limit, current_page)?.with_adjacents(config.adjacents))
    }

    /// Build from raw, untyped input such as query string values.
    pub fn parse(total_items: &str, item_limit: &str, current_page: &str) -> Result<Self> {
        Self::new(
            coerce("total_items", total_items)?,
            coerce("item_limit", item_limit)?,
            coerce("current_page", current_page)?,
        )
    }

    /// Adjacents used by [`Paginator::pages`].
    pub fn with_adjacents(mut self, adjacents: u64) -> Self {
        self.adjacents = adjacents;
        self
    }

    fn recompute(&mut self, requested_page: i64) {
        self.last_page = self.total_items.div_ceil(self.item_limit);
        self.current_page = match u64::try_from(requested_page) {
            Ok(page) if (FIRST_PAGE..=self.last_page).contains(&page) => page,
            _ => {
                debug!(
                    requested_page = requested_page,
                    last_page = self.last_page,
                    "current page out of range, normalized to first page"
                );
                FIRST_PAGE
            }
        };
        self.prev_page = self.current_page - 1;
        self.next_page = self.current_page + 1;
        self.item_offset = self.prev_page * self.item_limit;
        debug!(
            total_items = self.total_items,
            item_limit = self.item_limit,
            current_page = self.current_page,
            last_page = self.last_page,
            "page numbers derived"
        );
    }

    pub fn set_current_page(&mut self, current_page: i64) {
        self.recompute(current_page);
    }

    /// Fails without touching the paginator when `item_limit` is zero.
    pub fn set_item_limit(&mut self, item_limit: u64) -> Result<()> {
        if item_limit == 0 {
            return Err(PaginationError::new_zero_item_limit());
        }
        self.item_limit = item_limit;
        self.recompute(i64::try_from(self.current_page).unwrap_or(i64::MAX));
        Ok(())
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn item_limit(&self) -> u64 {
        self.item_limit
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn first_page(&self) -> u64 {
        self.first_page
    }

    pub fn last_page(&self) -> u64 {
        self.last_page
    }

    pub fn total_pages(&self) -> u64 {
        self.last_page
    }

    pub fn prev_page(&self) -> u64 {
        self.prev_page
    }

    pub fn next_page(&self) -> u64 {
        self.next_page
    }

    pub fn item_offset(&self) -> u64 {
        self.item_offset
    }

    pub fn adjacents(&self) -> u64 {
        self.adjacents
    }

    pub fn has_pages(&self) -> bool {
        self.last_page > self.first_page
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > self.first_page
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }

    /// `None` when everything fits on a single page.
    pub fn pager(&self) -> Option<EdgePager> {
        if !self.has_pages() {
            return None;
        }
        Some(EdgePager {
            first: self.first_page,
            prev: self.has_prev().then_some(self.prev_page),
            curr: self.current_page,
            next: self.has_next().then_some(self.next_page),
            last: self.last_page,
        })
    }

    pub fn pages(&self) -> Vec<PageEntry> {
        self.pages_with(self.adjacents)
    }

    /// Compact page list with ellipses, framed by prev/next entries.
    ///
    /// `adjacents` of zero means the default of one.
    pub fn pages_with(&self, adjacents: u64) -> Vec<PageEntry> {
        let mut pages = Vec::new();
        if !self.has_pages() {
            return pages;
        }
        let adjacents = if adjacents == 0 {
            DEFAULT_ADJACENTS
        } else {
            adjacents
        };
        let adj_count = adjacents.saturating_mul(2);
        let current = self.current_page;
        let last = self.last_page;
        let second_last = last - 1;

        pages.push(PageEntry::Prev(self.has_prev().then_some(self.prev_page)));

        if last < adj_count.saturating_add(7) {
            // not enough pages to hide anything
            trace!(adjacents = adjacents, last_page = last, "no-hide layout");
            self.push_range(&mut pages, 1, last + 1);
        } else if last >= adj_count.saturating_add(5) {
            if current < adj_count + 1 {
                trace!(adjacents = adjacents, current_page = current, "near start layout");
                self.push_range(&mut pages, 1, adj_count + 4);
                pages.push(PageEntry::Ellipsis);
                pages.push(PageEntry::Page(second_last));
                pages.push(PageEntry::Page(last));
            } else if last - adj_count > current && current > adj_count {
                trace!(adjacents = adjacents, current_page = current, "middle layout");
                pages.push(PageEntry::Page(1));
                pages.push(PageEntry::Page(2));
                pages.push(PageEntry::Ellipsis);
                self.push_range(&mut pages, current - adjacents, current + adjacents + 1);
                pages.push(PageEntry::Ellipsis);
                pages.push(PageEntry::Page(second_last));
                pages.push(PageEntry::Page(last));
            } else {
                trace!(adjacents = adjacents, current_page = current, "near end layout");
                pages.push(PageEntry::Page(1));
                pages.push(PageEntry::Page(2));
                pages.push(PageEntry::Ellipsis);
                // floored at page 1 for huge adjacents; pages 1 and 2 then repeat
                // after the ellipsis
                let start = last
                    .saturating_sub(adjacents.saturating_mul(3).saturating_add(1))
                    .max(FIRST_PAGE);
                self.push_range(&mut pages, start, last + 1);
            }
        }

        pages.push(PageEntry::Next(self.has_next().then_some(self.next_page)));
        pages
    }

    fn push_range(&self, pages: &mut Vec<PageEntry>, start: u64, stop: u64) {
        pages.extend((start..stop).map(|page| PageEntry::numbered(page, self.current_page)));
    }
}
