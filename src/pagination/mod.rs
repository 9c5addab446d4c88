pub mod entry;
pub mod pager;
pub mod paginator;
pub mod query;

pub use entry::PageEntry;
pub use pager::EdgePager;
pub use paginator::{Paginator, FIRST_PAGE};
pub use query::{PageQuery, MAXIMUM_PAGE_SIZE};
