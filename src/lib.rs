//! Page indicators for paginated listings: an edge pager
//! (first/prev/curr/next/last) and a compact numbered page list that folds
//! runs of hidden pages into an ellipsis.
//!
//! ```
//! use rsweb_paginator::{PageEntry, Paginator};
//!
//! let paginator = Paginator::new(490, 20, 10).unwrap();
//! let pages = paginator.pages();
//! assert_eq!(pages.first(), Some(&PageEntry::Prev(Some(9))));
//! assert!(pages.contains(&PageEntry::Curr(10)));
//! ```

pub mod config;
pub mod error;
pub mod pagination;

pub use config::PaginatorConfig;
pub use error::{PaginationError, Result};
pub use pagination::{EdgePager, PageEntry, PageQuery, Paginator};
