//! Types for deciding which page links a paginated view shows.
//!
//! A [`Window`] turns a page count and the page being viewed into a list of
//! [`PageEntry`] values, with fillers standing in for skipped page numbers:
//!
//! ```
//! use pagination::{MaxDistance, Window};
//!
//! let entries = Window::new(MaxDistance::default(), false)
//!   .entries(99, 30)
//!   .unwrap();
//!
//! let rendered = entries
//!   .iter()
//!   .map(|entry| entry.to_string())
//!   .collect::<Vec<String>>()
//!   .join(" ");
//!
//! assert_eq!(rendered, "1 … 29 30 31 … 99");
//! ```

use {
  derive_more::Display,
  serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer},
  std::{
    fmt::{self, Formatter},
    num::NonZeroU32,
    str::FromStr,
  },
  thiserror::Error,
};

pub use {
  entry::PageEntry,
  max_distance::MaxDistance,
  paginator::{Page, Paginator},
  window::{compute, Window},
};

mod entry;
mod max_distance;
mod paginator;
mod window;

#[derive(Debug, PartialEq, Error)]
pub enum Error {
  #[error("total page count must be at least 1")]
  TotalPages,
  #[error("page {current} is outside of 1..={total}")]
  CurrentPage { current: u32, total: u32 },
  #[error("PAGINATIONPLUS_MAX_DISTANCE must be a number greater than 0")]
  MaxDistance,
  #[error("page size must be at least 1")]
  PerPage,
  #[error("{count} items in pages of {per_page} is more than {} pages", u32::MAX)]
  TooManyPages { count: u64, per_page: u32 },
  #[error("that page number is less than 1")]
  PageBelowOne,
  #[error("that page contains no results")]
  EmptyPage,
}
