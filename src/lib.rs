//! # pagination-kit
//!
//! Merge and read policies for paginated list fields in normalized client
//! caches.
//!
//! A normalized cache keeps one value per field. When a paginated field is
//! fetched again with different arguments (a new cursor, a new offset), the
//! field's policy decides how the new page combines with the value already
//! stored, and how the stored value is presented back to readers.
//!
//! ## `no_std` Support
//!
//! This crate supports `no_std` environments with the `alloc` crate.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pagination-kit = { version = "0.1", default-features = false }
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pagination_kit::prelude::*;
//!
//! let store = MemoryStore::<&str>::new();
//! let policy = CursorPagination::<&str, u64>::new();
//! let cx = FieldContext::<&str>::new(&store);
//!
//! let page = Page::new(vec![Edge::new("c1", "first"), Edge::new("c2", "second")])
//!     .with_extra("totalCount", 40);
//! let stored = policy.merge(None, page, &cx);
//!
//! let view = policy.read(Some(&stored), &cx).unwrap();
//! assert_eq!(view.page_info.end_cursor, "c2");
//! assert_eq!(view.extras.get("totalCount"), Some(&40));
//! ```
//!
//! ## Available Policies
//!
//! - [`ConcatPagination`] - Append every page to the stored list
//! - [`OffsetLimitPagination`] - Write every page at its `offset`
//! - [`CursorPagination`] - Splice Relay-style pages around `after`/`before`
//!   anchors
//!
//! ## The `FieldPolicy` Trait
//!
//! All policies implement the [`FieldPolicy`] trait, which provides
//! [`FieldPolicy::merge`] and [`FieldPolicy::read`]. Both are pure: the host
//! cache owns the stored value and persists whatever `merge` returns.
//! Everything the policies need from the host store comes in through the
//! [`FieldReader`] carried by a [`FieldContext`].

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod args;
mod concat;
mod cursor;
mod edge;
mod memory;
mod offset;
mod page;
mod page_info;
mod policy;
mod reference;

pub mod extras;
pub mod prelude;

pub use args::{ArgValue, ArgsError, PaginationArgs};
pub use concat::ConcatPagination;
pub use cursor::CursorPagination;
pub use edge::{Edge, EdgeWrapper};
pub use extras::Extras;
pub use memory::MemoryStore;
pub use offset::OffsetLimitPagination;
pub use page::{Aggregate, Connection, Page};
pub use page_info::{PageInfo, PageInfoUpdate};
pub use policy::{FieldContext, FieldPolicy, KeyArgs};
pub use reference::{FieldReader, FieldValue, NodeRef, Reference};
