//! Convenient re-exports for common usage.
//!
//! ```
//! use pagination_kit::prelude::*;
//! ```

pub use crate::Aggregate;
pub use crate::ArgValue;
pub use crate::Connection;
pub use crate::ConcatPagination;
pub use crate::CursorPagination;
pub use crate::Edge;
pub use crate::FieldContext;
pub use crate::FieldPolicy;
pub use crate::FieldReader;
pub use crate::KeyArgs;
pub use crate::MemoryStore;
pub use crate::NodeRef;
pub use crate::OffsetLimitPagination;
pub use crate::Page;
pub use crate::PageInfo;
pub use crate::PageInfoUpdate;
pub use crate::PaginationArgs;
pub use crate::Reference;
