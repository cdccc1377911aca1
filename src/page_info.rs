use alloc::string::String;

use crate::extras::{overlay, strip_reserved, Extras, PAGE_INFO_KEYS};

/// Boundary metadata of a paginated window.
///
/// Cursors use the empty string for "no cursor", matching what servers send
/// for an empty window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageInfo<X> {
    /// More items exist before the window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_previous_page: bool,
    /// More items exist after the window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_next_page: bool,
    /// Cursor of the first item in the window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start_cursor: String,
    /// Cursor of the last item in the window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end_cursor: String,
    /// Any other keys of the page-info block.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: Extras<X>,
}

impl<X> PageInfo<X> {
    /// Create page info with the given flags and no cursors.
    pub fn new(has_previous_page: bool, has_next_page: bool) -> Self {
        Self {
            has_previous_page,
            has_next_page,
            start_cursor: String::new(),
            end_cursor: String::new(),
            extras: Extras::new(),
        }
    }

    /// Page info of a window nothing has been fetched into yet.
    ///
    /// Nothing is known to precede it and more is assumed to follow.
    pub fn initial() -> Self {
        Self::new(false, true)
    }

    /// Set the boundary cursors.
    #[must_use]
    pub fn with_cursors(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_cursor = start.into();
        self.end_cursor = end.into();
        self
    }

    /// Add an extra key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: X) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Returns the start cursor, or `None` if it is empty.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        Some(self.start_cursor.as_str()).filter(|c| !c.is_empty())
    }

    /// Returns the end cursor, or `None` if it is empty.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        Some(self.end_cursor.as_str()).filter(|c| !c.is_empty())
    }
}

impl<X: Clone> PageInfo<X> {
    /// Let `incoming`'s extra keys fill gaps; keys already present here win.
    pub(crate) fn absorb_extras(&mut self, incoming: &Extras<X>) {
        let stored = core::mem::take(&mut self.extras);
        self.extras = overlay(
            strip_reserved(incoming, &PAGE_INFO_KEYS),
            strip_reserved(&stored, &PAGE_INFO_KEYS),
        );
    }
}

/// Page-info block as delivered with a fetched page.
///
/// Every field is optional: a server may omit any of them, and an omitted
/// flag leaves the stored flag alone instead of resetting it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageInfoUpdate<X> {
    /// More items exist before the page, if the server said so.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub has_previous_page: Option<bool>,
    /// More items exist after the page, if the server said so.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub has_next_page: Option<bool>,
    /// Cursor of the first item in the page.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub start_cursor: Option<String>,
    /// Cursor of the last item in the page.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub end_cursor: Option<String>,
    /// Any other keys of the page-info block.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub extras: Extras<X>,
}

impl<X> PageInfoUpdate<X> {
    /// Create an update that carries nothing.
    pub fn new() -> Self {
        Self {
            has_previous_page: None,
            has_next_page: None,
            start_cursor: None,
            end_cursor: None,
            extras: Extras::new(),
        }
    }

    /// Set the previous-page flag.
    #[must_use]
    pub fn with_previous(mut self, has_previous_page: bool) -> Self {
        self.has_previous_page = Some(has_previous_page);
        self
    }

    /// Set the next-page flag.
    #[must_use]
    pub fn with_next(mut self, has_next_page: bool) -> Self {
        self.has_next_page = Some(has_next_page);
        self
    }

    /// Set the boundary cursors.
    #[must_use]
    pub fn with_cursors(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_cursor = Some(start.into());
        self.end_cursor = Some(end.into());
        self
    }

    /// Add an extra key.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: X) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Returns the start cursor, or `None` if it is missing or empty.
    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.start_cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Returns the end cursor, or `None` if it is missing or empty.
    #[must_use]
    pub fn end(&self) -> Option<&str> {
        self.end_cursor.as_deref().filter(|c| !c.is_empty())
    }
}

impl<X> Default for PageInfoUpdate<X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X> From<PageInfo<X>> for PageInfoUpdate<X> {
    fn from(info: PageInfo<X>) -> Self {
        Self {
            has_previous_page: Some(info.has_previous_page),
            has_next_page: Some(info.has_next_page),
            start_cursor: Some(info.start_cursor),
            end_cursor: Some(info.end_cursor),
            extras: info.extras,
        }
    }
}
