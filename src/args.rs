//! Pagination arguments passed with a field fetch.
//!
//! Only `after`, `before` and `offset` mean anything to the strategies.
//! Every other argument is carried in [`PaginationArgs::other`] so that a
//! host can keep one value for the whole argument set.

use alloc::string::String;
use core::fmt;

use crate::extras::Extras;

/// A raw argument value as received from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ArgValue {
    /// Explicit null; treated as an absent argument.
    Null,
    /// A boolean argument.
    Bool(bool),
    /// An integer argument.
    Int(i64),
    /// A string argument.
    String(String),
}

/// Arguments of a paginated field fetch.
///
/// # Example
///
/// ```
/// use pagination_kit::prelude::*;
///
/// let args = PaginationArgs::new().after("c2").with_arg("first", ArgValue::Int(10));
/// assert_eq!(args.after.as_deref(), Some("c2"));
/// assert_eq!(args.before, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationArgs {
    /// Forward anchor: fetch the page following this cursor.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub after: Option<String>,
    /// Backward anchor: fetch the page preceding this cursor.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub before: Option<String>,
    /// Position of the first fetched item, for offset pagination.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub offset: Option<usize>,
    /// All other arguments, uninterpreted.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub other: Extras<ArgValue>,
}

impl PaginationArgs {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forward anchor.
    #[must_use]
    pub fn after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the backward anchor.
    #[must_use]
    pub fn before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the offset.
    #[must_use]
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add an uninterpreted argument.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: ArgValue) -> Self {
        self.other.insert(name.into(), value);
        self
    }

    /// The forward anchor, ignoring empty strings.
    #[must_use]
    pub fn after_cursor(&self) -> Option<&str> {
        self.after.as_deref().filter(|c| !c.is_empty())
    }

    /// The backward anchor, ignoring empty strings.
    #[must_use]
    pub fn before_cursor(&self) -> Option<&str> {
        self.before.as_deref().filter(|c| !c.is_empty())
    }
}

/// Error converting a raw argument map into [`PaginationArgs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    /// A cursor argument held something other than a string.
    NotAString(String),
    /// The offset argument held something other than an integer.
    NotAnInteger(String),
    /// The offset argument was negative.
    NegativeOffset(i64),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAString(name) => write!(f, "argument `{name}` must be a string"),
            Self::NotAnInteger(name) => write!(f, "argument `{name}` must be an integer"),
            Self::NegativeOffset(n) => write!(f, "offset must not be negative, got {n}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgsError {}

impl TryFrom<&Extras<ArgValue>> for PaginationArgs {
    type Error = ArgsError;

    fn try_from(raw: &Extras<ArgValue>) -> Result<Self, Self::Error> {
        let mut args = Self::new();
        for (name, value) in raw {
            match (name.as_str(), value) {
                (_, ArgValue::Null) => {}
                ("after", ArgValue::String(c)) => args.after = Some(c.clone()),
                ("before", ArgValue::String(c)) => args.before = Some(c.clone()),
                ("after" | "before", _) => return Err(ArgsError::NotAString(name.clone())),
                ("offset", ArgValue::Int(n)) => {
                    let offset = usize::try_from(*n).map_err(|_| ArgsError::NegativeOffset(*n))?;
                    args.offset = Some(offset);
                }
                ("offset", _) => return Err(ArgsError::NotAnInteger(name.clone())),
                _ => {
                    args.other.insert(name.clone(), value.clone());
                }
            }
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn raw(pairs: &[(&str, ArgValue)]) -> Extras<ArgValue> {
        pairs
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect()
    }

    #[test]
    fn builder_sets_fields() {
        let args = PaginationArgs::new().before("c9").offset(4);
        assert_eq!(args.before_cursor(), Some("c9"));
        assert_eq!(args.offset, Some(4));
        assert_eq!(args.after_cursor(), None);
    }

    #[test]
    fn empty_anchor_is_ignored() {
        let args = PaginationArgs::new().after("");
        assert_eq!(args.after_cursor(), None);
    }

    #[test]
    fn converts_raw_map() {
        let map = raw(&[
            ("after", ArgValue::String("c1".into())),
            ("offset", ArgValue::Int(20)),
            ("first", ArgValue::Int(10)),
            ("before", ArgValue::Null),
        ]);
        let args = PaginationArgs::try_from(&map).unwrap();

        assert_eq!(args.after.as_deref(), Some("c1"));
        assert_eq!(args.before, None);
        assert_eq!(args.offset, Some(20));
        assert_eq!(args.other.get("first"), Some(&ArgValue::Int(10)));
    }

    #[test]
    fn rejects_non_string_cursor() {
        let map = raw(&[("before", ArgValue::Int(3))]);
        assert_eq!(
            PaginationArgs::try_from(&map),
            Err(ArgsError::NotAString("before".into()))
        );
    }

    #[test]
    fn rejects_bad_offset() {
        let negative = raw(&[("offset", ArgValue::Int(-1))]);
        assert_eq!(
            PaginationArgs::try_from(&negative),
            Err(ArgsError::NegativeOffset(-1))
        );

        let text = raw(&[("offset", ArgValue::String("5".into()))]);
        assert_eq!(
            PaginationArgs::try_from(&text),
            Err(ArgsError::NotAnInteger("offset".into()))
        );
    }

    #[test]
    fn error_messages() {
        let err = ArgsError::NegativeOffset(-2);
        assert_eq!(err.to_string(), "offset must not be negative, got -2");
    }
}
