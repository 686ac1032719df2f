use core::fmt;

use alloc::string::String;
use framery_core::{axis::Axis, error::DuplicateLabel};

/// A label value of one of the common label kinds: signed integer, unsigned size, character or string.
///
/// Labels of different kinds never compare equal. They are ordered by kind first (in the order above), then by
/// value, so an axis may mix kinds.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Label {
    /// Signed integer label.
    Int(i64),
    /// Unsigned size label.
    Size(usize),
    /// Character label.
    Char(char),
    /// String label.
    Str(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Label::Int(v) => write!(f, "{}", v),
            Label::Size(v) => write!(f, "{}", v),
            Label::Char(v) => write!(f, "{}", v),
            Label::Str(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}
impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Label::Int(v.into())
    }
}
impl From<usize> for Label {
    fn from(v: usize) -> Self {
        Label::Size(v)
    }
}
impl From<char> for Label {
    fn from(v: char) -> Self {
        Label::Char(v)
    }
}
impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Str(v)
    }
}
impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Str(v.into())
    }
}

/// Builds an [`Axis`] of [`Label`]s from anything convertible to a label.
pub fn label_axis<T: Into<Label>>(labels: impl IntoIterator<Item = T>) -> Result<Axis<Label>, DuplicateLabel<Label>> {
    Axis::from_labels(labels.into_iter().map(Into::into))
}
