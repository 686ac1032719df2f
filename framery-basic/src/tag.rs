use core::{fmt, ops::Deref};

use alloc::string::String;

/// String axis name.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tag {
    raw: String,
}
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Tag {
    /// Create a tag from its name.
    pub fn from_raw(raw: String) -> Self {
        Self { raw }
    }
    /// The name.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl Deref for Tag {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.raw
    }
}

impl From<&str> for Tag {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw.into())
    }
}
impl From<String> for Tag {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}
