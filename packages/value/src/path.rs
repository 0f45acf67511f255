//! Slash-separated paths into a tree.

use std::fmt;

/// A location inside a [`Value`](crate::Value) tree.
///
/// Components are map keys or decimal array indexes. Unlike record
/// diagnostics, paths are meant for programmatic navigation, so any key
/// that does not contain `/` is accepted.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// Parse a path string.
    ///
    /// Empty components are ignored, so `a//b/` and `a/b` are the same path.
    ///
    /// ```rust
    /// use recordtree_value::Path;
    ///
    /// let path = Path::parse("vecObj/1/v");
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(Path::parse("a//b/"), Path::parse("a/b"));
    /// ```
    pub fn parse(s: &str) -> Self {
        Path {
            components: s
                .split('/')
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Create a path from already split components.
    pub fn from_components(components: Vec<String>) -> Self {
        Path { components }
    }

    /// The empty path, which addresses the root.
    pub fn root() -> Self {
        Path::default()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// Append one component, returning the extended path.
    pub fn join(&self, component: impl Into<String>) -> Self {
        let mut components = self.components.clone();
        components.push(component.into());
        Path { components }
    }

    /// The path without its last component, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        Some(Path {
            components: self.components[..self.len() - 1].to_vec(),
        })
    }

    /// The last component, or `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

/// Build a [`Path`] from a literal.
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s)
    };
}
