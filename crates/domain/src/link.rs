use serde::{Deserialize, Serialize};

/// Navigation descriptor rendered next to an activity entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    title: String,
    path: String,
    external: bool,
}

impl Link {
    /// Creates a link to a view inside the application.
    #[must_use]
    pub fn internal(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            external: false,
        }
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Returns the relative navigation path.
    #[must_use]
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// Returns whether the link leaves the application.
    #[must_use]
    pub fn external(&self) -> bool {
        self.external
    }
}
