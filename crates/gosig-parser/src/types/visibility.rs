use serde::{Deserialize, Serialize};

/// Go visibility: exported names start with an uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    /// Classify a Go identifier by its first character.
    #[must_use]
    pub fn of(name: &str) -> Self {
        if name.starts_with(char::is_uppercase) {
            Self::Public
        } else {
            Self::Private
        }
    }

    #[must_use]
    pub const fn is_exported(self) -> bool {
        matches!(self, Self::Public)
    }
}
