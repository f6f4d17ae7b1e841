//! Common types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Parse an identifier coming from a URL segment or form field.
pub fn parse_id(s: &str) -> Option<EntityId> {
    Uuid::parse_str(s.trim()).ok()
}

/// What happens to menu items when the category they reference is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Items keep their (now dangling) reference and display as uncategorized.
    #[default]
    Orphan,
    /// Deletion is refused while any item still references the category.
    Restrict,
    /// Referencing items are deleted together with the category.
    Cascade,
}

impl ReferencePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferencePolicy::Orphan => "orphan",
            ReferencePolicy::Restrict => "restrict",
            ReferencePolicy::Cascade => "cascade",
        }
    }
}

impl std::fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
