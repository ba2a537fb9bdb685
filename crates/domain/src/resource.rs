//! Resource kinds the dashboard can delete through the REST API.

use std::fmt;

/// A deletable backend collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Device,
    Schedule,
    User,
}

impl ResourceKind {
    /// URL path segment of the collection (`/api/v1/{collection}/{id}`).
    #[must_use]
    pub fn collection(self) -> &'static str {
        match self {
            Self::Device => "devices",
            Self::Schedule => "schedules",
            Self::User => "users",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Device => "device",
            Self::Schedule => "schedule",
            Self::User => "user",
        })
    }
}
