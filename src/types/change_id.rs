use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a `TrackedChange`, generated when the change is recorded and
/// stable for the lifetime of the record.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChangeId(Uuid);

impl ChangeId {
    #[must_use]
    pub fn generate() -> Self { ChangeId(Uuid::new_v4()) }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid { &self.0 }
}

impl From<Uuid> for ChangeId {
    fn from(value: Uuid) -> Self { ChangeId(value) }
}

impl Display for ChangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}
