use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EntityKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Cache,
    Nas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Syncing,
    Available,
    Error,
}

/// One pointer from an entity to its physical location on a given tier
/// (§3 StorageObject). At most one row exists per `(entity_id, tier)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageObject {
    #[serde(rename = "_key")]
    pub id: Uuid,
    pub entity_id: Uuid,
    pub entity_kind: EntityKind,
    pub tier: Tier,
    pub object_key: String,
    pub availability_status: AvailabilityStatus,
    /// Non-negative. Only meaningful for `(File, Nas)` storage objects; all
    /// others stay at 0.
    pub lease_count: u32,
}

impl StorageObject {
    pub fn new(
        entity_id: Uuid,
        entity_kind: EntityKind,
        tier: Tier,
        object_key: impl Into<String>,
        availability_status: AvailabilityStatus,
    ) -> Self {
        StorageObject {
            id: super::new_id(),
            entity_id,
            entity_kind,
            tier,
            object_key: object_key.into(),
            availability_status,
            lease_count: 0,
        }
    }

    /// `true` iff a destructive NAS operation (trash/purge/move) must not
    /// proceed against this storage object right now (§5 Shared resources).
    pub fn is_leased(&self) -> bool {
        self.lease_count > 0
    }
}
