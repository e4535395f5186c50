pub mod file;
pub mod folder;
pub mod health;
pub mod sync_status;
pub mod upload;

use std::sync::Arc;

use dms_core::ports::MetadataStore;
use uuid::Uuid;

/// Every command endpoint returns the updated entity plus the `syncEventId`
/// the command produced (§6). Commands themselves return only the entity,
/// so this re-reads the just-inserted event by sorting the entity's status
/// history for the most recently created row.
pub async fn latest_sync_event_id(
    metadata: &Arc<dyn MetadataStore>,
    entity_id: Uuid,
) -> Option<Uuid> {
    metadata
        .get_sync_status_for_entity(entity_id)
        .await
        .ok()?
        .into_iter()
        .max_by_key(|e| e.created_at)
        .map(|e| e.id)
}
