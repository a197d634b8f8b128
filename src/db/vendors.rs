use sea_orm::*;
use uuid::Uuid;

use crate::models::vendors;

/// Fetch a single vendor by ID.
pub async fn get_vendor_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<vendors::Model>, DbErr> {
    vendors::Entity::find_by_id(id).one(db).await
}
