use sea_orm::*;
use uuid::Uuid;

use crate::models::products;

/// Fetch a single product by ID.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<products::Model>, DbErr> {
    products::Entity::find_by_id(id).one(db).await
}

/// Fetch a product only if it belongs to the given vendor.
///
/// Starting a chat validates the (product, vendor) pair through this in one
/// query, so a mismatched pair reads as "not found" rather than leaking
/// whether the product exists under another vendor.
pub async fn find_owned_by(
    db: &DatabaseConnection,
    product_id: Uuid,
    vendor_id: Uuid,
) -> Result<Option<products::Model>, DbErr> {
    products::Entity::find()
        .filter(products::Column::Id.eq(product_id))
        .filter(products::Column::VendorId.eq(vendor_id))
        .one(db)
        .await
}
