use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Who placed the moderation block on a chat, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BlockedBy {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "vendor")]
    Vendor,
}

/// SeaORM entity for the `chats` table.
///
/// One row per (user, vendor, product) triple, enforced by a unique index.
/// `last_message` / `last_message_at` are a denormalized preview of the most
/// recent message for the chat lists; `last_message_at` stays null until the
/// first message arrives.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chats")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub product_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub last_message: String,
    pub last_message_at: Option<DateTimeUtc>,
    pub is_blocked: bool,
    pub blocked_by: Option<BlockedBy>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::vendors::Entity",
        from = "Column::VendorId",
        to = "super::vendors::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Product,
    #[sea_orm(has_many = "super::chat_messages::Entity")]
    Messages,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::vendors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::chat_messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/chats/start.
/// The user id comes from the JWT, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct StartChatRequest {
    pub vendor_id: Uuid,
    pub product_id: Uuid,
}

/// Response DTO for a single chat.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub vendor_id: Uuid,
    pub product_id: Uuid,
    pub last_message: String,
    pub last_message_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_blocked: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Model> for ChatResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            vendor_id: m.vendor_id,
            product_id: m.product_id,
            last_message: m.last_message,
            last_message_at: m.last_message_at,
            is_blocked: m.is_blocked,
            created_at: m.created_at,
        }
    }
}

/// Response for the chat list endpoints, enriched with the counterpart's
/// display name and the product title.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSummary {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: Option<String>,
    pub counterpart_id: Uuid,
    pub counterpart_name: Option<String>,
    pub last_message: String,
    pub last_message_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_blocked: bool,
}
