use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Which side of the chat authored a message, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum SenderRole {
    #[sea_orm(string_value = "user")]
    User,
    #[sea_orm(string_value = "vendor")]
    Vendor,
}

/// SeaORM entity for the `chat_messages` table.
///
/// Rows are append-only: no edit or delete path exists. `sender_id` refers to
/// a user or a vendor depending on `sender_role` and must match the parent
/// chat's participant for that role. The seen flags are written at creation
/// only and reserved for a future read-receipt surface.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chat_messages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_role: SenderRole,
    pub sender_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub seen_by_user: bool,
    pub seen_by_vendor: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chats::Entity",
        from = "Column::ChatId",
        to = "super::chats::Column::Id"
    )]
    Chat,
}

impl Related<super::chats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Chat.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Request body for POST /api/chats/{chat_id}/messages.
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// Query parameters for the polling read:
/// GET /api/chats/{chat_id}/messages?after=<timestamp>.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageQuery {
    pub after: Option<chrono::DateTime<chrono::Utc>>,
}

/// Response DTO for messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub chat_id: Uuid,
    pub sender_role: SenderRole,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Model> for MessageResponse {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            chat_id: m.chat_id,
            sender_role: m.sender_role,
            sender_id: m.sender_id,
            content: m.content,
            created_at: m.created_at,
        }
    }
}
