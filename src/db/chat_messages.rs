use sea_orm::*;
use uuid::Uuid;

use crate::models::chat_messages::{self, SenderRole};

/// Insert a new message. The caller has already validated the content and
/// derived the sender from the chat's participants.
pub async fn insert_message(
    db: &DatabaseConnection,
    chat_id: Uuid,
    sender_role: SenderRole,
    sender_id: Uuid,
    content: String,
) -> Result<chat_messages::Model, DbErr> {
    let new_message = chat_messages::ActiveModel {
        id: Set(Uuid::new_v4()),
        chat_id: Set(chat_id),
        sender_role: Set(sender_role),
        sender_id: Set(sender_id),
        content: Set(content),
        seen_by_user: Set(false),
        seen_by_vendor: Set(false),
        created_at: Set(chrono::Utc::now()),
    };

    new_message.insert(db).await
}

/// Fetch messages for a chat in ascending creation order, optionally only
/// those created strictly after a given timestamp (how clients poll for
/// new messages).
///
/// Ascending (created_at, id) gives clients an append-only transcript and a
/// tie-break that stays identical across repeated reads.
pub async fn get_messages_by_chat(
    db: &DatabaseConnection,
    chat_id: Uuid,
    after: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<Vec<chat_messages::Model>, DbErr> {
    let mut query =
        chat_messages::Entity::find().filter(chat_messages::Column::ChatId.eq(chat_id));

    if let Some(after) = after {
        query = query.filter(chat_messages::Column::CreatedAt.gt(after));
    }

    query
        .order_by_asc(chat_messages::Column::CreatedAt)
        .order_by_asc(chat_messages::Column::Id)
        .all(db)
        .await
}
