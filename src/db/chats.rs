use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::chats::{self, BlockedBy};

/// Insert a new chat for a (user, vendor, product) triple.
///
/// The unique index on the triple makes concurrent inserts race; callers
/// must treat a unique-constraint violation as "someone else won" and
/// re-read the existing row.
pub async fn insert_chat(
    db: &DatabaseConnection,
    user_id: Uuid,
    vendor_id: Uuid,
    product_id: Uuid,
) -> Result<chats::Model, DbErr> {
    let new_chat = chats::ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        vendor_id: Set(vendor_id),
        product_id: Set(product_id),
        last_message: Set(String::new()),
        last_message_at: Set(None),
        is_blocked: Set(false),
        blocked_by: Set(None),
        created_at: Set(chrono::Utc::now()),
    };

    new_chat.insert(db).await
}

/// Fetch a single chat by ID.
pub async fn get_chat_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<chats::Model>, DbErr> {
    chats::Entity::find_by_id(id).one(db).await
}

/// Fetch the chat for a (user, vendor, product) triple, if one exists.
pub async fn find_by_triple(
    db: &DatabaseConnection,
    user_id: Uuid,
    vendor_id: Uuid,
    product_id: Uuid,
) -> Result<Option<chats::Model>, DbErr> {
    chats::Entity::find()
        .filter(chats::Column::UserId.eq(user_id))
        .filter(chats::Column::VendorId.eq(vendor_id))
        .filter(chats::Column::ProductId.eq(product_id))
        .one(db)
        .await
}

/// Fetch all chats where the given user is the participant.
pub async fn get_chats_by_user_id(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<chats::Model>, DbErr> {
    chats::Entity::find()
        .filter(chats::Column::UserId.eq(user_id))
        .all(db)
        .await
}

/// Fetch all chats where the given vendor is the participant.
pub async fn get_chats_by_vendor_id(
    db: &DatabaseConnection,
    vendor_id: Uuid,
) -> Result<Vec<chats::Model>, DbErr> {
    chats::Entity::find()
        .filter(chats::Column::VendorId.eq(vendor_id))
        .all(db)
        .await
}

/// Update the denormalized preview fields after a message was appended.
///
/// Single conditional statement instead of read-modify-write: the row is
/// only touched when the new message is at least as recent as the current
/// preview, so two racing appends settle on the later message no matter
/// which update lands last. Returns the number of rows updated (0 when the
/// preview already reflects a newer message).
pub async fn touch_preview(
    db: &DatabaseConnection,
    chat_id: Uuid,
    content: &str,
    sent_at: chrono::DateTime<chrono::Utc>,
) -> Result<u64, DbErr> {
    let result = chats::Entity::update_many()
        .col_expr(chats::Column::LastMessage, Expr::value(content))
        .col_expr(chats::Column::LastMessageAt, Expr::value(sent_at))
        .filter(chats::Column::Id.eq(chat_id))
        .filter(
            Condition::any()
                .add(chats::Column::LastMessageAt.is_null())
                .add(chats::Column::LastMessageAt.lte(sent_at)),
        )
        .exec(db)
        .await?;

    Ok(result.rows_affected)
}

/// Set or clear the moderation block on a chat.
pub async fn set_blocked(
    db: &DatabaseConnection,
    chat_id: Uuid,
    blocked_by: Option<BlockedBy>,
) -> Result<chats::Model, DbErr> {
    let chat = chats::Entity::find_by_id(chat_id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound("Chat not found".to_string()))?;

    let mut active: chats::ActiveModel = chat.into();
    active.is_blocked = Set(blocked_by.is_some());
    active.blocked_by = Set(blocked_by);

    active.update(db).await
}
