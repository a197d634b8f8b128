use sea_orm::{DatabaseConnection, SqlErr};
use uuid::Uuid;

use crate::db::chats as chat_db;
use crate::db::products as product_db;
use crate::db::users as user_db;
use crate::db::vendors as vendor_db;
use crate::error::ChatError;
use crate::models::chats::{self, BlockedBy, ChatSummary};

/// Find or create the single chat for a (user, vendor, product) triple.
///
/// The product must exist and belong to the named vendor. Calling this twice
/// with the same triple always resolves to the same row: the unique index on
/// the triple decides concurrent creates, and the loser re-reads the
/// winner's row instead of surfacing a conflict.
pub async fn start_or_get(
    db: &DatabaseConnection,
    user_id: Uuid,
    vendor_id: Uuid,
    product_id: Uuid,
) -> Result<chats::Model, ChatError> {
    product_db::find_owned_by(db, product_id, vendor_id)
        .await?
        .ok_or_else(|| ChatError::NotFound("Product not found for this vendor".to_string()))?;

    if let Some(existing) = chat_db::find_by_triple(db, user_id, vendor_id, product_id).await? {
        return Ok(existing);
    }

    match chat_db::insert_chat(db, user_id, vendor_id, product_id).await {
        Ok(chat) => Ok(chat),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            // Lost the creation race; the winner's row is there to read.
            chat_db::find_by_triple(db, user_id, vendor_id, product_id)
                .await?
                .ok_or(ChatError::Db(err))
        }
        Err(err) => Err(err.into()),
    }
}

/// All chats where the given user is the participant, newest activity first.
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
) -> Result<Vec<ChatSummary>, ChatError> {
    let chats = chat_db::get_chats_by_user_id(db, user_id).await?;

    let mut summaries = Vec::with_capacity(chats.len());
    for chat in chats {
        // Display-only lookups: a counterpart or product that can't be read
        // leaves the field empty rather than failing the whole list.
        let counterpart_name = match vendor_db::get_vendor_by_id(db, chat.vendor_id).await {
            Ok(Some(vendor)) => Some(vendor.name),
            _ => None,
        };
        let product_title = match product_db::get_product_by_id(db, chat.product_id).await {
            Ok(Some(product)) => Some(product.title),
            _ => None,
        };

        summaries.push(ChatSummary {
            id: chat.id,
            product_id: chat.product_id,
            product_title,
            counterpart_id: chat.vendor_id,
            counterpart_name,
            last_message: chat.last_message,
            last_message_at: chat.last_message_at,
            is_blocked: chat.is_blocked,
        });
    }

    sort_by_recency(&mut summaries);
    Ok(summaries)
}

/// All chats where the given vendor is the participant, newest activity first.
pub async fn list_for_vendor(
    db: &DatabaseConnection,
    vendor_id: Uuid,
) -> Result<Vec<ChatSummary>, ChatError> {
    let chats = chat_db::get_chats_by_vendor_id(db, vendor_id).await?;

    let mut summaries = Vec::with_capacity(chats.len());
    for chat in chats {
        let counterpart_name = match user_db::get_user_by_id(db, chat.user_id).await {
            Ok(Some(user)) => Some(user.name),
            _ => None,
        };
        let product_title = match product_db::get_product_by_id(db, chat.product_id).await {
            Ok(Some(product)) => Some(product.title),
            _ => None,
        };

        summaries.push(ChatSummary {
            id: chat.id,
            product_id: chat.product_id,
            product_title,
            counterpart_id: chat.user_id,
            counterpart_name,
            last_message: chat.last_message,
            last_message_at: chat.last_message_at,
            is_blocked: chat.is_blocked,
        });
    }

    sort_by_recency(&mut summaries);
    Ok(summaries)
}

/// Sort chat summaries by last activity descending, putting chats with no
/// messages yet at the end.
pub fn sort_by_recency(summaries: &mut [ChatSummary]) {
    summaries.sort_by(|a, b| {
        let a_time = a.last_message_at.unwrap_or(chrono::DateTime::UNIX_EPOCH);
        let b_time = b.last_message_at.unwrap_or(chrono::DateTime::UNIX_EPOCH);
        b_time.cmp(&a_time)
    });
}

/// Vendor-initiated moderation block. Only the chat's own vendor may block,
/// and the actor is recorded on the chat.
pub async fn block_as_vendor(
    db: &DatabaseConnection,
    chat_id: Uuid,
    vendor_id: Uuid,
) -> Result<chats::Model, ChatError> {
    let chat = chat_db::get_chat_by_id(db, chat_id)
        .await?
        .ok_or_else(|| ChatError::NotFound("Chat not found".to_string()))?;

    if chat.vendor_id != vendor_id {
        return Err(ChatError::Forbidden(
            "You can only block your own chats".to_string(),
        ));
    }

    Ok(chat_db::set_blocked(db, chat.id, Some(BlockedBy::Vendor)).await?)
}

/// Vendor-initiated unblock. A block placed by an admin stays in place.
pub async fn unblock_as_vendor(
    db: &DatabaseConnection,
    chat_id: Uuid,
    vendor_id: Uuid,
) -> Result<chats::Model, ChatError> {
    let chat = chat_db::get_chat_by_id(db, chat_id)
        .await?
        .ok_or_else(|| ChatError::NotFound("Chat not found".to_string()))?;

    if chat.vendor_id != vendor_id {
        return Err(ChatError::Forbidden(
            "You can only unblock your own chats".to_string(),
        ));
    }

    if chat.blocked_by == Some(BlockedBy::Admin) {
        return Err(ChatError::Forbidden(
            "This chat was blocked by an admin".to_string(),
        ));
    }

    Ok(chat_db::set_blocked(db, chat.id, None).await?)
}
