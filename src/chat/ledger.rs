use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::Principal;
use crate::chat::access;
use crate::db::chat_messages as message_db;
use crate::db::chats as chat_db;
use crate::error::ChatError;
use crate::models::chat_messages;

/// Trim a message body and reject empty or whitespace-only content.
pub fn clean_content(raw: &str) -> Result<String, ChatError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ChatError::InvalidInput("Message is required".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Append a message to a chat on behalf of the given principal.
///
/// Validation and authorization all happen before the insert; nothing is
/// written on a rejected request. Once the insert commits, the message is
/// final — the preview update that follows never rolls it back.
pub async fn append(
    db: &DatabaseConnection,
    chat_id: Uuid,
    principal: &Principal,
    content: &str,
) -> Result<chat_messages::Model, ChatError> {
    let content = clean_content(content)?;

    let chat = chat_db::get_chat_by_id(db, chat_id)
        .await?
        .ok_or_else(|| ChatError::NotFound("Chat not found".to_string()))?;

    access::ensure_writable(&chat)?;
    let (sender_role, sender_id) = access::derive_sender(&chat, principal)?;

    let message = message_db::insert_message(db, chat.id, sender_role, sender_id, content).await?;

    // Best-effort: a failure here only staggers the preview, which catches
    // up on the next successful append.
    if let Err(err) = chat_db::touch_preview(db, chat.id, &message.content, message.created_at).await
    {
        tracing::warn!(chat_id = %chat.id, "Failed to update chat preview: {err}");
    }

    Ok(message)
}

/// Read a chat's message history in ascending creation order.
///
/// With `after`, only messages created strictly later are returned, so a
/// polling client can pass its last-seen timestamp and append the result to
/// its transcript without re-sorting. Blocked chats stay readable.
pub async fn history(
    db: &DatabaseConnection,
    chat_id: Uuid,
    principal: &Principal,
    after: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<Vec<chat_messages::Model>, ChatError> {
    let chat = chat_db::get_chat_by_id(db, chat_id)
        .await?
        .ok_or_else(|| ChatError::NotFound("Chat not found".to_string()))?;

    access::ensure_participant(&chat, principal)?;

    Ok(message_db::get_messages_by_chat(db, chat.id, after).await?)
}
