use uuid::Uuid;

use crate::auth::middleware::Principal;
use crate::error::ChatError;
use crate::models::chat_messages::SenderRole;
use crate::models::chats;

/// Check that the caller is one of the chat's two participants.
///
/// Called on every chat-scoped read; nothing is cached between requests.
/// A user principal must be the chat's user, a vendor principal must be
/// the chat's vendor.
pub fn ensure_participant(chat: &chats::Model, principal: &Principal) -> Result<(), ChatError> {
    match principal {
        Principal::User(id) if *id == chat.user_id => Ok(()),
        Principal::Vendor(id) if *id == chat.vendor_id => Ok(()),
        _ => Err(ChatError::Forbidden(
            "You are not a participant in this chat".to_string(),
        )),
    }
}

/// Resolve the caller into the (role, id) pair recorded on a new message.
///
/// Same participation rule as `ensure_participant`, but the result pins the
/// message's `sender_role`/`sender_id` to the chat's own participant ids,
/// so a stored message can never disagree with its parent chat.
pub fn derive_sender(
    chat: &chats::Model,
    principal: &Principal,
) -> Result<(SenderRole, Uuid), ChatError> {
    match principal {
        Principal::User(id) if *id == chat.user_id => Ok((SenderRole::User, chat.user_id)),
        Principal::Vendor(id) if *id == chat.vendor_id => Ok((SenderRole::Vendor, chat.vendor_id)),
        _ => Err(ChatError::Forbidden(
            "You are not a participant in this chat".to_string(),
        )),
    }
}

/// Reject writes to a blocked chat. Reads are not gated on this.
pub fn ensure_writable(chat: &chats::Model) -> Result<(), ChatError> {
    if chat.is_blocked {
        return Err(ChatError::Forbidden("Chat is blocked".to_string()));
    }
    Ok(())
}
