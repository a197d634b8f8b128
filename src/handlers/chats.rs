use actix_web::{HttpResponse, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::{AuthenticatedUser, AuthenticatedVendor, ChatPrincipal};
use crate::chat::{ledger, registry};
use crate::error::ChatError;
use crate::models::chat_messages::{MessageQuery, MessageResponse, SendMessageRequest};
use crate::models::chats::{ChatResponse, StartChatRequest};

/// POST /api/chats/start — a user starts (or re-opens) the chat for a
/// (vendor, product) pair.
///
/// Idempotent: the same triple always resolves to the same chat. Fails with
/// 404 when the product does not belong to the named vendor.
pub async fn start_chat(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    body: web::Json<StartChatRequest>,
) -> Result<HttpResponse, ChatError> {
    let chat = registry::start_or_get(db.get_ref(), user.0.id, body.vendor_id, body.product_id)
        .await?;

    Ok(HttpResponse::Ok().json(ChatResponse::from(chat)))
}

/// POST /api/chats/{chat_id}/messages — either participant sends a message.
pub async fn send_message(
    principal: ChatPrincipal,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    body: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, ChatError> {
    let chat_id = path.into_inner();

    let message = ledger::append(db.get_ref(), chat_id, &principal.0, &body.content).await?;

    Ok(HttpResponse::Created().json(MessageResponse::from(message)))
}

/// GET /api/chats/{chat_id}/messages?after=<timestamp> — poll for messages.
///
/// Returns the full history, or with `after` only messages created strictly
/// later, always in ascending creation order.
pub async fn get_messages(
    principal: ChatPrincipal,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
    query: web::Query<MessageQuery>,
) -> Result<HttpResponse, ChatError> {
    let chat_id = path.into_inner();

    let messages = ledger::history(db.get_ref(), chat_id, &principal.0, query.after).await?;
    let response: Vec<MessageResponse> = messages.into_iter().map(|m| m.into()).collect();

    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/chats/user — the authenticated user's chat list.
pub async fn user_chats(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ChatError> {
    let summaries = registry::list_for_user(db.get_ref(), user.0.id).await?;

    Ok(HttpResponse::Ok().json(summaries))
}

/// GET /api/chats/vendor — the authenticated vendor's chat list.
pub async fn vendor_chats(
    vendor: AuthenticatedVendor,
    db: web::Data<DatabaseConnection>,
) -> Result<HttpResponse, ChatError> {
    let summaries = registry::list_for_vendor(db.get_ref(), vendor.0.id).await?;

    Ok(HttpResponse::Ok().json(summaries))
}

/// POST /api/chats/{chat_id}/block — the chat's vendor blocks new messages.
/// History stays readable for both participants.
pub async fn block_chat(
    vendor: AuthenticatedVendor,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ChatError> {
    let chat_id = path.into_inner();

    let chat = registry::block_as_vendor(db.get_ref(), chat_id, vendor.0.id).await?;

    Ok(HttpResponse::Ok().json(ChatResponse::from(chat)))
}

/// POST /api/chats/{chat_id}/unblock — the chat's vendor lifts their block.
pub async fn unblock_chat(
    vendor: AuthenticatedVendor,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ChatError> {
    let chat_id = path.into_inner();

    let chat = registry::unblock_as_vendor(db.get_ref(), chat_id, vendor.0.id).await?;

    Ok(HttpResponse::Ok().json(ChatResponse::from(chat)))
}
