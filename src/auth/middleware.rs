use actix_web::FromRequest;
use actix_web::{HttpRequest, dev::Payload, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use uuid::Uuid;

use crate::auth::jwt::{self, Claims, Role};
use crate::db::users as user_db;
use crate::db::vendors as vendor_db;
use crate::error::ChatError;
use crate::models::users;
use crate::models::vendors::{self, Status};

/// Wrapper type to store the JWT secret in Actix app data.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// A caller resolved to exactly one side of a chat.
///
/// Produced once by the extractors below and passed explicitly into every
/// chat operation, so no downstream code inspects tokens or roles on its
/// own. Admin credentials never resolve to a `Principal`; admins are not
/// chat participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User(Uuid),
    Vendor(Uuid),
}

/// Pull the Bearer token from the request and validate it against the
/// configured secret.
fn resolve_claims(req: &HttpRequest) -> Result<Claims, ChatError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ChatError::Unauthenticated("Missing Authorization header".to_string()))?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        ChatError::Unauthenticated("Authorization header must be: Bearer <token>".to_string())
    })?;

    let secret = req
        .app_data::<web::Data<JwtSecret>>()
        .ok_or_else(|| ChatError::Internal("JWT secret not configured".to_string()))?;

    jwt::validate_token(token, &secret.0)
        .map_err(|e| ChatError::Unauthenticated(format!("Invalid token: {e}")))
}

fn database(req: &HttpRequest) -> Result<web::Data<DatabaseConnection>, ChatError> {
    req.app_data::<web::Data<DatabaseConnection>>()
        .cloned()
        .ok_or_else(|| ChatError::Internal("Database not configured".to_string()))
}

/// The authenticated marketplace user. Vendor and admin tokens are rejected.
pub struct AuthenticatedUser(pub users::Model);

impl FromRequest for AuthenticatedUser {
    type Error = ChatError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let claims = resolve_claims(&req)?;
            if claims.role != Role::User {
                return Err(ChatError::Forbidden("Invalid user token".to_string()));
            }
            let user_id = claims.principal_id().map_err(ChatError::Unauthenticated)?;

            let db = database(&req)?;
            let user = user_db::get_user_by_id(db.get_ref(), user_id)
                .await?
                .ok_or_else(|| ChatError::Unauthenticated("User not found".to_string()))?;

            Ok(AuthenticatedUser(user))
        })
    }
}

/// The authenticated vendor. Only approved vendors pass.
pub struct AuthenticatedVendor(pub vendors::Model);

impl FromRequest for AuthenticatedVendor {
    type Error = ChatError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let claims = resolve_claims(&req)?;
            if claims.role != Role::Vendor {
                return Err(ChatError::Forbidden("Invalid vendor token".to_string()));
            }
            let vendor_id = claims.principal_id().map_err(ChatError::Unauthenticated)?;

            let db = database(&req)?;
            let vendor = vendor_db::get_vendor_by_id(db.get_ref(), vendor_id)
                .await?
                .ok_or_else(|| ChatError::Unauthenticated("Vendor not found".to_string()))?;

            if vendor.status != Status::Approved {
                return Err(ChatError::Forbidden("Vendor not approved".to_string()));
            }

            Ok(AuthenticatedVendor(vendor))
        })
    }
}

/// Either side of a chat, for the routes both participants share
/// (send message, read messages).
pub struct ChatPrincipal(pub Principal);

impl FromRequest for ChatPrincipal {
    type Error = ChatError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let claims = resolve_claims(&req)?;
            let principal_id = claims.principal_id().map_err(ChatError::Unauthenticated)?;
            let db = database(&req)?;

            match claims.role {
                Role::User => {
                    user_db::get_user_by_id(db.get_ref(), principal_id)
                        .await?
                        .ok_or_else(|| ChatError::Unauthenticated("User not found".to_string()))?;

                    Ok(ChatPrincipal(Principal::User(principal_id)))
                }
                Role::Vendor => {
                    let vendor = vendor_db::get_vendor_by_id(db.get_ref(), principal_id)
                        .await?
                        .ok_or_else(|| {
                            ChatError::Unauthenticated("Vendor not found".to_string())
                        })?;

                    if vendor.status != Status::Approved {
                        return Err(ChatError::Forbidden("Vendor not approved".to_string()));
                    }

                    Ok(ChatPrincipal(Principal::Vendor(principal_id)))
                }
                Role::Admin => Err(ChatError::Forbidden("Invalid token role".to_string())),
            }
        })
    }
}
