//! Tests for the chat access gates and list ordering.
//!
//! The gates are pure functions over a chat row and a resolved principal,
//! so these tests build rows directly. No running server or database is
//! needed.
//!
//! Run with: `cargo test --test chat_gate_test`

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use vendora_backend::auth::middleware::Principal;
use vendora_backend::chat::access::{derive_sender, ensure_participant, ensure_writable};
use vendora_backend::chat::ledger::clean_content;
use vendora_backend::chat::registry::sort_by_recency;
use vendora_backend::error::ChatError;
use vendora_backend::models::chat_messages::SenderRole;
use vendora_backend::models::chats::{self, BlockedBy, ChatSummary};

/// Helper: a chat row between the given user and vendor.
fn chat_between(user_id: Uuid, vendor_id: Uuid) -> chats::Model {
    chats::Model {
        id: Uuid::new_v4(),
        user_id,
        vendor_id,
        product_id: Uuid::new_v4(),
        last_message: String::new(),
        last_message_at: None,
        is_blocked: false,
        blocked_by: None,
        created_at: Utc::now(),
    }
}

fn summary(last_message_at: Option<chrono::DateTime<Utc>>) -> ChatSummary {
    ChatSummary {
        id: Uuid::new_v4(),
        product_id: Uuid::new_v4(),
        product_title: None,
        counterpart_id: Uuid::new_v4(),
        counterpart_name: None,
        last_message: String::new(),
        last_message_at,
        is_blocked: false,
    }
}

#[test]
fn test_both_participants_pass_the_gate() {
    let user_id = Uuid::new_v4();
    let vendor_id = Uuid::new_v4();
    let chat = chat_between(user_id, vendor_id);

    assert!(ensure_participant(&chat, &Principal::User(user_id)).is_ok());
    assert!(ensure_participant(&chat, &Principal::Vendor(vendor_id)).is_ok());
}

#[test]
fn test_strangers_are_forbidden() {
    let chat = chat_between(Uuid::new_v4(), Uuid::new_v4());

    let other_user = Principal::User(Uuid::new_v4());
    let other_vendor = Principal::Vendor(Uuid::new_v4());

    assert!(matches!(
        ensure_participant(&chat, &other_user),
        Err(ChatError::Forbidden(_))
    ));
    assert!(matches!(
        ensure_participant(&chat, &other_vendor),
        Err(ChatError::Forbidden(_))
    ));
}

#[test]
fn test_matching_id_with_wrong_role_is_forbidden() {
    let user_id = Uuid::new_v4();
    let vendor_id = Uuid::new_v4();
    let chat = chat_between(user_id, vendor_id);

    // A vendor credential carrying the user's id (and vice versa) is not a
    // participant — the id must match under the caller's own role.
    assert!(matches!(
        ensure_participant(&chat, &Principal::Vendor(user_id)),
        Err(ChatError::Forbidden(_))
    ));
    assert!(matches!(
        ensure_participant(&chat, &Principal::User(vendor_id)),
        Err(ChatError::Forbidden(_))
    ));
}

#[test]
fn test_derive_sender_pins_role_and_id_to_the_chat() {
    let user_id = Uuid::new_v4();
    let vendor_id = Uuid::new_v4();
    let chat = chat_between(user_id, vendor_id);

    let (role, sender_id) = derive_sender(&chat, &Principal::User(user_id)).unwrap();
    assert_eq!(role, SenderRole::User);
    assert_eq!(sender_id, user_id);

    let (role, sender_id) = derive_sender(&chat, &Principal::Vendor(vendor_id)).unwrap();
    assert_eq!(role, SenderRole::Vendor);
    assert_eq!(sender_id, vendor_id);
}

#[test]
fn test_derive_sender_rejects_non_participants() {
    let chat = chat_between(Uuid::new_v4(), Uuid::new_v4());

    assert!(matches!(
        derive_sender(&chat, &Principal::User(Uuid::new_v4())),
        Err(ChatError::Forbidden(_))
    ));
}

#[test]
fn test_blocked_chat_rejects_writes_but_stays_readable() {
    let user_id = Uuid::new_v4();
    let vendor_id = Uuid::new_v4();
    let mut chat = chat_between(user_id, vendor_id);
    chat.is_blocked = true;
    chat.blocked_by = Some(BlockedBy::Vendor);

    // Writes are rejected regardless of which side asks...
    assert!(matches!(
        ensure_writable(&chat),
        Err(ChatError::Forbidden(_))
    ));

    // ...but both participants still pass the read gate.
    assert!(ensure_participant(&chat, &Principal::User(user_id)).is_ok());
    assert!(ensure_participant(&chat, &Principal::Vendor(vendor_id)).is_ok());
}

#[test]
fn test_open_chat_is_writable() {
    let chat = chat_between(Uuid::new_v4(), Uuid::new_v4());
    assert!(ensure_writable(&chat).is_ok());
}

#[test]
fn test_clean_content_trims_whitespace() {
    assert_eq!(clean_content("  Is this available? \n").unwrap(), "Is this available?");
}

#[test]
fn test_clean_content_rejects_empty_and_whitespace_only() {
    assert!(matches!(
        clean_content(""),
        Err(ChatError::InvalidInput(_))
    ));
    assert!(matches!(
        clean_content("   \n\t"),
        Err(ChatError::InvalidInput(_))
    ));
}

#[test]
fn test_sort_by_recency_newest_first_never_messaged_last() {
    let older = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
    let newer = Utc.with_ymd_and_hms(2025, 7, 2, 18, 30, 0).unwrap();

    let mut summaries = vec![summary(Some(older)), summary(None), summary(Some(newer))];
    sort_by_recency(&mut summaries);

    assert_eq!(summaries[0].last_message_at, Some(newer));
    assert_eq!(summaries[1].last_message_at, Some(older));
    assert_eq!(summaries[2].last_message_at, None);
}
