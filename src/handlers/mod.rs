pub mod chats;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Chat routes (all protected — the extractor on each handler decides
    // which principals are accepted) ──
    cfg.service(
        web::scope("/chats")
            .route("/start", web::post().to(chats::start_chat))
            .route("/user", web::get().to(chats::user_chats))
            .route("/vendor", web::get().to(chats::vendor_chats))
            .route("/{chat_id}/messages", web::post().to(chats::send_message))
            .route("/{chat_id}/messages", web::get().to(chats::get_messages))
            .route("/{chat_id}/block", web::post().to(chats::block_chat))
            .route("/{chat_id}/unblock", web::post().to(chats::unblock_chat)),
    );
}
