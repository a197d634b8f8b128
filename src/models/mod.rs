pub mod chat_messages;
pub mod chats;
pub mod products;
pub mod users;
pub mod vendors;
