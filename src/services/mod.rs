pub mod auth_service;
pub mod board_service;
pub mod catalog_service;
pub mod conversation_service;
pub mod notification_service;
