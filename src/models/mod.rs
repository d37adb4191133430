pub mod conversation;
pub mod job;
pub mod navigation;
pub mod role;
