pub mod account;
pub mod app_metadata;
pub mod credential;
pub mod entity;
pub mod in_memory;
