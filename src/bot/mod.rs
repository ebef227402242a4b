pub mod admin;
pub mod commands;
pub mod download;
pub mod handlers;
