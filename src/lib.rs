//! # Quiz Poll Bot
//!
//! A Telegram bot that converts plain-text question documents into interactive
//! quiz polls and sends them to a chat, pacing delivery to respect Telegram's
//! flood-control limits.
//!
//! ## Features
//! - Parse numbered multiple-choice questions (`1.` / `A)` / `Answer: B, why`)
//! - Graded quiz polls with explanations, or regular polls when no answer is given
//! - Per-chat registry of uploaded question files
//! - Shareable 8-character quiz links backed by SQLite
//! - Rate-limit aware dispatch with fixed pacing and retry

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Quiz text parsing and poll dispatch (the core pipeline)
pub mod quiz;
/// HTTP health-check service
pub mod services;
/// Utility functions for argument parsing, validation, and logging
pub mod utils;
