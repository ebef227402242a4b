use std::path::PathBuf;
use teloxide::prelude::*;

use crate::bot::admin::can_manage;
use crate::bot::download::download_document;
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::database::models::LoadedFile;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};
use crate::utils::validation::{validate_document_name, validate_document_size};

/// `/load` — registers a replied-to `.txt` document for later `/gen`, `/poll`
/// and `/share` use in this chat.
pub async fn handle_load(
    bot: Bot,
    msg: Message,
    db: &DatabaseManager,
    config: &Config,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    if !can_manage(&bot, &msg).await {
        bot.send_message(chat_id, "Only group admins can load files.")
            .await?;
        return Ok(());
    }

    let document = match msg.reply_to_message().and_then(|m| m.document()) {
        Some(document) => document,
        None => {
            bot.send_message(
                chat_id,
                "Please reply to a document message with the /load command.",
            )
            .await?;
            return Ok(());
        }
    };

    let doc_name = document
        .file_name
        .clone()
        .unwrap_or_else(|| "document".to_string());
    log_command_start("load", user_id, chat_id.0, Some(&doc_name));

    if let Err(err) = validate_document_name(&doc_name) {
        bot.send_message(chat_id, err.to_string()).await?;
        return Ok(());
    }
    if let Err(err) = validate_document_size(document.file.size) {
        bot.send_message(chat_id, err.to_string()).await?;
        return Ok(());
    }

    let file_name = match LoadedFile::unique_name(&db.pool, chat_id.0, &doc_name).await {
        Ok(name) => name,
        Err(err) => {
            log_command_error("load", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to read the file registry.")
                .await?;
            return Ok(());
        }
    };

    let path = PathBuf::from(&config.files_dir).join(format!("{}_{file_name}", chat_id.0));
    if let Err(err) = download_document(&bot, document, &path).await {
        log_command_error("load", user_id, chat_id.0, &err.to_string());
        bot.send_message(chat_id, "Failed to download the file.")
            .await?;
        return Ok(());
    }

    match LoadedFile::create(
        &db.pool,
        chat_id.0,
        &file_name,
        &path.to_string_lossy(),
    )
    .await
    {
        Ok(file) => {
            bot.send_message(
                chat_id,
                format!("File '{}' has been loaded.", file.file_name),
            )
            .await?;
            log_command_success("load", user_id, chat_id.0, Some(&file.file_name));
        }
        Err(err) => {
            log_command_error("load", user_id, chat_id.0, &err.to_string());
            let _ = tokio::fs::remove_file(&path).await;
            bot.send_message(chat_id, "Failed to register the file.")
                .await?;
        }
    }
    Ok(())
}
