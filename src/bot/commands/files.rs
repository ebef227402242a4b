use teloxide::prelude::*;

use crate::bot::admin::can_manage;
use crate::database::connection::DatabaseManager;
use crate::database::models::LoadedFile;
use crate::utils::args::command_args;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// `/list` — shows the file names loaded for this chat.
pub async fn handle_list(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let files = match LoadedFile::list(&db.pool, chat_id.0).await {
        Ok(files) => files,
        Err(err) => {
            log_command_error("list", 0, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to read the file registry.")
                .await?;
            return Ok(());
        }
    };

    if files.is_empty() {
        bot.send_message(chat_id, "No files are currently loaded for this group.")
            .await?;
    } else {
        let names = files
            .iter()
            .map(|file| file.file_name.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        bot.send_message(chat_id, format!("Loaded files for this group:\n{names}"))
            .await?;
    }
    Ok(())
}

/// `/del <file|all>` — removes loaded files (registry rows and the files on
/// disk).
pub async fn handle_del(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    if !can_manage(&bot, &msg).await {
        bot.send_message(chat_id, "Only group admins can delete files.")
            .await?;
        return Ok(());
    }

    let file_name = command_args(msg.text().unwrap_or_default());
    if file_name.is_empty() {
        bot.send_message(chat_id, "Please provide a file name to delete.")
            .await?;
        return Ok(());
    }
    log_command_start("del", user_id, chat_id.0, Some(file_name));

    if file_name == "all" {
        let files = match LoadedFile::list(&db.pool, chat_id.0).await {
            Ok(files) => files,
            Err(err) => {
                log_command_error("del", user_id, chat_id.0, &err.to_string());
                bot.send_message(chat_id, "Failed to read the file registry.")
                    .await?;
                return Ok(());
            }
        };
        for file in &files {
            let _ = tokio::fs::remove_file(&file.file_path).await;
        }
        if let Err(err) = LoadedFile::delete_all(&db.pool, chat_id.0).await {
            log_command_error("del", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to update the file registry.")
                .await?;
            return Ok(());
        }
        bot.send_message(
            chat_id,
            "All loaded files for this group have been deleted.",
        )
        .await?;
        log_command_success("del", user_id, chat_id.0, Some("all"));
        return Ok(());
    }

    match LoadedFile::find_by_name(&db.pool, chat_id.0, file_name).await {
        Ok(Some(file)) => {
            let _ = tokio::fs::remove_file(&file.file_path).await;
            if let Err(err) = LoadedFile::delete(&db.pool, chat_id.0, file_name).await {
                log_command_error("del", user_id, chat_id.0, &err.to_string());
                bot.send_message(chat_id, "Failed to update the file registry.")
                    .await?;
                return Ok(());
            }
            bot.send_message(chat_id, format!("File '{file_name}' has been deleted."))
                .await?;
            log_command_success("del", user_id, chat_id.0, Some(file_name));
        }
        Ok(None) => {
            bot.send_message(
                chat_id,
                format!("File '{file_name}' is not loaded for this group."),
            )
            .await?;
        }
        Err(err) => {
            log_command_error("del", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to read the file registry.")
                .await?;
        }
    }
    Ok(())
}
