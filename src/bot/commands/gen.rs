use std::path::PathBuf;
use teloxide::prelude::*;

use crate::bot::admin::can_manage;
use crate::bot::download::download_document;
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::database::models::LoadedFile;
use crate::quiz::{parse_questions, PollDispatcher, TelegramPollSender};
use crate::utils::args::{command_args, parse_gen_args};
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};
use crate::utils::validation::validate_document_name;

/// `/gen [file] [from to]` — runs a quiz from a loaded file or a replied-to
/// `.txt` document, optionally restricted to a question range.
pub async fn handle_gen(
    bot: Bot,
    msg: Message,
    db: &DatabaseManager,
    config: &Config,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    if !can_manage(&bot, &msg).await {
        bot.send_message(chat_id, "Only group admins can use this command.")
            .await?;
        return Ok(());
    }

    let args = parse_gen_args(command_args(msg.text().unwrap_or_default()));
    log_command_start("gen", user_id, chat_id.0, args.file_name.as_deref());

    // Resolve the source text: a loaded file referenced by name, or a replied
    // document (downloaded to a temp path and removed after reading).
    let mut temp_path: Option<PathBuf> = None;
    let file_path = if let Some(name) = &args.file_name {
        match LoadedFile::find_by_suffix(&db.pool, chat_id.0, name).await {
            Ok(Some(file)) => file.file_path,
            Ok(None) => {
                bot.send_message(
                    chat_id,
                    format!(
                        "File '{name}' is not loaded. Please load it first using the /load command."
                    ),
                )
                .await?;
                return Ok(());
            }
            Err(err) => {
                log_command_error("gen", user_id, chat_id.0, &err.to_string());
                bot.send_message(chat_id, "Failed to read the file registry.")
                    .await?;
                return Ok(());
            }
        }
    } else if let Some(document) = msg.reply_to_message().and_then(|m| m.document()) {
        let doc_name = document
            .file_name
            .clone()
            .unwrap_or_else(|| "document".to_string());
        if let Err(err) = validate_document_name(&doc_name) {
            bot.send_message(chat_id, err.to_string()).await?;
            return Ok(());
        }

        // Reuse an already-loaded copy of this document when one exists.
        let loaded = LoadedFile::find_by_suffix(&db.pool, chat_id.0, &doc_name)
            .await
            .unwrap_or(None);
        match loaded {
            Some(file) => file.file_path,
            None => {
                let path =
                    PathBuf::from(&config.files_dir).join(format!("temp_{}_{doc_name}", chat_id.0));
                if let Err(err) = download_document(&bot, document, &path).await {
                    log_command_error("gen", user_id, chat_id.0, &err.to_string());
                    bot.send_message(chat_id, "Failed to download the file.")
                        .await?;
                    return Ok(());
                }
                temp_path = Some(path.clone());
                path.to_string_lossy().into_owned()
            }
        }
    } else {
        bot.send_message(
            chat_id,
            "Please either specify a loaded file name or reply to a document with the /gen command.",
        )
        .await?;
        return Ok(());
    };

    let content = tokio::fs::read_to_string(&file_path).await;
    if let Some(path) = &temp_path {
        let _ = tokio::fs::remove_file(path).await;
    }
    let content = match content {
        Ok(content) => content,
        Err(err) => {
            log_command_error("gen", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "No valid questions found in the file.")
                .await?;
            return Ok(());
        }
    };

    let questions = parse_questions(&content);
    if questions.is_empty() {
        bot.send_message(chat_id, "No valid questions found in the file.")
            .await?;
        return Ok(());
    }

    bot.send_message(chat_id, "Starting the quiz...").await?;

    let sender = TelegramPollSender::new(bot.clone());
    PollDispatcher::default()
        .dispatch(&sender, chat_id, &questions, args.range)
        .await;

    bot.send_message(chat_id, "Quiz completed!").await?;
    log_command_success(
        "gen",
        user_id,
        chat_id.0,
        Some(&format!(
            "{} questions, range {:?}",
            questions.len(),
            args.range
        )),
    );
    Ok(())
}
