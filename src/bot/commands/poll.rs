use teloxide::prelude::*;

use crate::quiz::{parse_questions, PollDispatcher, TelegramPollSender};
use crate::utils::args::command_args;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// Default question file for a bare `/poll`.
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.txt";

/// `/poll [file]` — reads a question file from disk and sends every question
/// as a poll.
pub async fn handle_poll(bot: Bot, msg: Message) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    let args = command_args(msg.text().unwrap_or_default());
    let file_name = if args.is_empty() {
        DEFAULT_QUESTIONS_FILE
    } else {
        args
    };
    log_command_start("poll", user_id, chat_id.0, Some(file_name));

    let content = match tokio::fs::read_to_string(file_name).await {
        Ok(content) => content,
        Err(err) => {
            log_command_error("poll", user_id, chat_id.0, &err.to_string());
            bot.send_message(
                chat_id,
                format!("No valid questions found in the file: {file_name}"),
            )
            .await?;
            return Ok(());
        }
    };

    let questions = parse_questions(&content);
    if questions.is_empty() {
        bot.send_message(
            chat_id,
            format!("No valid questions found in the file: {file_name}"),
        )
        .await?;
        return Ok(());
    }

    let sender = TelegramPollSender::new(bot.clone());
    PollDispatcher::default()
        .dispatch(&sender, chat_id, &questions, None)
        .await;

    bot.send_message(chat_id, "Quiz completed!").await?;
    log_command_success(
        "poll",
        user_id,
        chat_id.0,
        Some(&format!("{} questions sent", questions.len())),
    );
    Ok(())
}
