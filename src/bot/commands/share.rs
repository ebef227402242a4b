use teloxide::prelude::*;

use crate::bot::admin::can_manage;
use crate::database::connection::DatabaseManager;
use crate::database::models::{LoadedFile, QuizLink};
use crate::quiz::{parse_questions, PollDispatcher, TelegramPollSender};
use crate::utils::args::{command_args, parse_quiz_args};
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};
use crate::utils::validation::validate_quiz_id;

/// `/share <file>` — parses a loaded file once and persists the question
/// sequence under a shareable 8-character id.
pub async fn handle_share(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    if !can_manage(&bot, &msg).await {
        bot.send_message(chat_id, "Only group admins can use this command.")
            .await?;
        return Ok(());
    }

    let file_name = command_args(msg.text().unwrap_or_default());
    if file_name.is_empty() {
        bot.send_message(chat_id, "Please provide a loaded file name to share.")
            .await?;
        return Ok(());
    }
    log_command_start("share", user_id, chat_id.0, Some(file_name));

    let file = match LoadedFile::find_by_suffix(&db.pool, chat_id.0, file_name).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            bot.send_message(
                chat_id,
                format!(
                    "File '{file_name}' is not loaded. Please load it first using the /load command."
                ),
            )
            .await?;
            return Ok(());
        }
        Err(err) => {
            log_command_error("share", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to read the file registry.")
                .await?;
            return Ok(());
        }
    };

    let content = match tokio::fs::read_to_string(&file.file_path).await {
        Ok(content) => content,
        Err(err) => {
            log_command_error("share", user_id, chat_id.0, &err.to_string());
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

    match QuizLink::create(&db.pool, &questions, user_id).await {
        Ok(link) => {
            bot.send_message(
                chat_id,
                format!(
                    "Quiz link created: {id}\nRun it anywhere with /quiz {id}",
                    id = link.quiz_id
                ),
            )
            .await?;
            log_command_success("share", user_id, chat_id.0, Some(&link.quiz_id));
        }
        Err(err) => {
            log_command_error("share", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to create the quiz link.")
                .await?;
        }
    }
    Ok(())
}

/// `/quiz <id> [from to]` — resolves a stored quiz link and dispatches its
/// question sequence. Open to everyone; that is the point of a link.
pub async fn handle_quiz(bot: Bot, msg: Message, db: &DatabaseManager) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    let user_id = msg.from().map(|u| u.id.0 as i64).unwrap_or(0);

    let (quiz_id, range) = match parse_quiz_args(command_args(msg.text().unwrap_or_default())) {
        Some(parsed) => parsed,
        None => {
            bot.send_message(chat_id, "Please provide a quiz id, e.g. /quiz ab12cd34.")
                .await?;
            return Ok(());
        }
    };
    log_command_start("quiz", user_id, chat_id.0, Some(&quiz_id));

    if let Err(err) = validate_quiz_id(&quiz_id) {
        bot.send_message(chat_id, err.to_string()).await?;
        return Ok(());
    }

    let link = match QuizLink::find_by_id(&db.pool, &quiz_id).await {
        Ok(Some(link)) => link,
        Ok(None) => {
            bot.send_message(chat_id, format!("No quiz found for id '{quiz_id}'."))
                .await?;
            return Ok(());
        }
        Err(err) => {
            log_command_error("quiz", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "Failed to look up the quiz link.")
                .await?;
            return Ok(());
        }
    };

    let questions = match link.questions() {
        Ok(questions) if !questions.is_empty() => questions,
        Ok(_) => {
            bot.send_message(chat_id, "This quiz link holds no questions.")
                .await?;
            return Ok(());
        }
        Err(err) => {
            log_command_error("quiz", user_id, chat_id.0, &err.to_string());
            bot.send_message(chat_id, "This quiz link could not be decoded.")
                .await?;
            return Ok(());
        }
    };

    bot.send_message(chat_id, "Starting the quiz...").await?;

    let sender = TelegramPollSender::new(bot.clone());
    PollDispatcher::default()
        .dispatch(&sender, chat_id, &questions, range)
        .await;

    bot.send_message(chat_id, "Quiz completed!").await?;
    log_command_success(
        "quiz",
        user_id,
        chat_id.0,
        Some(&format!("{} questions, range {:?}", questions.len(), range)),
    );
    Ok(())
}
