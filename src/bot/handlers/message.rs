use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::bot::commands::{files, gen, load, poll, share, Command};
use crate::config::Config;
use crate::database::connection::DatabaseManager;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    db: DatabaseManager,
    config: Config,
) -> ResponseResult<()> {
    match cmd {
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
        Command::Start => {
            bot.send_message(
                msg.chat.id,
                "📝 Welcome to Quiz Poll Bot!\n\n\
                 Reply to a .txt question file with /load to register it, then run it with /gen.\n\
                 Use /share to create a shareable quiz link, and /quiz <id> to run one.\n\
                 Use /help to see all commands.",
            )
            .await?;
        }
        Command::Poll => {
            poll::handle_poll(bot, msg).await?;
        }
        Command::Gen => {
            gen::handle_gen(bot, msg, &db, &config).await?;
        }
        Command::Load => {
            load::handle_load(bot, msg, &db, &config).await?;
        }
        Command::List => {
            files::handle_list(bot, msg, &db).await?;
        }
        Command::Del => {
            files::handle_del(bot, msg, &db).await?;
        }
        Command::Share => {
            share::handle_share(bot, msg, &db).await?;
        }
        Command::Quiz => {
            share::handle_quiz(bot, msg, &db).await?;
        }
    }
    Ok(())
}
