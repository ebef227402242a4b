pub mod message;

use teloxide::{
    dispatching::{dialogue, UpdateHandler},
    prelude::*,
};

use crate::config::Config;
use crate::database::connection::DatabaseManager;

pub struct BotHandler {
    pub db: DatabaseManager,
    pub config: Config,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, config: Config) -> Self {
        Self { db, config }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        use teloxide::dispatching::UpdateFilterExt;

        let db = self.db.clone();
        let config = self.config.clone();

        dialogue::enter::<Update, teloxide::dispatching::dialogue::InMemStorage<()>, (), _>()
            .branch(
                Update::filter_message()
                    .filter_command::<crate::bot::commands::Command>()
                    .endpoint(move |bot, msg, cmd| {
                        let db = db.clone();
                        let config = config.clone();
                        async move {
                            message::command_handler(bot, msg, cmd, db, config)
                                .await
                                .map_err(Into::into)
                        }
                    }),
            )
    }
}
