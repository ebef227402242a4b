pub mod files;
pub mod gen;
pub mod load;
pub mod poll;
pub mod share;

use teloxide::utils::command::BotCommands;

/// Bot commands. Argument-bearing commands are declared without fields and
/// parse their trailing text themselves (see `utils::args`), so optional
/// arguments like `/poll [file]` and `/gen [file] [from to]` work.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Quiz poll bot commands:")]
pub enum Command {
    #[command(description = "Display this help message")]
    Help,
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Send every question in a file as polls: /poll [file]")]
    Poll,
    #[command(description = "Run a quiz from a loaded file or a replied document: /gen [file] [from to]")]
    Gen,
    #[command(description = "Load a replied .txt document for this chat")]
    Load,
    #[command(description = "List loaded files for this chat")]
    List,
    #[command(description = "Delete a loaded file: /del <file|all>")]
    Del,
    #[command(description = "Create a shareable quiz link from a loaded file: /share <file>")]
    Share,
    #[command(description = "Run a stored quiz by id: /quiz <id> [from to]")]
    Quiz,
}
