pub mod dispatch;
pub mod parser;
pub mod question;
pub mod sender;

pub use dispatch::{PollDispatcher, PollSender, SendPollError};
pub use parser::parse_questions;
pub use question::{QuestionError, QuizQuestion};
pub use sender::TelegramPollSender;
