use quiz_poll_bot::bot::commands::Command;
use quiz_poll_bot::utils::args::{command_args, parse_gen_args, parse_quiz_args};
use teloxide::utils::command::BotCommands;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_help_command_parsing() {
        let input = "/help";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Help);
    }

    #[test]
    fn test_start_command_parsing() {
        let input = "/start";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Start);
    }

    #[test]
    fn test_poll_command_parsing() {
        let input = "/poll";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Poll);
    }

    #[test]
    fn test_list_command_parsing() {
        let input = "/list";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::List);
    }

    #[test]
    fn test_gen_command_with_mention() {
        let input = "/gen@testbot";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Gen);
    }

    // Argument-bearing commands are declared without fields, so trailing text
    // parses fine and is split separately by the handlers.
    #[test]
    fn test_gen_command_with_arguments() {
        let input = "/gen trivia.txt 2 5";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Gen);

        let parsed = parse_gen_args(command_args(input));
        assert_eq!(parsed.file_name.as_deref(), Some("trivia.txt"));
        assert_eq!(parsed.range, Some((2, 5)));
    }

    #[test]
    fn test_del_command_with_argument() {
        let input = "/del all";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Del);
        assert_eq!(command_args(input), "all");
    }

    #[test]
    fn test_quiz_command_with_id_and_range() {
        let input = "/quiz ab12cd34 1 3";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Quiz);

        let parsed = parse_quiz_args(command_args(input));
        assert_eq!(parsed, Some(("ab12cd34".to_string(), Some((1, 3)))));
    }

    #[test]
    fn test_share_command_parsing() {
        let input = "/share trivia.txt";
        let result = Command::parse(input, "testbot");
        assert!(result.is_ok());
        matches!(result.unwrap(), Command::Share);
        assert_eq!(command_args(input), "trivia.txt");
    }

    #[test]
    fn test_unknown_command_fails() {
        let input = "/doesnotexist";
        let result = Command::parse(input, "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_descriptions_mention_every_command() {
        let descriptions = Command::descriptions().to_string();
        for name in [
            "/help", "/start", "/poll", "/gen", "/load", "/list", "/del", "/share", "/quiz",
        ] {
            assert!(
                descriptions.contains(name),
                "missing {name} in: {descriptions}"
            );
        }
    }
}
