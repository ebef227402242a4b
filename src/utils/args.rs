//! Command-argument parsing helpers.
//!
//! Commands are declared without fields and their trailing text is split here,
//! the way the original `/gen file.txt 2 5` style arguments work: an optional
//! file reference plus an optional trailing `from to` range pair.

/// Returns the text following the command token itself, trimmed.
/// `"/gen trivia.txt 2 5"` becomes `"trivia.txt 2 5"`.
pub fn command_args(text: &str) -> &str {
    match text.split_once(char::is_whitespace) {
        Some((_, rest)) => rest.trim(),
        None => "",
    }
}

/// Arguments accepted by `/gen`: an optional file name and an optional
/// question range.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenArgs {
    pub file_name: Option<String>,
    pub range: Option<(usize, usize)>,
}

/// Splits `/gen` arguments. A trailing pair of positive integers is consumed
/// as the range; the first remaining token (if any) is the file name. A
/// non-numeric trailing pair means "no range given".
pub fn parse_gen_args(args: &str) -> GenArgs {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let range = parse_range_pair(&tokens);
    let remaining = if range.is_some() {
        &tokens[..tokens.len() - 2]
    } else {
        &tokens[..]
    };
    GenArgs {
        file_name: remaining.first().map(|token| token.to_string()),
        range,
    }
}

/// Arguments accepted by `/quiz`: a quiz-link id and an optional range.
pub fn parse_quiz_args(args: &str) -> Option<(String, Option<(usize, usize)>)> {
    let tokens: Vec<&str> = args.split_whitespace().collect();
    let first = tokens.first()?;
    let range = parse_range_pair(&tokens[1..]);
    Some((first.to_string(), range))
}

/// Interprets the last two tokens as a `(from, to)` range pair. Both must be
/// positive integers; anything else is treated as "no range given".
pub fn parse_range_pair(tokens: &[&str]) -> Option<(usize, usize)> {
    if tokens.len() < 2 {
        return None;
    }
    let from = tokens[tokens.len() - 2].parse::<usize>().ok()?;
    let to = tokens[tokens.len() - 1].parse::<usize>().ok()?;
    if from == 0 || to == 0 {
        return None;
    }
    Some((from, to))
}
