//! Plain-text quiz parser.
//!
//! Input documents are a sequence of numbered question blocks:
//!
//! ```text
//! 1. What is 2+2?
//! A) 3
//! B) 4
//! C) 5
//! D) 6
//! Answer: B, Basic arithmetic
//! ```
//!
//! A new block starts at every line that begins with `<digits>.`. Blocks are
//! parsed independently, so one malformed block never corrupts its neighbors:
//! it is logged and skipped while the rest of the batch goes through.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::quiz::question::QuizQuestion;

#[allow(clippy::unwrap_used)]
static BLOCK_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.").unwrap());
#[allow(clippy::unwrap_used)]
static PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\.\s*(.*)$").unwrap());
#[allow(clippy::unwrap_used)]
static OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([A-I])\)\s*(.*)$").unwrap());

const ANSWER_PREFIX: &str = "Answer:";

/// Parses a raw quiz document into an ordered list of questions.
///
/// Malformed blocks (no prompt, zero options) are reported through `tracing`
/// and dropped; an answer line that cannot be resolved downgrades its block to
/// a regular poll instead. Never fails for the batch as a whole: an input with
/// nothing usable simply yields an empty list.
pub fn parse_questions(raw_text: &str) -> Vec<QuizQuestion> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in raw_text.trim().lines() {
        if BLOCK_START.is_match(line) {
            blocks.push(vec![line]);
        } else if let Some(block) = blocks.last_mut() {
            block.push(line);
        } else if !line.trim().is_empty() {
            debug!("ignoring text before the first numbered question: {line:?}");
        }
    }

    let mut questions = Vec::with_capacity(blocks.len());
    for block in &blocks {
        match parse_block(block) {
            Ok(question) => questions.push(question),
            Err(reason) => {
                warn!(
                    "skipping malformed question block ({reason}):\n{}",
                    block.join("\n")
                );
            }
        }
    }
    questions
}

/// Parses one question block. The error value is the skip reason used in the
/// diagnostic log line.
fn parse_block(lines: &[&str]) -> Result<QuizQuestion, &'static str> {
    let first = lines.first().ok_or("empty block")?;
    let prompt = PROMPT
        .captures(first)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or("missing numbered prompt line")?;
    if prompt.is_empty() {
        return Err("empty prompt");
    }

    // Source letters are kept so the answer can be resolved against what the
    // document actually labeled, not a fixed A..D mapping.
    let mut options: Vec<(char, String)> = Vec::new();
    let mut answer_line: Option<&str> = None;
    for line in &lines[1..] {
        let trimmed = line.trim();
        if let Some(caps) = OPTION.captures(line) {
            let letter = caps[1]
                .chars()
                .next()
                .ok_or("option letter capture is empty")?;
            options.push((letter, caps[2].trim().to_string()));
        } else if trimmed.starts_with(ANSWER_PREFIX) && answer_line.is_none() {
            answer_line = Some(trimmed);
        }
        // Anything else is stray formatting and is ignored.
    }

    if options.is_empty() {
        return Err("no option lines");
    }

    let (correct_option_index, explanation) = match answer_line {
        Some(line) => resolve_answer(line, &options),
        None => (None, None),
    };

    let option_texts = options.into_iter().map(|(_, text)| text).collect();
    QuizQuestion::new(prompt, option_texts, correct_option_index, explanation)
        .map_err(|_| "invalid question record")
}

/// Resolves an `Answer: <letter>[, explanation]` line against the parsed
/// options. Any failure degrades to a regular poll rather than dropping the
/// block.
fn resolve_answer(
    line: &str,
    options: &[(char, String)],
) -> (Option<usize>, Option<String>) {
    let (head, tail) = match line.split_once(',') {
        Some((head, tail)) => (head, Some(tail.trim())),
        None => (line, None),
    };

    let letter = head
        .split_once(':')
        .map(|(_, letter)| letter.trim())
        .filter(|token| token.chars().count() == 1)
        .and_then(|token| token.chars().next());

    let letter = match letter {
        Some(letter) => letter,
        None => {
            warn!("malformed answer line {line:?}, emitting a regular poll");
            return (None, None);
        }
    };

    match options.iter().position(|(source, _)| *source == letter) {
        Some(index) => {
            let explanation = tail
                .filter(|text| !text.is_empty())
                .map(|text| text.to_string());
            (Some(index), explanation)
        }
        None => {
            warn!("answer letter {letter:?} matches no option, emitting a regular poll");
            (None, None)
        }
    }
}
