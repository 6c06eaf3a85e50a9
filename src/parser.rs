use crate::models::Card;
use regex::Regex;
use tracing::debug;

lazy_static::lazy_static! {
    // The question ends at the first "a:" after the leading "q:", wherever it
    // falls, so "Q: Java: ..." splits inside "Java:".
    static ref QUESTION_ANSWER_LINE: Regex =
        Regex::new(r"(?i)^q:(?P<question>.*?)a:(?P<answer>.*)$")
            .expect("question/answer pattern is valid");
}

/// Line layouts a card can be written in, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `Q: question A: answer`, case-insensitive markers.
    QuestionAnswer,
    /// `question|answer`
    Pipe,
    /// `question: answer`
    Colon,
    /// `question,answer`; quote characters are kept as text.
    Comma,
}

impl LineFormat {
    pub const PRECEDENCE: [LineFormat; 4] = [
        LineFormat::QuestionAnswer,
        LineFormat::Pipe,
        LineFormat::Colon,
        LineFormat::Comma,
    ];

    /// Splits a trimmed line into raw (question, answer) fields if this
    /// format recognises it. Fields may still be blank.
    fn split(self, line: &str) -> Option<(String, String)> {
        match self {
            LineFormat::QuestionAnswer => QUESTION_ANSWER_LINE
                .captures(line)
                .map(|caps| (caps["question"].to_string(), caps["answer"].to_string())),
            LineFormat::Pipe => split_on(line, '|'),
            LineFormat::Colon => split_on(line, ':'),
            LineFormat::Comma => split_on(line, ','),
        }
    }
}

fn split_on(line: &str, delimiter: char) -> Option<(String, String)> {
    line.split_once(delimiter)
        .map(|(question, answer)| (question.to_string(), answer.to_string()))
}

/// Returns the first format, in precedence order, that recognises the line.
pub fn detect_format(line: &str) -> Option<LineFormat> {
    let line = line.trim();
    LineFormat::PRECEDENCE
        .into_iter()
        .find(|format| format.split(line).is_some())
}

/// Parses a single line. The first matching format owns the line: if it
/// yields a blank question or answer the line is dropped rather than retried
/// with a later format.
pub fn parse_line(line: &str) -> Option<Card> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some((format, (question, answer))) = LineFormat::PRECEDENCE
        .into_iter()
        .find_map(|format| format.split(line).map(|fields| (format, fields)))
    else {
        debug!("Skipping line with no recognised delimiter: {:?}", line);
        return None;
    };

    let card = Card::new(&question, &answer);
    if card.is_none() {
        debug!("Skipping {:?} line with a blank field: {:?}", format, line);
    }
    card
}

pub fn parse_lines<I, S>(lines: I) -> Vec<Card>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

pub fn parse_text(text: &str) -> Vec<Card> {
    parse_lines(text.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(line: &str) -> (String, String) {
        let card = parse_line(line).unwrap();
        (card.question().to_string(), card.answer().to_string())
    }

    #[test]
    fn test_mixed_formats_keep_input_order() {
        let cards = parse_lines([
            "Capital of France|Paris",
            "Q: 2+2 A: 4",
            "dog: animal",
            "red,color",
        ]);

        let pairs: Vec<(&str, &str)> = cards.iter().map(|c| (c.question(), c.answer())).collect();
        assert_eq!(
            pairs,
            vec![
                ("Capital of France", "Paris"),
                ("2+2", "4"),
                ("dog", "animal"),
                ("red", "color"),
            ]
        );
    }

    #[test]
    fn test_unrecognised_line_is_skipped() {
        assert!(parse_line("just some text").is_none());
        let cards = parse_lines(["just some text", "a|b"]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question(), "a");
    }

    #[test]
    fn test_unparseable_text_gives_empty_deck() {
        assert!(parse_text("nothing here\nor here\n\n").is_empty());
        assert!(parse_text("").is_empty());
    }

    #[test]
    fn test_question_answer_markers_are_case_insensitive() {
        assert_eq!(fields("q: What is Rust? a: A language"), ("What is Rust?".into(), "A language".into()));
        assert_eq!(fields("Q:Ferris A:crab"), ("Ferris".into(), "crab".into()));
    }

    #[test]
    fn test_question_answer_beats_colon_split() {
        assert_eq!(detect_format("Q: 2+2 A: 4"), Some(LineFormat::QuestionAnswer));
        assert_eq!(fields("Q: Ratio of a:b? A: 1:2"), ("Ratio of".into(), "b? A: 1:2".into()));
    }

    #[test]
    fn test_question_answer_beats_pipe_split() {
        assert_eq!(fields("Q: What does a|b mean? A: bitwise or"), ("What does a|b mean?".into(), "bitwise or".into()));
    }

    #[test]
    fn test_answer_marker_without_space() {
        assert_eq!(fields("Q:capitalA:Paris"), ("capital".into(), "Paris".into()));
        assert_eq!(fields("Q: 2+2=4A: true"), ("2+2=4".into(), "true".into()));
        assert_eq!(fields("q:whatA:x"), ("what".into(), "x".into()));
        assert_eq!(detect_format("Q:capitalA:Paris"), Some(LineFormat::QuestionAnswer));
    }

    #[test]
    fn test_first_answer_marker_wins() {
        assert_eq!(fields("Q: Is Java: a language? A: yes"), ("Is Jav".into(), ": a language? A: yes".into()));
    }

    #[test]
    fn test_question_without_answer_marker_falls_back_to_colon() {
        assert_eq!(detect_format("Q: lonely question"), Some(LineFormat::Colon));
        assert_eq!(fields("Q: lonely question"), ("Q".into(), "lonely question".into()));
    }

    #[test]
    fn test_recognised_line_with_blank_field_is_dropped() {
        // Owned by the question/answer format, so it never reaches the colon split.
        assert!(parse_line("Q: A: orphan answer").is_none());
        assert!(parse_line("Q: orphan question A:   ").is_none());
        assert!(parse_line("|answer").is_none());
        assert!(parse_line("question|").is_none());
        assert!(parse_line(": nothing").is_none());
        assert!(parse_line(",").is_none());
    }

    #[test]
    fn test_pipe_splits_on_first_pipe() {
        assert_eq!(detect_format("a|b:c,d"), Some(LineFormat::Pipe));
        assert_eq!(fields(" left | right | more "), ("left".into(), "right | more".into()));
    }

    #[test]
    fn test_colon_splits_on_first_colon() {
        assert_eq!(detect_format("time: 12:30, noon"), Some(LineFormat::Colon));
        assert_eq!(fields("time: 12:30, noon"), ("time".into(), "12:30, noon".into()));
    }

    #[test]
    fn test_comma_splits_on_first_comma() {
        assert_eq!(detect_format("What is 2+2?,Four"), Some(LineFormat::Comma));
        assert_eq!(fields("What is 2+2?,Four, or 4"), ("What is 2+2?".into(), "Four, or 4".into()));
    }

    #[test]
    fn test_comma_keeps_quotes_as_text() {
        assert_eq!(fields("\"What is 2+2?\",\"Four\""), ("\"What is 2+2?\"".into(), "\"Four\"".into()));
        assert_eq!(fields("\"Hello\" she said,greeting"), ("\"Hello\" she said".into(), "greeting".into()));
    }

    #[test]
    fn test_comma_inside_quotes_still_splits() {
        assert_eq!(detect_format("\"one, quoted field\""), Some(LineFormat::Comma));
        assert_eq!(fields("\"one, quoted field\""), ("\"one".into(), "quoted field\"".into()));
        assert_eq!(
            fields("\"What is 2+2, 3+3?\",\"Four\""),
            ("\"What is 2+2".into(), "3+3?\",\"Four\"".into())
        );
    }

    #[test]
    fn test_text_with_blank_lines_and_crlf() {
        let cards = parse_text("Q1,A1\r\n\r\nQ2|A2\n\n  \nQ: Q3 A: A3\r\n");
        let questions: Vec<&str> = cards.iter().map(|c| c.question()).collect();
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
        assert_eq!(cards[0].answer(), "A1");
    }

    #[test]
    fn test_filters_empty_fields() {
        let cards = parse_text("Q1,A1\n,A2\nQ2,\n,Q3\n");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].question(), "Q1");
        assert_eq!(cards[0].answer(), "A1");
    }
}
