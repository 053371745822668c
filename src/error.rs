//! Error types for parsing circuit notation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::{Token, KEYWORDS};

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
        help: Option<String>,
    },
}

impl ParseError {
    /// Error for a character the lexer does not recognise
    pub fn unrecognized(text: &str, span: Span) -> Self {
        ParseError::Syntax {
            span,
            message: format!("Unrecognized input '{}'", text),
            expected: vec![],
            help: None,
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ParseError::Syntax {
                span,
                message,
                expected,
                help,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let mut report = Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    );
                if let Some(help) = help {
                    report = report.with_help(help);
                }
                if report
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .is_err()
                {
                    return self.to_string();
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::{RichPattern, RichReason};

        let found = err.found().cloned();

        let message = match err.reason() {
            RichReason::ExpectedFound { .. } => match &found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of input".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
            #[allow(unreachable_patterns)]
            _ => "Syntax error".to_string(),
        };

        let mut expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                RichPattern::Token(tok) => Some(format_token(tok)),
                RichPattern::Label(label) => Some(label.to_string()),
                RichPattern::EndOfInput => Some("end of input".to_string()),
                #[allow(unreachable_patterns)]
                _ => None,
            })
            .collect();
        expected.sort();
        expected.dedup();

        // Misspelled component names get a suggestion
        let help = match &found {
            Some(Token::Ident(word)) => find_similar(word, 2)
                .first()
                .map(|s| format!("did you mean '{}'?", s)),
            _ => None,
        };

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
            help,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("identifier '{}'", s),
        Token::Number(n) => format!("number {}", n),
        Token::ParenOpen => "'('".to_string(),
        Token::ParenClose => "')'".to_string(),
        Token::Comma => "','".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Wire => "keyword 'wire'".to_string(),
        Token::Battery => "keyword 'battery'".to_string(),
        Token::Resistor => "keyword 'resistor'".to_string(),
        Token::Capacitor => "keyword 'capacitor'".to_string(),
        Token::Series => "keyword 'series'".to_string(),
        Token::Parallel => "keyword 'parallel'".to_string(),
        Token::LineComment | Token::BlockComment => "comment".to_string(),
    }
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut prev: Vec<usize> = (0..=n).collect();
    for (i, ca) in a_chars.iter().enumerate() {
        let mut row = vec![i + 1; n + 1];
        for (j, cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            row[j + 1] = (prev[j + 1] + 1).min(row[j] + 1).min(prev[j] + cost);
        }
        prev = row;
    }
    prev[n]
}

/// Keywords within `max_distance` edits of `word`, closest first
fn find_similar(word: &str, max_distance: usize) -> Vec<&'static str> {
    let mut candidates: Vec<(&'static str, usize)> = KEYWORDS
        .iter()
        .map(|kw| (*kw, levenshtein_distance(kw, word)))
        .filter(|(_, d)| *d > 0 && *d <= max_distance)
        .collect();
    candidates.sort_by_key(|(_, d)| *d);
    candidates.into_iter().map(|(kw, _)| kw).collect()
}
