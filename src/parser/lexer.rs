//! Lexer for circuit notation using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Component keywords
    #[token("wire")]
    Wire,
    #[token("battery")]
    Battery,
    #[token("resistor")]
    Resistor,
    #[token("capacitor")]
    Capacitor,

    // Combinator keywords
    #[token("series")]
    Series,
    #[token("parallel")]
    Parallel,

    // Delimiters
    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(",")]
    Comma,
    #[token("-")]
    Minus,

    // Literals - identifiers must come after keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string(), priority = 1)]
    Ident(String),

    /// Number with an optional SI prefix, already scaled (`4.7k` is 4700)
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?[pnumkMG]?", parse_quantity)]
    Number(f64),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Every word the grammar treats as a keyword
pub const KEYWORDS: [&str; 6] = [
    "wire",
    "battery",
    "resistor",
    "capacitor",
    "series",
    "parallel",
];

/// Parse a number, folding an SI prefix into the decimal exponent so that
/// `100n` reads exactly as `100e-9`
fn parse_quantity(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    let (number, prefix_exp) = match slice.chars().last() {
        Some(c) if c.is_ascii_alphabetic() => (&slice[..slice.len() - 1], si_exponent(c)?),
        _ => return slice.parse().ok(),
    };
    let (mantissa, exp) = match number.split_once(|c| c == 'e' || c == 'E') {
        Some((m, e)) => (m, e.parse::<i32>().ok()?),
        None => (number, 0),
    };
    format!("{}e{}", mantissa, exp + prefix_exp).parse().ok()
}

fn si_exponent(prefix: char) -> Option<i32> {
    match prefix {
        'p' => Some(-12),
        'n' => Some(-9),
        'u' => Some(-6),
        'm' => Some(-3),
        'k' => Some(3),
        'M' => Some(6),
        'G' => Some(9),
        _ => None,
    }
}

/// Lex input into tokens with spans; unrecognised input is returned as an error span
pub fn lex(input: &str) -> impl Iterator<Item = Result<(Token, Span), Span>> + '_ {
    Token::lexer(input)
        .spanned()
        .map(|(tok, span)| match tok {
            Ok(t) => Ok((t, span)),
            Err(()) => Err(span),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        lex(input).filter_map(Result::ok).map(|(t, _)| t).collect()
    }

    #[test]
    fn test_component_keywords() {
        assert_eq!(
            tokens("wire battery resistor capacitor"),
            vec![Token::Wire, Token::Battery, Token::Resistor, Token::Capacitor]
        );
    }

    #[test]
    fn test_combinators_and_delimiters() {
        assert_eq!(
            tokens("series(wire, parallel(wire, wire))"),
            vec![
                Token::Series,
                Token::ParenOpen,
                Token::Wire,
                Token::Comma,
                Token::Parallel,
                Token::ParenOpen,
                Token::Wire,
                Token::Comma,
                Token::Wire,
                Token::ParenClose,
                Token::ParenClose,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("5 0.25 1e3"), vec![
            Token::Number(5.0),
            Token::Number(0.25),
            Token::Number(1000.0),
        ]);
    }

    #[test]
    fn test_si_prefixes_are_exact() {
        let cases = [
            ("1p", 1e-12),
            ("100n", 100e-9),
            ("33n", 33e-9),
            ("100u", 100e-6),
            ("4.7u", 4.7e-6),
            ("10m", 10e-3),
            ("4.7k", 4.7e3),
            ("2.2M", 2.2e6),
            ("1G", 1e9),
        ];
        for (input, expected) in cases {
            assert_eq!(tokens(input), vec![Token::Number(expected)], "input {}", input);
        }
    }

    #[test]
    fn test_si_prefix_combines_with_exponent() {
        assert_eq!(tokens("1.5e2k"), vec![Token::Number(1.5e5)]);
        assert_eq!(tokens("3E-3M"), vec![Token::Number(3e3)]);
    }

    #[test]
    fn test_negative_number_is_minus_then_number() {
        assert_eq!(tokens("-3"), vec![Token::Minus, Token::Number(3.0)]);
    }

    #[test]
    fn test_misspelled_keyword_is_identifier() {
        assert_eq!(tokens("resistr"), vec![Token::Ident("resistr".to_string())]);
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            tokens("wire // trailing\n/* block */ wire"),
            vec![Token::Wire, Token::Wire]
        );
    }

    #[test]
    fn test_unrecognised_character() {
        let errors: Vec<Span> = lex("wire $ wire").filter_map(Result::err).collect();
        assert_eq!(errors, vec![5..6]);
    }
}
