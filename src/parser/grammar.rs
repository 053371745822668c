//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::circuit::{self, Circuit};
use crate::error::ParseError;
use crate::parser::lexer::{lex, Token};

/// Parse circuit notation into a circuit tree
pub fn parse(input: &str) -> Result<Circuit, Vec<ParseError>> {
    let len = input.len();

    let mut lex_errors = Vec::new();
    let tokens: Vec<(Token, SimpleSpan)> = lex(input)
        .filter_map(|item| match item {
            Ok((tok, span)) => Some((tok, span.into())),
            Err(span) => {
                let text = input.get(span.clone()).unwrap_or_default();
                lex_errors.push(ParseError::unrecognized(text, span));
                None
            }
        })
        .collect();
    if !lex_errors.is_empty() {
        return Err(lex_errors);
    }

    // Turn the token list into a stream that chumsky can use
    let token_stream = Stream::from_iter(tokens)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    circuit_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn circuit_parser<'a, I>() -> impl Parser<'a, I, Circuit, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let number = just(Token::Minus)
        .or_not()
        .then(select! { Token::Number(n) => n })
        .map(|(neg, n)| if neg.is_some() { -n } else { n })
        .labelled("number");

    // Component value: `(5)`, `(-2)`, `(4.7k)`
    let value = number.delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

    let element = recursive(|element| {
        let leaf = choice((
            just(Token::Wire).to(Circuit::Wire),
            just(Token::Battery)
                .ignore_then(value.clone())
                .map(circuit::battery),
            just(Token::Resistor)
                .ignore_then(value.clone())
                .map(circuit::resistor),
            just(Token::Capacitor)
                .ignore_then(value.clone())
                .map(circuit::capacitor),
        ));

        // Two or more children, optional trailing comma
        let children = element
            .separated_by(just(Token::Comma))
            .at_least(2)
            .allow_trailing()
            .collect::<Vec<_>>()
            .delimited_by(just(Token::ParenOpen), just(Token::ParenClose));

        let series_node = just(Token::Series)
            .ignore_then(children.clone())
            .try_map(|items, span| {
                Circuit::series_of(items).ok_or_else(|| Rich::custom(span, "empty series"))
            });

        let parallel_node = just(Token::Parallel)
            .ignore_then(children)
            .try_map(|items, span| {
                Circuit::parallel_of(items).ok_or_else(|| Rich::custom(span, "empty parallel"))
            });

        choice((leaf, series_node, parallel_node))
            .labelled("circuit element")
            .boxed()
    });

    element.then_ignore(end())
}
