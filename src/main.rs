use std::borrow::Cow;
use std::env;
use std::fs;
use std::process::ExitCode;

use serde::Serialize;

use garnet::syntax::lexer::Lexer;
use garnet::syntax::token_kind::TokenKind;

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: TokenKind,
    start: usize,
    end: usize,
    lexeme: Cow<'a, str>,
}

fn main() -> ExitCode {
    let mut json = false;
    let mut path = None;

    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if path.is_none() {
            path = Some(arg);
        } else {
            eprintln!("unexpected argument: {arg}");
            return ExitCode::FAILURE;
        }
    }

    let Some(path) = path else {
        eprintln!("usage: garnet <file> [--json]");
        return ExitCode::FAILURE;
    };

    let source = match fs::read(&path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut lexer = Lexer::new(&source);
    let tokens = lexer.tokenize();

    if json {
        let records: Vec<TokenRecord<'_>> = tokens
            .iter()
            .map(|token| TokenRecord {
                kind: token.kind,
                start: token.span.start,
                end: token.span.end,
                lexeme: String::from_utf8_lossy(token.lexeme(&source)),
            })
            .collect();

        match serde_json::to_string_pretty(&records) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("{path}: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for token in &tokens {
            println!(
                "{:>5}..{:<5} {:<20} {:?}",
                token.span.start,
                token.span.end,
                format!("{:?}", token.kind),
                String::from_utf8_lossy(token.lexeme(&source)),
            );
        }
    }

    ExitCode::SUCCESS
}
