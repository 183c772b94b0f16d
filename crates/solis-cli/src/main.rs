use std::io::BufRead;
use std::{env, fs, process::ExitCode};

use solis::{parse_expression_from_source, Interpreter, Lexer, Parser};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("--repl") | None => run_repl(),
        Some(path) => run_file(path),
    }
}

fn run_file(path: &str) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let tokens = Lexer::new(&source).tokenize();
    let mut parser = Parser::new(tokens);
    let module = parser.parse_module();

    let mut interpreter = Interpreter::new();
    if let Err(err) = interpreter.eval_module(module) {
        eprintln!("{}: {}", err.kind, err.message);
        return ExitCode::FAILURE;
    }

    if interpreter.has_binding("main") {
        let main = interpreter.get_binding("main").expect("has_binding just confirmed this");
        match interpreter.value_to_string(&main) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("{}: {}", err.kind, err.message);
                return ExitCode::FAILURE;
            }
        }
    } else {
        for name in interpreter.get_binding_names() {
            let value = interpreter.get_binding(&name).expect("name came from get_binding_names");
            match interpreter.value_to_string(&value) {
                Ok(rendered) => println!("{name} = {rendered}"),
                Err(err) => eprintln!("{name}: {}: {}", err.kind, err.message),
            }
        }
    }

    ExitCode::SUCCESS
}

/// A minimal line-at-a-time loop: no history, no line-editing, no syntax
/// highlighting. Each line is parsed as a declaration if it starts with a
/// declaration keyword, otherwise as a bare expression.
fn run_repl() -> ExitCode {
    let mut interpreter = Interpreter::new();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let is_declaration = trimmed.starts_with("let")
            || trimmed.starts_with("type")
            || trimmed.starts_with("data")
            || trimmed.starts_with("trait")
            || trimmed.starts_with("impl")
            || trimmed.starts_with("module")
            || trimmed.starts_with("import");

        if is_declaration {
            let tokens = Lexer::new(trimmed).tokenize();
            let mut parser = Parser::new(tokens);
            match parser.parse_declaration() {
                Ok(decl) => {
                    if let Err(err) = interpreter.eval_and_store(decl) {
                        eprintln!("{}: {}", err.kind, err.message);
                    }
                }
                Err(err) => eprintln!("{}: {}", err.kind, err.message),
            }
        } else {
            match parse_expression_from_source(trimmed) {
                Ok(expr) => match interpreter.eval(&expr).and_then(|v| interpreter.value_to_string(&v)) {
                    Ok(rendered) => println!("{rendered}"),
                    Err(err) => eprintln!("{}: {}", err.kind, err.message),
                },
                Err(err) => eprintln!("{}: {}", err.kind, err.message),
            }
        }
    }
    ExitCode::SUCCESS
}
