use crate::error_formatter;
use crate::formatter::Formatter;
use abacus::{Engine, Response};
use anyhow::{Context, Result};
use inquire::{InquireError, Text};
use std::io::{BufRead, IsTerminal};

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One calculator session: a display that is committed line by line, and
/// the `<input> = <output>` history of everything that evaluated.
struct Session<'a> {
    engine: &'a Engine,
    formatter: Formatter,
    history: Vec<Response>,
}

impl<'a> Session<'a> {
    fn new(engine: &'a Engine) -> Self {
        Self {
            engine,
            formatter: Formatter::default(),
            history: Vec::new(),
        }
    }

    fn handle(&mut self, line: &str) -> Flow {
        match line.trim() {
            "" => {}
            ":quit" | ":q" => return Flow::Quit,
            ":history" => print!("{}", self.formatter.format_history(&self.history)),
            ":clear" => self.history.clear(),
            input => match self.engine.explain(input) {
                Ok(response) => {
                    print!("{}", self.formatter.format_response(&response, false, false));
                    self.history.push(response);
                }
                Err(e) => {
                    tracing::debug!(kind = e.kind(), "evaluation failed");
                    eprintln!("{}", error_formatter::format_error(&e, input));
                }
            },
        }
        Flow::Continue
    }
}

/// Read expressions until `:quit`, Esc or end of input.
///
/// A terminal gets an inquire prompt; piped input is read line by line.
pub fn run_repl(engine: &Engine) -> Result<()> {
    let mut session = Session::new(engine);

    if !std::io::stdin().is_terminal() {
        for line in std::io::stdin().lock().lines() {
            let line = line.context("Failed to read expression")?;
            if session.handle(&line) == Flow::Quit {
                break;
            }
        }
        return Ok(());
    }

    println!("Type an expression and press Enter. Commands: :history, :clear, :quit");
    loop {
        let line = match Text::new(">")
            .with_help_message("e.g. 3+4*2, sqrt(81), 200*10%")
            .prompt()
        {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read expression"),
        };

        if session.handle(&line) == Flow::Quit {
            break;
        }
    }

    Ok(())
}
