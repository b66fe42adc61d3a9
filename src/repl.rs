//! Interactive command loop.
//!
//! Commands follow the classic SET-family grammar: a command word, an
//! A1-notation address where applicable, and the rest of the line as the
//! raw payload (so text cells may contain spaces).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use tabula_core::{CellKind, Document};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Set {
        addr: String,
        kind: CellKind,
        payload: String,
    },
    Out(PathBuf),
    Save(PathBuf),
    Load(PathBuf),
    Show,
    Exit,
}

/// Run the command loop until EXIT or end of input.
pub fn run(doc: &mut Document) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{}", doc.render());

    let mut line = String::new();
    loop {
        print!(">> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match parse_command(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = execute(doc, command) {
                    eprintln!("Error: {}", e);
                }
            }
            Err(message) => eprintln!("Error: {}", message),
        }
    }

    Ok(())
}

fn execute(doc: &mut Document, command: Command) -> tabula_core::Result<()> {
    match command {
        Command::Set {
            addr,
            kind,
            payload,
        } => {
            doc.set_cell(&addr, kind, &payload)?;
            println!("{}", doc.render());
        }
        Command::Out(path) => {
            doc.write_rendered(&path)?;
            println!("Rendered to {}", path.display());
        }
        Command::Save(path) => {
            doc.save_file_as(&path)?;
            println!("Saved to {}", path.display());
        }
        Command::Load(path) => {
            doc.load_file(&path)?;
            println!("{}", doc.render());
        }
        Command::Show => println!("{}", doc.render()),
        Command::Exit => {}
    }
    Ok(())
}

/// Parse one input line. Empty lines are None; unknown commands and
/// missing arguments are reported as messages.
fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let (word, rest) = split_word(trimmed);
    let command = word.to_ascii_uppercase();

    let set_kind = match command.as_str() {
        "SETS" => Some(CellKind::Text),
        "SETN" => Some(CellKind::Number),
        "SETD" => Some(CellKind::Date),
        "SETE" => Some(CellKind::Formula),
        _ => None,
    };
    if let Some(kind) = set_kind {
        let (addr, payload) = split_word(rest);
        if addr.is_empty() || payload.is_empty() {
            return Err(format!("{} requires an address and a value", command));
        }
        return Ok(Some(Command::Set {
            addr: addr.to_string(),
            kind,
            payload: payload.to_string(),
        }));
    }

    match command.as_str() {
        "OUT" | "SAVE" | "LOAD" => {
            if rest.is_empty() {
                return Err(format!("{} requires a file path", command));
            }
            let path = PathBuf::from(rest);
            Ok(Some(match command.as_str() {
                "OUT" => Command::Out(path),
                "SAVE" => Command::Save(path),
                _ => Command::Load(path),
            }))
        }
        "SHOW" => Ok(Some(Command::Show)),
        "EXIT" | "QUIT" => Ok(Some(Command::Exit)),
        other => Err(format!("Unknown command: {}", other)),
    }
}

/// Split off the first whitespace-delimited word; the remainder keeps its
/// interior spacing.
fn split_word(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], s[i..].trim_start()),
        None => (s, ""),
    }
}
