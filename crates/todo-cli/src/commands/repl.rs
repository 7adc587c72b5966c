//! Interactive command loop

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::dispatch::{Dispatcher, Outcome};

/// Greeting printed before the first prompt
pub const GREETING: &str = "Please, write your command!";

/// Read commands from `input` one line at a time until `exit` or end of input
pub fn run<W: Write, R: BufRead>(dispatcher: &mut Dispatcher<W>, input: R) -> Result<()> {
    dispatcher.say(GREETING)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if dispatcher.dispatch(&line)? == Outcome::Exit {
            tracing::debug!("Exit requested");
            return Ok(());
        }
    }

    tracing::debug!("End of input");
    Ok(())
}

/// Run a fixed list of commands, stopping early at `exit`
pub fn run_batch<W: Write>(dispatcher: &mut Dispatcher<W>, commands: &[String]) -> Result<()> {
    for command in commands {
        if dispatcher.dispatch(command)? == Outcome::Exit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;
    use todo_core::query::QueryEngine;
    use todo_storage::FileSystemLister;

    fn create_test_dispatcher() -> (Dispatcher<Vec<u8>>, TempDir) {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "// TODO bob; 2019; ship it!\n").unwrap();
        let engine = QueryEngine::new(FileSystemLister::new(), dir.path(), "js");
        (Dispatcher::new(engine, Vec::new()), dir)
    }

    #[test]
    fn test_repl_stops_at_exit() {
        let (mut dispatcher, _dir) = create_test_dispatcher();
        let input = Cursor::new("nonsense\nexit\nshow\n");
        run(&mut dispatcher, input).unwrap();

        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        assert!(out.starts_with(GREETING));
        assert!(out.contains("wrong command"));
        assert!(!out.contains("ship it!"));
    }

    #[test]
    fn test_repl_ends_at_eof() {
        let (mut dispatcher, _dir) = create_test_dispatcher();
        run(&mut dispatcher, Cursor::new("show")).unwrap();

        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        assert!(out.contains("ship it!"));
    }

    #[test]
    fn test_batch_runs_in_order() {
        let (mut dispatcher, _dir) = create_test_dispatcher();
        let commands = vec!["user".to_string(), "important".to_string(), "exit".to_string(), "bogus".to_string()];
        run_batch(&mut dispatcher, &commands).unwrap();

        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        let tip = out.find("Tip:").unwrap();
        let row = out.find("ship it!").unwrap();
        assert!(tip < row);
        assert!(!out.contains("wrong command"));
    }
}
