//! Command dispatcher
//!
//! Turns one input line into a query, runs it and writes the result.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use todo_core::query::{Query, QueryEngine};
use todo_core::render::{render_json, render_with, TableLimits};
use todo_core::StructuredComment;

/// Printed for anything that is not a known command
pub const WRONG_COMMAND: &str = "wrong command";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Important,
    User(Option<String>),
    Sort(Option<String>),
    Date(Option<String>),
    Exit,
    Unknown(String),
}

impl Command {
    /// Parse a line. The verb ignores case; the argument is everything after
    /// the first run of whitespace, trimmed.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => {
                let rest = rest.trim();
                (verb, (!rest.is_empty()).then(|| rest.to_string()))
            }
            None => (line, None),
        };

        match verb.to_lowercase().as_str() {
            "show" => Command::Show,
            "important" => Command::Important,
            "user" => Command::User(arg),
            "sort" => Command::Sort(arg),
            "date" => Command::Date(arg),
            "exit" => Command::Exit,
            _ => Command::Unknown(line.to_string()),
        }
    }

    /// The query this command runs, if any
    fn to_query(&self) -> Option<todo_core::Result<Query>> {
        match self {
            Command::Show => Some(Ok(Query::All)),
            Command::Important => Some(Ok(Query::Important)),
            Command::User(name) => Some(Query::by_user(name.as_deref())),
            Command::Sort(criterion) => Some(Query::sorted(criterion.as_deref())),
            Command::Date(date) => Some(Query::by_date(date.as_deref())),
            Command::Exit | Command::Unknown(_) => None,
        }
    }
}

/// How results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Whether the loop should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Runs commands against a query engine and writes to `out`
pub struct Dispatcher<W: Write> {
    engine: QueryEngine,
    out: W,
    format: OutputFormat,
    limits: TableLimits,
}

impl<W: Write> Dispatcher<W> {
    /// Create a dispatcher writing tables with default limits
    pub fn new(engine: QueryEngine, out: W) -> Self {
        Self {
            engine,
            out,
            format: OutputFormat::default(),
            limits: TableLimits::default(),
        }
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the table column limits
    pub fn with_limits(mut self, limits: TableLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Write a line that is not a query result
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    /// Handle one input line.
    ///
    /// Usage mistakes and scan failures are reported and the loop goes on;
    /// only write failures are returned as errors.
    pub fn dispatch(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line);
        tracing::debug!("Dispatching {:?}", command);

        match &command {
            Command::Exit => return Ok(Outcome::Exit),
            Command::Unknown(_) => self.say(&WRONG_COMMAND.red().to_string())?,
            _ => {}
        }

        let Some(query) = command.to_query() else {
            return Ok(Outcome::Continue);
        };

        match query.and_then(|q| self.engine.run(&q)) {
            Ok(records) => self.write_records(&records)?,
            Err(err) if err.is_usage() => self.say(&err.to_string().yellow().to_string())?,
            Err(err) => {
                tracing::debug!("Query failed: {:?}", err);
                eprintln!("Error: {}", err);
            }
        }

        Ok(Outcome::Continue)
    }

    fn write_records(&mut self, records: &[StructuredComment]) -> Result<()> {
        let rendered = match self.format {
            OutputFormat::Table => render_with(records, &self.limits),
            OutputFormat::Json => format!("{}\n", render_json(records)?),
        };
        write!(self.out, "{}", rendered)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    /// Consume the dispatcher and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }
}
