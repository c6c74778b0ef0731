// file: src/presenter/terminal.rs
// description: colored terminal rendering and the interactive selection prompt
// reference: https://docs.rs/colored

use crate::config::DisplayConfig;
use crate::error::{DocrefError, Result};
use crate::models::{DocumentRecord, ListEntry};
use crate::resolver::Chooser;
use crate::utils::logging::format_success;
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Presenter {
    keyword_width: usize,
}

impl Presenter {
    pub fn new(display: &DisplayConfig) -> Self {
        Self {
            keyword_width: display.keyword_width,
        }
    }

    /// `01: keyword    description`, rank padded to two digits.
    pub fn write_listing<W: Write>(&self, out: &mut W, entries: &[ListEntry]) -> Result<()> {
        for entry in entries {
            let rank = format!("{:02}", entry.rank);
            self.write_row(out, &rank, &entry.keyword, &entry.description)?;
        }
        Ok(())
    }

    pub fn write_candidates<W: Write>(
        &self,
        out: &mut W,
        candidates: &[&DocumentRecord],
    ) -> Result<()> {
        writeln!(out, "Found multiple matches:\n")?;
        for (i, record) in candidates.iter().enumerate() {
            self.write_row(out, &i.to_string(), &record.keyword, &record.description)?;
        }
        Ok(())
    }

    pub fn write_opening<W: Write>(&self, out: &mut W, path: &Path) -> Result<()> {
        writeln!(out, "{}", format_success(&format!("Opening {}", path.display())))?;
        Ok(())
    }

    pub fn write_not_found<W: Write>(&self, out: &mut W, term: &str) -> Result<()> {
        writeln!(out, "No doc found for: {}", term)?;
        Ok(())
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        label: &str,
        keyword: &str,
        description: &str,
    ) -> Result<()> {
        let keyword = format!("{:<width$}", keyword, width = self.keyword_width);
        let line = format!("{}: {} {}", label.green(), keyword.red(), description);
        writeln!(out, "{}", line.trim_end())?;
        Ok(())
    }
}

/// Prints the candidates and reads one line of input as the answer.
pub struct PromptChooser<R, W> {
    presenter: Presenter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(presenter: Presenter, input: R, output: W) -> Self {
        Self {
            presenter,
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Chooser for PromptChooser<R, W> {
    fn choose(&mut self, candidates: &[&DocumentRecord]) -> Result<String> {
        self.presenter.write_candidates(&mut self.output, candidates)?;
        write!(self.output, "\nPlease select one: ")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(DocrefError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no selection entered",
            )));
        }

        Ok(answer)
    }
}
