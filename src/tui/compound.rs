//! Two-step entries: row + column, name + description.
//!
//! The second prompt only runs once the first has committed, and it shows the
//! first answer above its own prompt. A pair is either committed as a whole or
//! reported as aborted; a half-entered pair never reaches the caller.

use std::io::{BufRead, Write};

use anyhow::Result;
use bon::Builder;

use super::{
    prompt::{EMPTY_MESSAGE, INVALID_TYPE_MESSAGE, IntPrompt, PromptResult, Session, TextPrompt},
    screen::GridSnapshot,
};

/// Outcome of a two-step entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pair<A, B> {
    Committed {
        first: A,
        second: B,
        /// Echo of both answers.
        echo_text: String,
    },
    Aborted,
}

impl<A, B> Pair<A, B> {
    /// Both values when committed.
    #[must_use]
    pub fn committed(self) -> Option<(A, B)> {
        match self {
            Self::Committed { first, second, .. } => Some((first, second)),
            Self::Aborted => None,
        }
    }
}

/// Runs `first`, then `second` below the first answer's echo.
pub fn chain<R, W, A, B, F, S>(session: &mut Session<R, W>, first: F, second: S) -> Result<Pair<A, B>>
where
    R: BufRead,
    W: Write,
    F: FnOnce(&mut Session<R, W>) -> Result<PromptResult<A>>,
    S: FnOnce(&mut Session<R, W>, &str) -> Result<PromptResult<B>>,
{
    let first = first(session)?;
    if first.aborted {
        return Ok(Pair::Aborted);
    }

    let second = second(session, &first.echo_text)?;
    if second.aborted {
        return Ok(Pair::Aborted);
    }

    Ok(Pair::Committed {
        first: first.value,
        second: second.value,
        echo_text: second.echo_text,
    })
}

/// Row then column, both 1-based. Entering `0` for either aborts.
#[derive(Debug, Clone, Builder)]
pub struct RowColumnPrompt {
    #[builder(into)]
    title: String,
    #[builder(into, default)]
    body: String,
    #[builder(into, default = String::from("Enter Row number: "))]
    row_prompt: String,
    #[builder(into, default = String::from("Enter Column number: "))]
    column_prompt: String,
    max_row: i64,
    max_column: i64,
    #[builder(into, default = String::from(INVALID_TYPE_MESSAGE))]
    invalid_type_message: String,
    #[builder(into)]
    row_out_of_range_message: Option<String>,
    #[builder(into)]
    column_out_of_range_message: Option<String>,
}

impl RowColumnPrompt {
    fn row(&self) -> IntPrompt {
        let message = self.row_out_of_range_message.clone().unwrap_or_else(|| {
            format!(
                "Invalid input! Number of row must be between 1 and {}.",
                self.max_row
            )
        });
        IntPrompt::builder()
            .title(self.title.as_str())
            .body(self.body.as_str())
            .prompt(self.row_prompt.as_str())
            .min(1)
            .max(self.max_row)
            .invalid_type_message(self.invalid_type_message.as_str())
            .out_of_range_message(message)
            .build()
    }

    fn column(&self) -> IntPrompt {
        let message = self
            .column_out_of_range_message
            .clone()
            .unwrap_or_else(|| {
                format!(
                    "Invalid input! Number of column must be between 1 and {}.",
                    self.max_column
                )
            });
        IntPrompt::builder()
            .title(self.title.as_str())
            .body(self.body.as_str())
            .prompt(self.column_prompt.as_str())
            .min(1)
            .max(self.max_column)
            .invalid_type_message(self.invalid_type_message.as_str())
            .out_of_range_message(message)
            .build()
    }

    pub fn run<R, W>(&self, session: &mut Session<R, W>, grid: GridSnapshot) -> Result<Pair<i64, i64>>
    where
        R: BufRead,
        W: Write,
    {
        let (row, column) = (self.row(), self.column());
        chain(
            session,
            |session| row.run(session, grid),
            |session, echo| column.run_after(session, grid, echo),
        )
    }
}

/// Name then description. The description may be left empty; entering the
/// sentinel for either field aborts.
#[derive(Debug, Clone, Builder)]
pub struct NameDescriptionPrompt {
    #[builder(into)]
    title: String,
    #[builder(into, default)]
    body: String,
    #[builder(into, default = String::from("Enter Name: "))]
    name_prompt: String,
    #[builder(into, default = String::from("Enter Description: "))]
    description_prompt: String,
    #[builder(into, default = String::from(EMPTY_MESSAGE))]
    name_empty_message: String,
    /// Empty accepts an empty description.
    #[builder(into, default)]
    description_empty_message: String,
    #[builder(default = vec![String::from("0")])]
    abort_sentinels: Vec<String>,
}

impl NameDescriptionPrompt {
    fn field(&self, prompt: &str, empty_message: &str) -> TextPrompt {
        TextPrompt::builder()
            .title(self.title.as_str())
            .body(self.body.as_str())
            .prompt(prompt)
            .empty_message(empty_message)
            .abort_sentinels(self.abort_sentinels.clone())
            .build()
    }

    pub fn run<R, W>(
        &self,
        session: &mut Session<R, W>,
        grid: GridSnapshot,
    ) -> Result<Pair<String, String>>
    where
        R: BufRead,
        W: Write,
    {
        let name = self.field(&self.name_prompt, &self.name_empty_message);
        let description = self.field(&self.description_prompt, &self.description_empty_message);
        chain(
            session,
            |session| name.run(session, grid),
            |session, echo| description.run_after(session, grid, echo),
        )
    }
}
