//! Retry-until-valid prompts.
//!
//! Every prompt runs the same cycle: render a frame, read one value, validate
//! it, and either commit, abort, or render again with an error banner. The
//! cycle is a plain loop, so any number of invalid answers in a row costs no
//! stack.

use std::{
    fmt,
    io::{BufRead, Write},
};

use anyhow::{Result, ensure};
use bon::Builder;
use log::debug;

use super::{
    console::{Console, Entry},
    format::echo_line,
    screen::{FrameText, GridSnapshot, Screen},
};

pub const DEFAULT_CHOICE_PROMPT: &str = "Enter your choice: ";
pub const DEFAULT_TEXT_PROMPT: &str = "Enter input: ";
pub const INVALID_TYPE_MESSAGE: &str = "Invalid input! Please enter an integer.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Invalid input! Please enter a valid option.";
pub const EMPTY_MESSAGE: &str = "Invalid input! Please enter a non-empty string.";

/// The console together with the screen it renders.
pub struct Session<R, W> {
    pub console: Console<R, W>,
    pub screen: Screen,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    #[must_use]
    pub fn new(console: Console<R, W>, screen: Screen) -> Self {
        Self { console, screen }
    }

    /// Renders and presents one frame.
    pub fn show(&mut self, grid: GridSnapshot, text: &FrameText<'_>) -> Result<()> {
        let frame = self.screen.render_frame(grid, text);
        self.console.present(&frame)
    }
}

/// Decision taken on one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<T> {
    /// The answer is accepted.
    Commit(T),
    /// The answer is an abort sentinel; the value is handed to the caller.
    Abort(T),
    /// The answer is rejected; the message is shown on the next frame.
    Retry(String),
}

/// Final answer of one prompt invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult<T> {
    pub value: T,
    pub aborted: bool,
    /// Earlier answers of the entry sequence followed by this one.
    pub echo_text: String,
}

/// Screen text shared by every frame of one prompt invocation.
struct Frames<'a> {
    title: &'a str,
    body: &'a str,
    echo: &'a str,
    notice: Option<&'a str>,
}

/// RENDER -> READ -> VALIDATE until the answer commits or aborts.
fn run_cycle<R, W, T, F>(
    session: &mut Session<R, W>,
    grid: GridSnapshot,
    frames: &Frames<'_>,
    mut read_and_validate: F,
) -> Result<(T, bool)>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Console<R, W>) -> Result<Verdict<T>>,
{
    let mut error = frames.notice.map(str::to_string);

    loop {
        session.show(
            grid,
            &FrameText {
                title: frames.title,
                error: error.as_deref(),
                body: frames.body,
                echo: frames.echo,
            },
        )?;

        match read_and_validate(&mut session.console)? {
            Verdict::Commit(value) => return Ok((value, false)),
            Verdict::Abort(value) => return Ok((value, true)),
            Verdict::Retry(message) => {
                debug!("prompt retry: {message}");
                error = Some(message);
            }
        }
    }
}

fn finish<T: fmt::Display>(prompt: &str, echo: &str, value: T, aborted: bool) -> PromptResult<T> {
    let mut echo_text = echo.to_string();
    echo_text.push_str(&echo_line(prompt, &value.to_string()));
    PromptResult {
        value,
        aborted,
        echo_text,
    }
}

/// Prompt for an integer in `min..=max`.
///
/// ```ignore
/// let choice = IntPrompt::builder()
///     .title("[Main Menu]\nChoose an option.")
///     .body(menu)
///     .min(0)
///     .max(5)
///     .build()
///     .run(&mut session, grid.snapshot())?;
/// ```
#[derive(Debug, Clone, Builder)]
pub struct IntPrompt {
    #[builder(into)]
    title: String,
    #[builder(into, default)]
    body: String,
    #[builder(into, default = String::from(DEFAULT_CHOICE_PROMPT))]
    prompt: String,
    #[builder(default)]
    min: i64,
    #[builder(default)]
    max: i64,
    /// Answers that end the prompt as aborted. Checked before the range.
    #[builder(default = vec![0])]
    abort_sentinels: Vec<i64>,
    #[builder(into, default = String::from(INVALID_TYPE_MESSAGE))]
    invalid_type_message: String,
    #[builder(into, default = String::from(OUT_OF_RANGE_MESSAGE))]
    out_of_range_message: String,
    /// Earlier answers shown above the prompt.
    #[builder(into, default)]
    echo: String,
    /// Shown as the error banner on the first frame.
    #[builder(into)]
    notice: Option<String>,
}

impl IntPrompt {
    #[must_use]
    pub fn validate(&self, entry: Entry<i64>) -> Verdict<i64> {
        match entry {
            Entry::Malformed => Verdict::Retry(self.invalid_type_message.clone()),
            Entry::Value(value) if self.abort_sentinels.contains(&value) => Verdict::Abort(value),
            Entry::Value(value) if !(self.min..=self.max).contains(&value) => {
                Verdict::Retry(self.out_of_range_message.clone())
            }
            Entry::Value(value) => Verdict::Commit(value),
        }
    }

    pub fn run<R, W>(&self, session: &mut Session<R, W>, grid: GridSnapshot) -> Result<PromptResult<i64>>
    where
        R: BufRead,
        W: Write,
    {
        self.run_after(session, grid, &self.echo)
    }

    /// Runs the prompt below `echo` instead of the configured echo text.
    pub fn run_after<R, W>(
        &self,
        session: &mut Session<R, W>,
        grid: GridSnapshot,
        echo: &str,
    ) -> Result<PromptResult<i64>>
    where
        R: BufRead,
        W: Write,
    {
        ensure!(
            self.min <= self.max,
            "prompt range is empty: {}..={}",
            self.min,
            self.max
        );

        let frames = Frames {
            title: &self.title,
            body: &self.body,
            echo,
            notice: self.notice.as_deref(),
        };
        let (value, aborted) = run_cycle(session, grid, &frames, |console| {
            Ok(self.validate(console.read_int(&self.prompt)?))
        })?;

        Ok(finish(&self.prompt, echo, value, aborted))
    }
}

/// Prompt for one line of text.
///
/// An empty answer is rejected with `empty_message`; setting that message to
/// an empty string accepts empty answers.
#[derive(Debug, Clone, Builder)]
pub struct TextPrompt {
    #[builder(into)]
    title: String,
    #[builder(into, default)]
    body: String,
    #[builder(into, default = String::from(DEFAULT_TEXT_PROMPT))]
    prompt: String,
    #[builder(into, default = String::from(EMPTY_MESSAGE))]
    empty_message: String,
    /// Answers that end the prompt as aborted. Checked before emptiness.
    #[builder(default)]
    abort_sentinels: Vec<String>,
    #[builder(into, default)]
    echo: String,
    #[builder(into)]
    notice: Option<String>,
}

impl TextPrompt {
    #[must_use]
    pub fn validate(&self, value: String) -> Verdict<String> {
        if self.abort_sentinels.contains(&value) {
            Verdict::Abort(value)
        } else if value.is_empty() && !self.empty_message.is_empty() {
            Verdict::Retry(self.empty_message.clone())
        } else {
            Verdict::Commit(value)
        }
    }

    pub fn run<R, W>(&self, session: &mut Session<R, W>, grid: GridSnapshot) -> Result<PromptResult<String>>
    where
        R: BufRead,
        W: Write,
    {
        self.run_after(session, grid, &self.echo)
    }

    /// Runs the prompt below `echo` instead of the configured echo text.
    pub fn run_after<R, W>(
        &self,
        session: &mut Session<R, W>,
        grid: GridSnapshot,
        echo: &str,
    ) -> Result<PromptResult<String>>
    where
        R: BufRead,
        W: Write,
    {
        let frames = Frames {
            title: &self.title,
            body: &self.body,
            echo,
            notice: self.notice.as_deref(),
        };
        let (value, aborted) = run_cycle(session, grid, &frames, |console| {
            Ok(self.validate(console.read_line(&self.prompt)?))
        })?;

        Ok(finish(&self.prompt, echo, value, aborted))
    }
}

/// Reply to a notice screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeReply {
    /// The user pressed Enter (or typed anything but the sentinel).
    Continue,
    /// The user typed the sentinel to repeat the operation.
    Again,
}

/// Shows a message screen and waits for one line.
///
/// `message` is displayed as the error banner. Typing `again` answers
/// [`NoticeReply::Again`], any other line [`NoticeReply::Continue`].
pub fn notice<R, W>(
    session: &mut Session<R, W>,
    grid: GridSnapshot,
    title: &str,
    body: &str,
    message: Option<&str>,
    again: &str,
) -> Result<NoticeReply>
where
    R: BufRead,
    W: Write,
{
    let prompt = TextPrompt::builder()
        .title(title)
        .body(body)
        .empty_message("")
        .abort_sentinels(vec![again.to_string()])
        .maybe_notice(message)
        .build();

    let result = prompt.run(session, grid)?;
    Ok(if result.aborted {
        NoticeReply::Again
    } else {
        NoticeReply::Continue
    })
}
