//! Line-oriented terminal UI: the text layout engine and the prompt engine.
//!
//! - `format` - wrapping, alignment and width budgeting (pure)
//! - `screen` - HUD and frame rendering (pure) plus the clear primitive
//! - `console` - blocking typed reads and frame output
//! - `prompt` - retry-until-valid integer and text prompts
//! - `compound` - two-step entries built from two prompts

pub mod compound;
pub mod console;
pub mod format;
pub mod prompt;
pub mod screen;

pub use compound::{NameDescriptionPrompt, Pair, RowColumnPrompt, chain};
pub use console::{Console, Entry, InputClosed};
pub use format::{Alignment, LayoutParams};
pub use prompt::{IntPrompt, NoticeReply, PromptResult, Session, TextPrompt, Verdict, notice};
pub use screen::{
    ClearMode, FrameText, GridSnapshot, HeaderRow, HudLayout, MAX_HUD_WIDTH, MIN_HUD_WIDTH, Screen,
};

#[cfg(test)]
mod tests;
