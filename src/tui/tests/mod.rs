#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

mod prompt_tests;

use std::io::Cursor;

use super::{ClearMode, Console, GridSnapshot, HudLayout, Screen, Session};

type TestSession = Session<Cursor<Vec<u8>>, Vec<u8>>;

/// Session reading `input` and rendering an 80 column HUD without banner.
fn session(input: &str) -> TestSession {
    let console = Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        ClearMode::Ansi,
    );
    let screen = Screen::new(HudLayout {
        width: 80,
        banner: Vec::new(),
        header: Vec::new(),
        color: false,
    });
    Session::new(console, screen)
}

/// Everything written after each screen clear, one entry per frame.
fn frames(session: &TestSession) -> Vec<String> {
    let output = String::from_utf8_lossy(session.console.output()).to_string();
    output
        .split("\x1b[2J")
        .skip(1)
        .map(String::from)
        .collect()
}

fn ten_by_ten() -> GridSnapshot {
    GridSnapshot {
        rows: 10,
        columns: 10,
        occupied: 0,
    }
}
