use std::{
    fs,
    ops::RangeInclusive,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, ensure};
use bon::Builder;
use log::info;
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::{
    common::{print_header, project_config_dir},
    default::embedded_banner,
    seats::{DEFAULT_COLUMNS, DEFAULT_ROWS, SeatGrid},
    tui::{
        ClearMode, HeaderRow, HudLayout, MAX_HUD_WIDTH, MIN_HUD_WIDTH,
        screen::{DEFAULT_HUD_WIDTH, default_header},
    },
};

const CONFIG_FILE_NAME: &str = "config.json";

/// Largest number of rows or columns the seat layout may have.
pub const MAX_DIMENSION: usize = MAX_HUD_WIDTH;

const DIMENSION_RANGE: RangeInclusive<usize> = 1..=MAX_DIMENSION;
const HUD_WIDTH_RANGE: RangeInclusive<usize> = MIN_HUD_WIDTH..=MAX_HUD_WIDTH;

/// Command line values that take precedence over the config file.
#[derive(Debug, Default, clap::Args)]
pub struct ConfigOverrides {
    /// HUD width in columns (60-100)
    #[arg(long)]
    pub width: Option<usize>,

    /// Initial number of seat rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Initial number of seat columns
    #[arg(long)]
    pub columns: Option<usize>,

    /// How the screen is cleared between frames
    #[arg(long, value_enum)]
    pub clear: Option<ClearMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct DisplayConfig {
    #[builder(default = DEFAULT_HUD_WIDTH)]
    pub hud_width: usize,
    #[builder(default)]
    pub clear: ClearMode,
    /// Colour the error banner (default: true)
    #[builder(default = true)]
    pub color: bool,
    /// Rows of the header block under the banner.
    #[builder(default = default_header())]
    pub header: Vec<HeaderRow>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct GridConfig {
    #[builder(default = DEFAULT_ROWS)]
    pub rows: usize,
    #[builder(default = DEFAULT_COLUMNS)]
    pub columns: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Config {
    #[builder(default)]
    pub display: DisplayConfig,
    #[builder(default)]
    pub grid: GridConfig,
}

#[derive(Tabled)]
struct ConfigDisplay {
    config_file: String,
    hud_width: usize,
    clear: ClearMode,
    color: bool,
    rows: usize,
    columns: usize,
    header: String,
}

impl ConfigDisplay {
    fn new(config: &Config, source: Option<&Path>) -> Self {
        Self {
            config_file: source.map_or_else(|| "(defaults)".to_string(), |p| p.display().to_string()),
            hud_width: config.display.hud_width,
            clear: config.display.clear,
            color: config.display.color,
            rows: config.grid.rows,
            columns: config.grid.columns,
            header: config
                .display
                .header
                .iter()
                .map(|row| format!("{} | {}", row.caption, row.tag))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

impl Config {
    pub(crate) fn load_existing(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let config: Config = serde_json::from_str(&config_string)
            .with_context(|| format!("Unable to deserialize {}", config_file.display()))?;

        Ok(config)
    }

    /// Path of the config file in the project config directory.
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Loads `path`, or the default config file when `path` is `None`.
    ///
    /// A missing default config file gives the built-in defaults; a missing
    /// explicit path is an error. Returns the file actually read.
    pub fn load(path: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = path {
            return Ok((Self::load_existing(path)?, Some(path.to_path_buf())));
        }

        let config_file = Self::default_path()?;
        if config_file.exists() {
            info!("loading config from {}", config_file.display());
            Ok((Self::load_existing(&config_file)?, Some(config_file)))
        } else {
            //
            // no config file, built-in defaults
            //
            Ok((Self::default(), None))
        }
    }

    /// Replaces file values with the ones given on the command line.
    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(width) = overrides.width {
            self.display.hud_width = width;
        }
        if let Some(rows) = overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(columns) = overrides.columns {
            self.grid.columns = columns;
        }
        if let Some(clear) = overrides.clear {
            self.display.clear = clear;
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            HUD_WIDTH_RANGE.contains(&self.display.hud_width),
            "hud_width must be between {MIN_HUD_WIDTH} and {MAX_HUD_WIDTH}, got {}",
            self.display.hud_width
        );
        ensure!(
            DIMENSION_RANGE.contains(&self.grid.rows),
            "rows must be between 1 and {MAX_DIMENSION}, got {}",
            self.grid.rows
        );
        ensure!(
            DIMENSION_RANGE.contains(&self.grid.columns),
            "columns must be between 1 and {MAX_DIMENSION}, got {}",
            self.grid.columns
        );
        for row in &self.display.header {
            row.validate().context("Invalid display.header")?;
        }
        Ok(())
    }

    /// HUD settings with the embedded banner.
    #[must_use]
    pub fn hud_layout(&self) -> HudLayout {
        HudLayout {
            width: self.display.hud_width,
            banner: embedded_banner(),
            header: self.display.header.clone(),
            color: self.display.color,
        }
    }

    /// An empty seat grid with the configured dimensions.
    #[must_use]
    pub fn seat_grid(&self) -> SeatGrid {
        SeatGrid::new(self.grid.rows, self.grid.columns)
    }
}

pub(crate) fn configuration_table(config: &Config, source: Option<&Path>) -> Table {
    let mut table = Table::new([ConfigDisplay::new(config, source)]);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));
    table
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

/// Prints the effective configuration.
pub fn show_configuration(config: &Config, source: Option<&Path>) {
    print_header();
    println!("{}", configuration_table(config, source));
}
