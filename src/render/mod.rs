// ABOUTME: Table rendering for container, image and volume listings.
// ABOUTME: Column choice and cell widths follow an explicit RenderConfig.

mod containers;
mod images;
mod state;
mod table;
mod volumes;

pub use containers::{ContainerRow, render_containers};
pub use images::render_images;
pub use state::{FINISHED_WITHOUT_TIMESTAMP, state_label};
pub use volumes::render_volumes;

use crate::format::{shorten, shorten_middle};
use chrono::{DateTime, Utc};

/// Width assumed when stdout is not a terminal, so piped output is never cut.
pub const PIPE_WIDTH: usize = 999;

/// Terminal width at which the command column is shown without `-v`.
pub const WIDE: usize = 100;

/// How much detail a listing shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Normal,
    /// Adds the age column, bind addresses and the command column.
    Verbose,
    /// Everything `Verbose` shows, without shortening any cell.
    Full,
}

impl Verbosity {
    /// Map a repeated `-v` count; anything past two is `Full`.
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Full,
        }
    }
}

/// Everything a renderer needs to know about the output surface.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Output width in columns.
    pub width: usize,
    pub verbosity: Verbosity,
    /// Reference point for ages.
    pub now: DateTime<Utc>,
}

impl RenderConfig {
    pub fn new(width: usize, verbosity: Verbosity) -> Self {
        Self {
            width,
            verbosity,
            now: Utc::now(),
        }
    }

    /// Configuration for the current stdout.
    pub fn for_stdout(verbosity: Verbosity) -> Self {
        Self::new(terminal_width(), verbosity)
    }

    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    pub fn shows_command(&self) -> bool {
        self.verbose() || self.width >= WIDE
    }

    /// Shorten `s` to `share` of the width, from the end.
    pub fn fit(&self, s: &str, share: f64) -> String {
        shorten(s, self.limit(share))
    }

    /// Shorten `s` to `share` of the width, eliding the middle.
    pub fn fit_middle(&self, s: &str, share: f64) -> String {
        shorten_middle(s, self.limit(share))
    }

    fn limit(&self, share: f64) -> usize {
        if self.verbosity == Verbosity::Full {
            usize::MAX
        } else {
            (self.width as f64 * share) as usize
        }
    }
}

/// Columns of the current stdout, or [`PIPE_WIDTH`] when it is not a terminal.
pub fn terminal_width() -> usize {
    let term = console::Term::stdout();
    if !term.is_term() {
        return PIPE_WIDTH;
    }
    match term.size_checked() {
        Some((_, cols)) => usize::from(cols),
        None => {
            tracing::debug!("terminal size unavailable, assuming {PIPE_WIDTH} columns");
            PIPE_WIDTH
        }
    }
}
