use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored and tables use their natural width.
const MIN_TERM_WIDTH: usize = 40;

/// Terminal capabilities resolved once at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// Color the `estado`/`activo` cells of table output.
    pub table_color: bool,
    /// Show spinners while API calls are in flight.
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let interactive = std::io::stdout().is_terminal() && !flags.quiet;
    let prefs = UiPrefs {
        table_color: interactive
            && flags.format == OutputFormat::Table
            && std::env::var_os("NO_COLOR").is_none(),
        progress: interactive && flags.format != OutputFormat::Json,
        term_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH),
    };
    if UI_PREFS.set(prefs).is_err() {
        tracing::debug!("ui preferences already initialized");
    }
}

/// Preferences set by [`init`], or plain output when it never ran (tests).
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
