use console::Style;
use once_cell::sync::Lazy;

pub static TITLE: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static FIELD: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static BADGE_AVAILABLE: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static BADGE_CHECKED_OUT: Lazy<Style> = Lazy::new(|| Style::new().red());

pub static MSG_INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static MSG_SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static MSG_WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MSG_ERROR: Lazy<Style> = Lazy::new(|| Style::new().red().bold());

pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
