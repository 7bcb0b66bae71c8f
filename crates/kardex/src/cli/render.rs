//! Rendering: cards, lists, and leveled messages.
//!
//! Layout math (width, truncation, padding) stays in Rust because it needs
//! Unicode-aware measurement; styling is applied per semantic element from
//! the constants in `styles`.

use kardexapp::commands::{CmdMessage, MessageLevel};
use kardexapp::model::Book;
use unicode_width::UnicodeWidthStr;

use super::styles;

/// Width of the title column on a card's header line.
pub const TITLE_WIDTH: usize = 40;

/// The application header, printed once per session.
pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        styles::HEADER.apply_to("Library catalog"),
        styles::FIELD.apply_to("Books, authors, and lending — in memory, for this session only")
    )
}

/// Truncates `text` to `width` display columns, appending an ellipsis when
/// it had to cut, then pads to exactly `width`.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width.saturating_sub(1) && text.width() > width {
            out.push('…');
            used += 1;
            break;
        }
        out.push(ch);
        used += w;
    }
    for _ in used..width {
        out.push(' ');
    }
    out
}

/// One card per book: id + title + availability badge, then field lines.
pub fn card(book: &Book) -> String {
    let badge = if book.available {
        styles::BADGE_AVAILABLE.apply_to("[available]")
    } else {
        styles::BADGE_CHECKED_OUT.apply_to("[checked out]")
    };
    let category = book
        .category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut out = String::new();
    out.push_str(&format!(
        "#{:<4} {} {}\n",
        book.id,
        styles::TITLE.apply_to(fit(&book.title, TITLE_WIDTH)),
        badge
    ));
    out.push_str(&format!(
        "      {} {}\n",
        styles::FIELD.apply_to("author  "),
        book.author
    ));
    out.push_str(&format!(
        "      {} {}\n",
        styles::FIELD.apply_to("isbn    "),
        book.isbn
    ));
    out.push_str(&format!(
        "      {} {}\n",
        styles::FIELD.apply_to("category"),
        category
    ));
    out
}

/// The full list as cards separated by blank lines.
pub fn list(books: &[Book]) -> String {
    books.iter().map(card).collect::<Vec<_>>().join("\n")
}

pub fn message_line(message: &CmdMessage) -> String {
    let style = match message.level {
        MessageLevel::Info => &styles::MSG_INFO,
        MessageLevel::Success => &styles::MSG_SUCCESS,
        MessageLevel::Warning => &styles::MSG_WARNING,
        MessageLevel::Error => &styles::MSG_ERROR,
    };
    style.apply_to(&message.content).to_string()
}

/// Prints leveled messages; `quiet` drops info-level ones.
pub fn print_messages(messages: &[CmdMessage], quiet: bool) {
    for message in messages {
        if quiet && message.level == MessageLevel::Info {
            continue;
        }
        println!("{}", message_line(message));
    }
}

pub fn error_line(content: &str) -> String {
    styles::MSG_ERROR.apply_to(content).to_string()
}

pub const HELP: &str = "\
Commands:
  add           add a book (prompts for each field)
  edit <id>     edit a book; empty reply keeps the current value,
                `-` clears the category
  cancel        leave edit mode without saving
  delete <id>   remove a book
  toggle <id>   flip availability
  list          show all books
  show <id>     show one book
  dump          print the catalog as JSON
  help          this text
  quit          end the session (the catalog is not saved)";
