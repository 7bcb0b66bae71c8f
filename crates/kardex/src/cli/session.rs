//! The interactive session: one prompt line per user event.
//!
//! Input is read line by line from stdin so the session works both at a
//! terminal and when scripted through a pipe (which is how the end-to-end
//! tests drive it). Prompts are written to stdout and flushed before each
//! read.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use kardexapp::model::{Book, BookDraft, BookPatch, Category, RecordId};
use kardexapp::KardexApi;
use log::debug;

use super::render;
use super::styles;

enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    api: KardexApi<Book>,
    quiet: bool,
}

impl Session {
    pub fn new(quiet: bool) -> Self {
        Self {
            api: KardexApi::new(),
            quiet,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        println!("{}", render::banner());
        if !self.quiet {
            println!("Type `help` for commands.\n");
        }

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            self.prompt()?;
            let Some(line) = lines.next() else {
                // EOF ends the session like `quit`.
                println!();
                break;
            };
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!("session input: {line}");

            match self.dispatch(line, &mut lines)? {
                Flow::Continue => {}
                Flow::Quit => break,
            }
        }
        Ok(())
    }

    /// The prompt doubles as a mode indicator: it names the edit target
    /// while one is active, so stale cursors are visible as a mode change.
    fn prompt(&self) -> Result<()> {
        let text = match self.api.current_edit().listed.first() {
            Some(book) => format!("kardex [edit #{}] > ", book.id),
            None => "kardex > ".to_string(),
        };
        print!("{}", styles::PROMPT.apply_to(text));
        io::stdout().flush()?;
        Ok(())
    }

    fn dispatch<L>(&mut self, line: &str, lines: &mut L) -> Result<Flow>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let arg = parts.next();

        match command {
            "add" => {
                // `add` always means create, even mid-edit.
                if self.api.current_edit().listed.first().is_some() {
                    let result = self.api.cancel_edit();
                    render::print_messages(&result.messages, self.quiet);
                }
                self.fill_and_submit(lines)?;
            }
            "edit" => match self.parse_id(arg) {
                Some(id) => {
                    let result = self.api.begin_edit(id);
                    render::print_messages(&result.messages, self.quiet);
                    if !result.listed.is_empty() {
                        self.fill_and_submit(lines)?;
                    }
                }
                None => return Ok(Flow::Continue),
            },
            "cancel" => {
                let result = self.api.cancel_edit();
                render::print_messages(&result.messages, self.quiet);
            }
            "delete" => {
                if let Some(id) = self.parse_id(arg) {
                    let result = self.api.delete_record(id);
                    render::print_messages(&result.messages, self.quiet);
                }
            }
            "toggle" => {
                if let Some(id) = self.parse_id(arg) {
                    match self.api.store().get(id).map(|b| b.available) {
                        Some(available) => {
                            let result = self
                                .api
                                .update_record(id, BookPatch::availability(!available));
                            render::print_messages(&result.messages, self.quiet);
                        }
                        None => println!(
                            "{}",
                            render::error_line(&format!("No record with id {id}"))
                        ),
                    }
                }
            }
            "list" => {
                let result = self.api.list();
                render::print_messages(&result.messages, self.quiet);
                if !result.listed.is_empty() {
                    println!("{}", render::list(&result.listed));
                }
            }
            "show" => {
                if let Some(id) = self.parse_id(arg) {
                    match self.api.store().get(id) {
                        Some(book) => println!("{}", render::card(book)),
                        None => println!(
                            "{}",
                            render::error_line(&format!("No record with id {id}"))
                        ),
                    }
                }
            }
            "dump" => match self.api.dump() {
                Ok(result) => {
                    if let Some(payload) = result.payload {
                        println!("{payload}");
                    }
                }
                Err(e) => println!("{}", render::error_line(&e.to_string())),
            },
            "help" => println!("{}", render::HELP),
            "quit" | "exit" | "q" => {
                if !self.quiet {
                    println!("Bye.");
                }
                return Ok(Flow::Quit);
            }
            other => {
                println!(
                    "{}",
                    render::error_line(&format!("Unknown command: {other} (try `help`)"))
                );
            }
        }
        Ok(Flow::Continue)
    }

    /// Parses an id argument, reporting bad or missing input inline.
    fn parse_id(&self, arg: Option<&str>) -> Option<RecordId> {
        match arg {
            None => {
                println!("{}", render::error_line("An id is required (see `list`)"));
                None
            }
            Some(raw) => match raw.parse::<RecordId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    println!("{}", render::error_line(&format!("Not an id: {raw}")));
                    None
                }
            },
        }
    }

    /// Runs the form (pre-filled when an edit target is active) and submits
    /// it. Validation failures print as errors and change nothing.
    fn fill_and_submit<L>(&mut self, lines: &mut L) -> Result<()>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let Some(draft) = self.fill_form(lines)? else {
            // EOF mid-form: abandon the draft.
            return Ok(());
        };
        match self.api.submit(draft) {
            Ok((_, result)) => render::print_messages(&result.messages, self.quiet),
            Err(e) => println!("{}", render::error_line(&e.to_string())),
        }
        Ok(())
    }

    /// Prompts for every field. In edit mode the buffer starts from the
    /// edit target's current values and an empty reply keeps a value; in
    /// create mode it starts blank.
    fn fill_form<L>(&mut self, lines: &mut L) -> Result<Option<BookDraft>>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let mut draft = self.api.edit_draft().unwrap_or_default();

        let Some(title) = self.prompt_text(lines, "Title", &draft.title)? else {
            return Ok(None);
        };
        draft.title = title;

        let Some(author) = self.prompt_text(lines, "Author", &draft.author)? else {
            return Ok(None);
        };
        draft.author = author;

        let Some(isbn) = self.prompt_text(lines, "ISBN", &draft.isbn)? else {
            return Ok(None);
        };
        draft.isbn = isbn;

        let Some(available) = self.prompt_bool(lines, "Available", draft.available)? else {
            return Ok(None);
        };
        draft.available = available;

        let Some(category) = self.prompt_category(lines, draft.category)? else {
            return Ok(None);
        };
        draft.category = category;

        Ok(Some(draft))
    }

    fn prompt_text<L>(
        &self,
        lines: &mut L,
        label: &str,
        current: &str,
    ) -> Result<Option<String>>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        if current.is_empty() {
            print!("  {label}: ");
        } else {
            print!("  {label} [{current}]: ");
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let input = line?;
        let input = input.trim();
        if input.is_empty() {
            Ok(Some(current.to_string()))
        } else {
            Ok(Some(input.to_string()))
        }
    }

    fn prompt_bool<L>(&self, lines: &mut L, label: &str, current: bool) -> Result<Option<bool>>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let hint = if current { "Y/n" } else { "y/N" };
        print!("  {label} [{hint}]: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let input = line?;
        let value = match input.trim().to_lowercase().as_str() {
            "" => current,
            "y" | "yes" | "true" => true,
            "n" | "no" | "false" => false,
            other => {
                println!(
                    "{}",
                    render::error_line(&format!("Not y/n: {other}; keeping current value"))
                );
                current
            }
        };
        Ok(Some(value))
    }

    fn prompt_category<L>(
        &self,
        lines: &mut L,
        current: Option<Category>,
    ) -> Result<Option<Option<Category>>>
    where
        L: Iterator<Item = io::Result<String>>,
    {
        let choices = Category::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        match current {
            Some(category) => print!("  Category ({choices}; `-` clears) [{category}]: "),
            None => print!("  Category ({choices}; empty for none): "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let input = line?;
        let input = input.trim();
        let value = match input {
            "" => current,
            "-" => None,
            raw => match raw.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    println!(
                        "{}",
                        render::error_line(&format!("{e}; keeping current value"))
                    );
                    current
                }
            },
        };
        Ok(Some(value))
    }
}
