//! # Domain Model: Record Shapes
//!
//! The catalog is generic over its record shape. [`Record`] is the contract a
//! domain type signs to live in a [`RecordStore`](crate::store::RecordStore):
//! it names a draft type (the field set without an id, what a form edits), a
//! patch type (partial fields for merges), and the handful of operations the
//! store and commands need.
//!
//! ## Drafts, patches, and ids
//!
//! - A **draft** is a record minus its id. `Default` gives the blank form.
//! - A **patch** carries optional fields; applying one shallow-merges it into
//!   a record. Patch types carry no id field, so a merge can never change a
//!   record's identity.
//! - A full draft converts into a patch (`Patch: From<Draft>`), which lets a
//!   form submission reuse the update path when an edit target is active.
//!
//! [`Book`] is the shipped shape (library domain). Adapting the catalog to
//! another inventory — medicines, gym members, dishes — means writing one more
//! `Record` implementation; the store, commands, and API come for free.

use serde::{Deserialize, Serialize};

use crate::error::KardexError;

/// Identifier assigned to a record when it enters the catalog.
///
/// Ids come from a monotonic per-store counter, start at 1, and are never
/// reused within a store's lifetime.
pub type RecordId = u64;

/// The shape parameter for the catalog.
pub trait Record: Clone {
    /// The field set without an id. `Default` is the blank form.
    type Draft: Clone + Default;

    /// Partial fields for in-place merges. Converting a full draft into a
    /// patch lets form submissions reuse the update path.
    type Patch: Clone + From<Self::Draft>;

    fn id(&self) -> RecordId;

    /// Builds a record by assigning `id` to the draft's fields.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Shallow merge: present patch fields win, absent ones keep their
    /// current value. The id is untouched by construction.
    fn apply(&mut self, patch: Self::Patch);

    /// Current field values as a draft, used to pre-fill an edit form.
    fn to_draft(&self) -> Self::Draft;

    /// One-line display label for messages.
    fn label(&self) -> String;

    /// Names of required fields that are empty after trimming whitespace.
    /// Presence is the only validation the system performs.
    fn missing_required(draft: &Self::Draft) -> Vec<&'static str>;
}

/// Book categories. The form treats "no selection" as legal, so records
/// carry `Option<Category>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Fiction,
    NonFiction,
    Science,
    Novels,
    Romantic,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::NonFiction,
        Category::Science,
        Category::Novels,
        Category::Romantic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fiction => "fiction",
            Category::NonFiction => "non-fiction",
            Category::Science => "science",
            Category::Novels => "novels",
            Category::Romantic => "romantic",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = KardexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| KardexError::Api(format!("unknown category: {}", s.trim())))
    }
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: RecordId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub category: Option<Category>,
}

/// A book's editable fields, without an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub category: Option<Category>,
}

impl Default for BookDraft {
    // The blank form: a book entering the catalog is available.
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            isbn: String::new(),
            available: true,
            category: None,
        }
    }
}

/// A partial update to a book. Absent fields keep their current value;
/// `category` distinguishes "leave alone" (outer `None`) from "clear"
/// (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Option<Category>>,
}

impl BookPatch {
    /// A one-field patch flipping availability.
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}

impl From<BookDraft> for BookPatch {
    fn from(draft: BookDraft) -> Self {
        Self {
            title: Some(draft.title),
            author: Some(draft.author),
            isbn: Some(draft.isbn),
            available: Some(draft.available),
            category: Some(draft.category),
        }
    }
}

impl Record for Book {
    type Draft = BookDraft;
    type Patch = BookPatch;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            isbn: draft.isbn,
            available: draft.available,
            category: draft.category,
        }
    }

    fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(isbn) = patch.isbn {
            self.isbn = isbn;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }

    fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            isbn: self.isbn.clone(),
            available: self.available,
            category: self.category,
        }
    }

    fn label(&self) -> String {
        self.title.clone()
    }

    fn missing_required(draft: &BookDraft) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if draft.title.trim().is_empty() {
            missing.push("title");
        }
        if draft.author.trim().is_empty() {
            missing.push("author");
        }
        if draft.isbn.trim().is_empty() {
            missing.push("isbn");
        }
        missing
    }
}
