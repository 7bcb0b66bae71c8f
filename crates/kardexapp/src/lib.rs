//! # kardexapp
//!
//! A generic in-memory inventory catalog. One record store, one edit
//! cursor, four mutations — the core of every add/edit/delete form UI,
//! extracted into an explicit, independently testable object.
//!
//! ## Layering
//!
//! ```text
//! UI client (e.g. the kardex CLI)
//!         │
//!         ▼
//! api.rs        — facade, dispatches and returns structured results
//!         │
//!         ▼
//! commands/*    — business logic, no I/O, returns CmdResult
//!         │
//!         ▼
//! store.rs      — the only mutable state: collection + edit cursor
//! ```
//!
//! Everything from [`api`] inward is UI agnostic: plain values in,
//! structured [`commands::CmdResult`] values out. Rendering, prompting,
//! and exit codes belong to the client.
//!
//! ## Record shapes
//!
//! The store is generic over [`model::Record`]. [`model::Book`] is the
//! shipped shape; adapting the catalog to another domain is one trait
//! implementation, not a fork of the store.

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;

pub use api::KardexApi;
pub use error::{KardexError, Result};
pub use model::{Book, BookDraft, BookPatch, Category, Record, RecordId};
pub use store::RecordStore;
