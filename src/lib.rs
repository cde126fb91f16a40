//! Bookstore catalog application
//!
//! Resource modules for books, tags, categories and authors, plus the
//! bootstrap that wires them to the database and HTTP server.

pub mod app;
pub mod modules;

pub use app::App;
