//! Loading, filtering and aggregating the repository dataset.
//!
//! The repository table is loaded once into a polars `DataFrame`, narrowed by
//! a language filter and reduced to small derived tables, one per question.

pub mod aggregate;
pub mod columns;
pub mod error;
pub mod filter;
pub mod loader;
pub mod question;
pub mod session;
pub mod table;

pub use aggregate::{aggregate, frame_rows, top_owners_by_stars, DerivedRow, DerivedTable};
pub use error::{Error, Result};
pub use filter::{distinct_languages, filter_by_language, LanguageFilter};
pub use loader::{load, DEFAULT_SOURCE};
pub use question::{ChartKind, QuestionId};
pub use session::{Scope, Session};
pub use table::RepositoryTable;
