use crate::question::QuestionId;
use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The dataset could not be read; nothing can be shown.
    #[error("failed to load {path}: {reason}")]
    DataLoad { path: String, reason: String },

    /// A sum or maximum was asked of a table without rows.
    #[error("question `{0}` needs at least one repository")]
    EmptyTable(QuestionId),

    #[error("unknown question `{0}`")]
    UnknownQuestion(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, Error>;
