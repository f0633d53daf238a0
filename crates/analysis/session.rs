use crate::aggregate::{aggregate, top_owners_by_stars, DerivedTable};
use crate::error::Result;
use crate::filter::{distinct_languages, filter_by_language, LanguageFilter};
use crate::question::QuestionId;
use crate::table::RepositoryTable;
use log::{debug, info, warn};
use polars::prelude::DataFrame;

/// Which table a question is asked of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Every loaded repository.
    #[default]
    Full,
    /// Only repositories passing the language filter.
    Filtered,
}

/// One user's view of the dataset: the loaded table and the languages
/// currently selected. Nothing derived from the table is kept between calls.
#[derive(Debug, Clone)]
pub struct Session {
    table: RepositoryTable,
    languages: Vec<String>,
    filter: LanguageFilter,
}

impl Session {
    /// Starts a session with every language selected.
    pub fn new(table: RepositoryTable) -> Result<Self> {
        let languages = distinct_languages(&table)?;
        let filter = languages.iter().cloned().collect();
        info!("session started: {} languages", languages.len());
        Ok(Session {
            table,
            languages,
            filter,
        })
    }

    pub fn table(&self) -> &RepositoryTable {
        &self.table
    }

    /// Every language in the table, in order of first appearance.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn filter(&self) -> &LanguageFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: LanguageFilter) {
        debug!("language filter set to {} language(s)", filter.len());
        self.filter = filter;
    }

    /// Selects the requested languages that occur in the table. Names the
    /// table does not contain are dropped with a warning.
    pub fn select_languages<S: AsRef<str>>(&mut self, requested: &[S]) {
        let (present, unknown): (Vec<&str>, Vec<&str>) = requested
            .iter()
            .map(|language| language.as_ref())
            .partition(|language| self.languages.iter().any(|l| l.as_str() == *language));
        if !unknown.is_empty() {
            warn!("ignoring languages not in the table: {}", unknown.join(", "));
        }
        self.set_filter(present.into_iter().collect());
    }

    pub fn filter_mut(&mut self) -> &mut LanguageFilter {
        &mut self.filter
    }

    /// The rows passing the current language filter.
    pub fn working_table(&self) -> Result<RepositoryTable> {
        filter_by_language(&self.table, &self.filter)
    }

    pub fn analyze(&self, question: QuestionId, scope: Scope) -> Result<DerivedTable> {
        match scope {
            Scope::Full => aggregate(&self.table, question),
            Scope::Filtered => aggregate(&self.working_table()?, question),
        }
    }

    /// Top owners by stars among the filtered repositories.
    pub fn top_owners(&self) -> Result<DataFrame> {
        top_owners_by_stars(&self.working_table()?)
    }
}
