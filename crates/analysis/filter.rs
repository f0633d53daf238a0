use crate::columns::LANGUAGE;
use crate::error::Result;
use crate::table::RepositoryTable;
use log::debug;
use polars::lazy::dsl::GetOutput;
use polars::prelude::*;
use std::collections::HashSet;

/// The set of languages a user chose to look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageFilter {
    languages: HashSet<String>,
}

impl LanguageFilter {
    /// Every language present in `table`.
    pub fn all(table: &RepositoryTable) -> Result<Self> {
        Ok(distinct_languages(table)?.into_iter().collect())
    }

    pub fn none() -> Self {
        LanguageFilter::default()
    }

    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Flips membership of `language`, returning whether it is now selected.
    pub fn toggle(&mut self, language: &str) -> bool {
        if self.languages.remove(language) {
            false
        } else {
            self.languages.insert(language.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LanguageFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LanguageFilter {
            languages: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Distinct languages in order of first appearance.
pub fn distinct_languages(table: &RepositoryTable) -> Result<Vec<String>> {
    let unique = table
        .lazy()
        .select([col(LANGUAGE).unique_stable()])
        .collect()?;
    let languages = unique
        .column(LANGUAGE)?
        .str()?
        .into_iter()
        .flatten()
        .map(str::to_owned)
        .collect();
    Ok(languages)
}

/// Keeps the rows whose language is in `allowed`, in their original order.
///
/// An empty filter keeps nothing.
pub fn filter_by_language(
    table: &RepositoryTable,
    allowed: &LanguageFilter,
) -> Result<RepositoryTable> {
    let allowed = allowed.languages.clone();
    let is_allowed = move |s: Series| -> PolarsResult<Option<Series>> {
        let mask: Vec<bool> = s
            .str()?
            .into_iter()
            .map(|language| allowed.contains(language.unwrap_or("")))
            .collect();
        Ok(Some(Series::new("is_allowed", mask)))
    };
    let o = GetOutput::from_type(DataType::Boolean);
    let frame = table
        .lazy()
        .filter(col(LANGUAGE).map(is_allowed, o))
        .collect()?;
    debug!(
        "language filter kept {} of {} repositories",
        frame.height(),
        table.len()
    );
    RepositoryTable::from_frame(frame)
}
