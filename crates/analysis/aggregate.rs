use crate::columns::*;
use crate::error::{Error, Result};
use crate::question::QuestionId;
use crate::table::RepositoryTable;
use log::debug;
use polars::prelude::*;

type Computation = fn(&RepositoryTable) -> Result<DataFrame>;

const COMPUTATIONS: [(QuestionId, Computation); 10] = [
    (QuestionId::TopStars, top_stars),
    (QuestionId::TopForks, top_forks),
    (QuestionId::TopLanguagesByCount, top_languages_by_count),
    (QuestionId::MonthlyTrend, monthly_trend),
    (QuestionId::TopLicenses, top_licenses),
    (QuestionId::TopLanguagesByStars, top_languages_by_stars),
    (QuestionId::TopCreationMonths, top_creation_months),
    (QuestionId::LanguageDistribution, language_distribution),
    (QuestionId::StarsVsForks, stars_vs_forks),
    (QuestionId::TopOpenIssues, top_open_issues),
];

/// The answer to one question: a key column followed by one or two integer
/// value columns.
#[derive(Debug, Clone)]
pub struct DerivedTable {
    question: QuestionId,
    frame: DataFrame,
}

/// One row of a derived table, flattened for drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedRow {
    pub key: String,
    pub values: Vec<i64>,
}

impl DerivedTable {
    pub fn question(&self) -> QuestionId {
        self.question
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    /// Names of the value columns.
    pub fn value_names(&self) -> Vec<&str> {
        self.frame.get_column_names().into_iter().skip(1).collect()
    }

    pub fn rows(&self) -> Result<Vec<DerivedRow>> {
        frame_rows(&self.frame)
    }
}

/// Flattens a key-then-values frame, such as a derived table or the top
/// owners frame, into rows.
pub fn frame_rows(frame: &DataFrame) -> Result<Vec<DerivedRow>> {
    let Some((key, values)) = frame.get_columns().split_first() else {
        return Ok(Vec::new());
    };
    let keys = key.cast(&DataType::String)?;
    let keys = keys.str()?;
    let values = values
        .iter()
        .map(|s| s.cast(&DataType::Int64))
        .collect::<PolarsResult<Vec<_>>>()?;
    let values = values
        .iter()
        .map(|s| s.i64())
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok((0..frame.height())
        .map(|i| DerivedRow {
            key: keys.get(i).unwrap_or_default().to_string(),
            values: values.iter().map(|v| v.get(i).unwrap_or(0)).collect(),
        })
        .collect())
}

/// Computes the derived table answering `question` over `table`.
pub fn aggregate(table: &RepositoryTable, question: QuestionId) -> Result<DerivedTable> {
    if question.needs_rows() && table.is_empty() {
        return Err(Error::EmptyTable(question));
    }
    let (_, compute) = COMPUTATIONS
        .iter()
        .find(|(q, _)| *q == question)
        .ok_or_else(|| Error::UnknownQuestion(question.slug().to_string()))?;
    let frame = compute(table)?;
    debug!("{}: {} row(s) from {}", question, frame.height(), table.len());
    Ok(DerivedTable { question, frame })
}

/// Stars summed per owner, ten largest; the chart of the Repositories tab.
pub fn top_owners_by_stars(table: &RepositoryTable) -> Result<DataFrame> {
    let frame = table
        .lazy()
        .group_by_stable([col(OWNER)])
        .agg([col(STARS).sum().alias(TOTAL_STARS)])
        .sort([TOTAL_STARS], descending())
        .limit(10)
        .select([col(OWNER).alias(OWNER_KEY), col(TOTAL_STARS)])
        .collect()?;
    Ok(frame)
}

/// Descending sort that keeps equal rows in their current order.
fn descending() -> SortMultipleOptions {
    SortMultipleOptions::default()
        .with_order_descending(true)
        .with_nulls_last(true)
        .with_maintain_order(true)
}

fn largest_rows(
    table: &RepositoryTable,
    field: &str,
    alias: &str,
    n: IdxSize,
) -> Result<DataFrame> {
    let frame = table
        .lazy()
        .sort([field], descending())
        .limit(n)
        .select([col(NAME).alias(REPOSITORY), col(field).alias(alias)])
        .collect()?;
    Ok(frame)
}

/// Rows per distinct `field`, largest first; ties keep first-seen order.
fn value_counts(table: &RepositoryTable, field: &str, alias: &str) -> LazyFrame {
    table
        .lazy()
        .group_by_stable([col(field)])
        .agg([len().cast(DataType::Int64).alias(COUNT)])
        .sort([COUNT], descending())
        .select([col(field).alias(alias), col(COUNT)])
}

fn month_counts(table: &RepositoryTable, field: &str, alias: &str) -> LazyFrame {
    table
        .lazy()
        .select([col(field).dt().strftime(MONTH_FORMAT).alias(MONTH)])
        .group_by([col(MONTH)])
        .agg([len().cast(DataType::Int64).alias(alias)])
        .sort([MONTH], SortMultipleOptions::default())
}

fn top_stars(table: &RepositoryTable) -> Result<DataFrame> {
    largest_rows(table, STARS, STARS_KEY, 10)
}

fn top_forks(table: &RepositoryTable) -> Result<DataFrame> {
    largest_rows(table, FORKS, FORKS_KEY, 10)
}

fn top_open_issues(table: &RepositoryTable) -> Result<DataFrame> {
    largest_rows(table, OPEN_ISSUES, OPEN_ISSUES_KEY, 5)
}

fn top_languages_by_count(table: &RepositoryTable) -> Result<DataFrame> {
    Ok(value_counts(table, LANGUAGE, LANGUAGE_KEY).limit(10).collect()?)
}

fn top_licenses(table: &RepositoryTable) -> Result<DataFrame> {
    Ok(value_counts(table, LICENSE, LICENSE_KEY).limit(5).collect()?)
}

fn language_distribution(table: &RepositoryTable) -> Result<DataFrame> {
    Ok(value_counts(table, LANGUAGE, LANGUAGE_KEY).collect()?)
}

fn top_languages_by_stars(table: &RepositoryTable) -> Result<DataFrame> {
    let frame = table
        .lazy()
        .group_by_stable([col(LANGUAGE)])
        .agg([col(STARS).sum().alias(TOTAL_STARS)])
        .sort([TOTAL_STARS], descending())
        .limit(5)
        .select([col(LANGUAGE).alias(LANGUAGE_KEY), col(TOTAL_STARS)])
        .collect()?;
    Ok(frame)
}

/// Created and updated counts per month, every month of either series,
/// ascending; a month missing from one series counts 0 there.
fn monthly_trend(table: &RepositoryTable) -> Result<DataFrame> {
    let created = month_counts(table, CREATED, CREATED_COUNT);
    let updated = month_counts(table, UPDATED, UPDATED_COUNT);
    let frame = concat_lf_diagonal([created, updated], UnionArgs::default())?
        .group_by([col(MONTH)])
        .agg([
            col(CREATED_COUNT).sum().fill_null(lit(0i64)),
            col(UPDATED_COUNT).sum().fill_null(lit(0i64)),
        ])
        .sort([MONTH], SortMultipleOptions::default())
        .collect()?;
    Ok(frame)
}

/// Ten busiest creation months; equal counts stay in calendar order.
fn top_creation_months(table: &RepositoryTable) -> Result<DataFrame> {
    let frame = month_counts(table, CREATED, COUNT)
        .sort(
            [COUNT, MONTH],
            SortMultipleOptions::default()
                .with_order_descending_multi([true, false])
                .with_maintain_order(true),
        )
        .limit(10)
        .collect()?;
    Ok(frame)
}

fn stars_vs_forks(table: &RepositoryTable) -> Result<DataFrame> {
    let totals = table
        .lazy()
        .select([col(STARS).sum(), col(FORKS).sum()])
        .collect()?;
    let stars = totals.column(STARS)?.i64()?.get(0).unwrap_or(0);
    let forks = totals.column(FORKS)?.i64()?.get(0).unwrap_or(0);
    Ok(df!(
        LABEL => &[STARS_KEY, FORKS_KEY],
        TOTAL => &[stars, forks]
    )?)
}
