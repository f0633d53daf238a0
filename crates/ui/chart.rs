use analysis::{ChartKind, DerivedRow, DerivedTable, Error, QuestionId};
use log::error;

/// What the chart pane draws for one selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartData {
    Bars {
        title: String,
        bars: Vec<BarItem>,
    },
    Trend {
        title: String,
        months: Vec<String>,
        series: Vec<(String, Vec<(f64, f64)>)>,
    },
    Empty {
        title: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarItem {
    pub label: String,
    pub value: u64,
    pub text: String,
}

impl ChartData {
    pub fn from_result(question: QuestionId, result: analysis::Result<DerivedTable>) -> Self {
        let title = question.title().to_string();
        match result {
            Ok(derived) => ChartData::from_derived(&derived),
            Err(Error::EmptyTable(_)) => ChartData::empty(title, "no repositories to analyze"),
            Err(e) => {
                error!("{}: {}", question, e);
                ChartData::empty(title, e.to_string())
            }
        }
    }

    /// Draws a derived table the way its question is charted.
    pub fn from_derived(derived: &DerivedTable) -> Self {
        let question = derived.question();
        let title = question.title().to_string();
        let rows = match derived.rows() {
            Ok(rows) => rows,
            Err(e) => return ChartData::empty(title, e.to_string()),
        };
        if rows.is_empty() {
            return ChartData::empty(title, "no repositories match the current filter");
        }
        match question.chart() {
            ChartKind::Bar => ChartData::bars(title, &rows, false),
            ChartKind::Pie => ChartData::bars(title, &rows, true),
            ChartKind::Line => ChartData::trend(title, &derived.value_names(), &rows),
        }
    }

    pub fn empty(title: impl Into<String>, message: impl Into<String>) -> Self {
        ChartData::Empty {
            title: title.into(),
            message: message.into(),
        }
    }

    /// One bar per row from the first value column. Shares of the total are
    /// appended to the bar text when drawing a distribution.
    pub fn bars(title: impl Into<String>, rows: &[DerivedRow], shares: bool) -> Self {
        let value = |row: &DerivedRow| row.values.first().copied().unwrap_or(0).max(0) as u64;
        let total: u64 = rows.iter().map(value).sum();
        let bars = rows
            .iter()
            .map(|row| {
                let v = value(row);
                let text = if shares && total > 0 {
                    format!("{} ({:.1}%)", v, v as f64 * 100.0 / total as f64)
                } else {
                    v.to_string()
                };
                BarItem {
                    label: display_key(&row.key),
                    value: v,
                    text,
                }
            })
            .collect();
        ChartData::Bars {
            title: title.into(),
            bars,
        }
    }

    /// One line per value column, x being the row index.
    pub fn trend(title: impl Into<String>, names: &[&str], rows: &[DerivedRow]) -> Self {
        let months = rows.iter().map(|r| r.key.clone()).collect();
        let series = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let points = rows
                    .iter()
                    .enumerate()
                    .map(|(x, r)| (x as f64, r.values.get(i).copied().unwrap_or(0) as f64))
                    .collect();
                (name.to_string(), points)
            })
            .collect();
        ChartData::Trend {
            title: title.into(),
            months,
            series,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ChartData::Bars { title, .. }
            | ChartData::Trend { title, .. }
            | ChartData::Empty { title, .. } => title,
        }
    }
}

/// Missing languages and licenses load as empty strings.
pub fn display_key(key: &str) -> String {
    if key.is_empty() {
        "(none)".to_string()
    } else {
        key.to_string()
    }
}
