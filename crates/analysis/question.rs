use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// The analysis views offered on the Analysis tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuestionId {
    #[default]
    TopStars,
    TopForks,
    TopLanguagesByCount,
    MonthlyTrend,
    TopLicenses,
    TopLanguagesByStars,
    TopCreationMonths,
    LanguageDistribution,
    StarsVsForks,
    TopOpenIssues,
}

/// How a derived table is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl QuestionId {
    /// Menu order.
    pub const ALL: [QuestionId; 10] = [
        QuestionId::TopStars,
        QuestionId::TopForks,
        QuestionId::TopLanguagesByCount,
        QuestionId::MonthlyTrend,
        QuestionId::TopLicenses,
        QuestionId::TopLanguagesByStars,
        QuestionId::TopCreationMonths,
        QuestionId::LanguageDistribution,
        QuestionId::StarsVsForks,
        QuestionId::TopOpenIssues,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            QuestionId::TopStars => "top-stars",
            QuestionId::TopForks => "top-forks",
            QuestionId::TopLanguagesByCount => "top-languages",
            QuestionId::MonthlyTrend => "monthly-trend",
            QuestionId::TopLicenses => "top-licenses",
            QuestionId::TopLanguagesByStars => "top-languages-by-stars",
            QuestionId::TopCreationMonths => "top-creation-months",
            QuestionId::LanguageDistribution => "language-distribution",
            QuestionId::StarsVsForks => "stars-vs-forks",
            QuestionId::TopOpenIssues => "top-open-issues",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            QuestionId::TopStars => "Top 10 repositories by number of stars",
            QuestionId::TopForks => "Top 10 repositories by number of forks",
            QuestionId::TopLanguagesByCount => "Top 10 programming languages used in repositories",
            QuestionId::MonthlyTrend => "Monthly trend of repository creation and updates",
            QuestionId::TopLicenses => "Top 5 licenses with the most repositories",
            QuestionId::TopLanguagesByStars => "Top 5 programming languages with the most stars",
            QuestionId::TopCreationMonths => {
                "Top 10 months with the highest number of repositories created"
            }
            QuestionId::LanguageDistribution => {
                "Distribution of repositories by programming language"
            }
            QuestionId::StarsVsForks => "Comparison of stars vs. forks",
            QuestionId::TopOpenIssues => "Top 5 repositories with the most open issues",
        }
    }

    pub fn chart(self) -> ChartKind {
        match self {
            QuestionId::MonthlyTrend => ChartKind::Line,
            QuestionId::LanguageDistribution => ChartKind::Pie,
            _ => ChartKind::Bar,
        }
    }

    /// Questions that sum or rank a numeric column and so have no answer on
    /// an empty table. Counting questions answer with an empty table instead.
    pub fn needs_rows(self) -> bool {
        matches!(
            self,
            QuestionId::TopStars
                | QuestionId::TopForks
                | QuestionId::TopLanguagesByStars
                | QuestionId::StarsVsForks
                | QuestionId::TopOpenIssues
        )
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for QuestionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionId::ALL
            .into_iter()
            .find(|q| q.slug() == s)
            .ok_or_else(|| Error::UnknownQuestion(s.to_string()))
    }
}
