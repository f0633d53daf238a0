use analysis::{Error as AnalysisError, QuestionId, Scope, Session};
use clap::builder::PossibleValuesParser;
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use polars::prelude::*;
use std::error::Error;
use std::fs::File;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputType {
    CSV,
    TABLE,
    POLAR,
}

impl OutputType {
    fn from_str(s: &str) -> Option<Self> {
        match s {
            "csv" => Some(OutputType::CSV),
            "table" => Some(OutputType::TABLE),
            "polar" => Some(OutputType::POLAR),
            _ => None,
        }
    }
}

trait Output {
    fn output(&mut self) -> Result<(), Box<dyn Error>>;
}

/// A titled frame produced for one view.
struct Report {
    title: String,
    df: DataFrame,
}

struct PolarOutput {
    reports: Vec<Report>,
}

impl PolarOutput {
    fn new(reports: Vec<Report>) -> Self {
        PolarOutput { reports }
    }
}

impl Output for PolarOutput {
    fn output(&mut self) -> Result<(), Box<dyn Error>> {
        for report in &self.reports {
            println!("{}", report.title);
            println!("{}", report.df);
        }
        Ok(())
    }
}

struct CsvOutput {
    filename: String,
    df: DataFrame,
}

impl CsvOutput {
    fn new(filename: String, df: DataFrame) -> Self {
        CsvOutput { filename, df }
    }
}

impl Output for CsvOutput {
    fn output(&mut self) -> Result<(), Box<dyn Error>> {
        let mut file = File::create(&self.filename)?;
        CsvWriter::new(&mut file).finish(&mut self.df)?;
        info!("CSV file written successfully: {}", self.filename);
        Ok(())
    }
}

struct TableOutput {
    session: Option<Session>,
    scope: Scope,
    question: QuestionId,
}

impl TableOutput {
    fn new(session: Session, scope: Scope, question: QuestionId) -> Self {
        TableOutput {
            session: Some(session),
            scope,
            question,
        }
    }
}

impl Output for TableOutput {
    fn output(&mut self) -> Result<(), Box<dyn Error>> {
        match self.session.take() {
            Some(session) => ui::tui::run(session, self.scope, self.question),
            None => Ok(()),
        }
    }
}

/// Explore a CSV of GitHub repository metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(
        short = 'F',
        long = "format",
        value_parser = PossibleValuesParser::new(["csv", "table", "polar"]),
        default_value = "polar",
        help = "output format"
    )]
    format: String,

    #[arg(long = "source", help = "repository CSV, overrides the config file")]
    source: Option<String>,

    #[arg(long = "config", default_value = config::DEFAULT_FILE, help = "config file")]
    config: String,

    #[arg(
        short = 'l',
        long = "language",
        help = "only keep repositories in LANGUAGE, repeatable, default all"
    )]
    languages: Vec<String>,

    #[arg(
        short = 'q',
        long = "question",
        value_parser = PossibleValuesParser::new(QuestionId::ALL.map(QuestionId::slug)),
        help = "question to answer; without it the filtered repositories are shown"
    )]
    question: Option<String>,

    #[arg(
        long = "output",
        default_value = "report.csv",
        help = "csv file written by --format csv"
    )]
    output: String,

    #[arg(
        long = "filtered",
        action = clap::ArgAction::SetTrue,
        help = "answer the question on the language-filtered repositories"
    )]
    filtered: bool,
}

/// The frames shown for the selected view.
///
/// A question yields its derived table; without one, the filtered
/// repositories and their top owners are shown. A question without an
/// answer on an empty table yields an empty frame.
fn reports(
    session: &Session,
    question: Option<QuestionId>,
    scope: Scope,
) -> Result<Vec<Report>, AnalysisError> {
    let Some(question) = question else {
        return Ok(vec![
            Report {
                title: "Filtered Repositories:".to_string(),
                df: session.working_table()?.frame().clone(),
            },
            Report {
                title: "Top Users by Stars:".to_string(),
                df: session.top_owners()?,
            },
        ]);
    };
    let df = match session.analyze(question, scope) {
        Ok(derived) => derived.into_frame(),
        Err(AnalysisError::EmptyTable(q)) => {
            warn!("no repositories to answer {}", q);
            DataFrame::empty()
        }
        Err(e) => return Err(e),
    };
    Ok(vec![Report {
        title: format!("{}:", question.title()),
        df,
    }])
}

fn get_output(
    output_type: OutputType,
    session: Session,
    question: Option<QuestionId>,
    scope: Scope,
    filename: String,
) -> Result<Box<dyn Output>, Box<dyn Error>> {
    let output: Box<dyn Output> = match output_type {
        OutputType::TABLE => Box::new(TableOutput::new(
            session,
            scope,
            question.unwrap_or_default(),
        )),
        OutputType::CSV => {
            let mut view = reports(&session, question, scope)?;
            Box::new(CsvOutput::new(filename, view.remove(0).df))
        }
        OutputType::POLAR => Box::new(PolarOutput::new(reports(&session, question, scope)?)),
    };
    Ok(output)
}

/// `--source` wins over the config file, which wins over the loader default.
fn source_path(args: &Args, conf: &config::Config) -> String {
    args.source
        .clone()
        .or_else(|| conf.source.clone())
        .unwrap_or_else(|| analysis::DEFAULT_SOURCE.to_string())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let conf = config::Config::load_or_default(&args.config)?;
    debug!("config: {:?}", conf);

    let source = source_path(&args, &conf);
    let table = analysis::load(&source)?;
    let mut session = Session::new(table)?;

    let languages = if args.languages.is_empty() {
        conf.languages.clone()
    } else {
        args.languages.clone()
    };
    if !languages.is_empty() {
        info!("language filter: {}", languages.join(", "));
        session.select_languages(&languages);
    }

    let scope = if args.filtered || conf.analysis.apply_language_filter {
        Scope::Filtered
    } else {
        Scope::Full
    };
    let question = match args.question.as_deref().or(conf.analysis.default_question.as_deref()) {
        Some(slug) => Some(slug.parse::<QuestionId>()?),
        None => None,
    };

    // clap only accepts the listed formats
    let out_type = OutputType::from_str(args.format.as_str()).unwrap_or(OutputType::POLAR);
    get_output(out_type, session, question, scope, args.output)?.output()
}

fn main() {
    let args = Args::parse();
    let level = if args.format == "table" { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analysis::columns::*;
    use analysis::{LanguageFilter, RepositoryTable};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn session() -> Session {
        let frame = df!(
            OWNER => &["alice", "bob"],
            NAME => &["alpha", "beta"],
            LANGUAGE => &["Rust", "Go"],
            LICENSE => &["MIT", "MIT"],
            STARS => &[50i64, 10],
            FORKS => &[5i64, 20],
            OPEN_ISSUES => &[3i64, 9],
            CREATED => &[date("2023-01-10"), date("2023-01-22")],
            UPDATED => &[date("2023-03-01"), date("2023-01-30")]
        )
        .unwrap();
        Session::new(RepositoryTable::from_frame(frame).unwrap()).unwrap()
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["repo-dive"]);
        assert_eq!(args.format, "polar");
        assert_eq!(args.config, ".repo-dive.yml");
        assert!(args.question.is_none());
        assert!(!args.filtered);
    }

    #[test]
    fn args_reject_unknown_question() {
        assert!(Args::try_parse_from(["repo-dive", "-q", "top-users"]).is_err());
        let args = Args::try_parse_from(["repo-dive", "-q", "monthly-trend", "-l", "Rust", "-l", "Go"])
            .unwrap();
        assert_eq!(args.question.as_deref(), Some("monthly-trend"));
        assert_eq!(args.languages, vec!["Rust", "Go"]);
    }

    #[test]
    fn source_falls_back_to_config_then_default() {
        let mut conf = config::Config::default();
        let args = Args::parse_from(["repo-dive"]);
        assert_eq!(source_path(&args, &conf), analysis::DEFAULT_SOURCE);

        conf.source = Some("data/repos.csv".to_string());
        assert_eq!(source_path(&args, &conf), "data/repos.csv");

        let args = Args::parse_from(["repo-dive", "--source", "other.csv"]);
        assert_eq!(source_path(&args, &conf), "other.csv");
    }

    #[test]
    fn repositories_view_without_question() {
        let mut session = session();
        session.set_filter(["Go"].into_iter().collect());
        let view = reports(&session, None, Scope::Full).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].df.height(), 1);
        assert_eq!(view[1].df.get_column_names(), vec![OWNER_KEY, TOTAL_STARS]);
    }

    #[test]
    fn unknown_languages_are_not_selected() {
        let mut session = session();
        session.select_languages(&["Go".to_string(), "COBOL".to_string()]);
        assert_eq!(session.filter().len(), 1);
        let view = reports(&session, None, Scope::Full).unwrap();
        assert_eq!(view[0].df.height(), 1);
        assert_eq!(
            view[0].df.column(NAME).unwrap().str().unwrap().get(0),
            Some("beta")
        );
    }

    #[test]
    fn empty_question_yields_empty_frame() {
        let mut session = session();
        session.set_filter(LanguageFilter::none());
        let filtered = reports(&session, Some(QuestionId::StarsVsForks), Scope::Filtered).unwrap();
        assert_eq!(filtered[0].df.height(), 0);

        let full = reports(&session, Some(QuestionId::StarsVsForks), Scope::Full).unwrap();
        assert_eq!(full[0].df.height(), 2);
    }
}
