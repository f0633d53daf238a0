use crate::columns::{self, COUNTS, DATES, TEXT};
use crate::error::{Error, Result};
use crate::table::RepositoryTable;
use log::{debug, info};
use polars::prelude::*;
use std::path::Path;

/// Where the dataset lives when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "github_repos.csv";

/// Loads the whole repository CSV, or fails without a partial table.
///
/// Both date columns must parse for every row; text cells that are missing
/// become empty strings and counts that do not coerce to integers become 0.
pub fn load<P: AsRef<Path>>(path: P) -> Result<RepositoryTable> {
    let path = path.as_ref();
    let fail = |reason: String| Error::DataLoad {
        path: path.display().to_string(),
        reason,
    };

    check_header(path).map_err(fail)?;

    let raw = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_try_parse_dates(true)
        .finish()
        .and_then(|q| q.collect())
        .map_err(|e| fail(e.to_string()))?;
    debug!("raw schema of {}: {:?}", path.display(), raw.schema());

    for name in DATES {
        check_dates(&raw, name).map_err(fail)?;
    }

    let mut exprs = Vec::with_capacity(columns::ALL.len());
    exprs.extend(
        TEXT.iter()
            .map(|name| col(name).cast(DataType::String).fill_null(lit(""))),
    );
    exprs.extend(
        COUNTS
            .iter()
            .map(|name| col(name).cast(DataType::Int64).fill_null(lit(0i64))),
    );
    exprs.extend(DATES.iter().map(|name| col(name).cast(DataType::Date)));

    let frame = raw
        .lazy()
        .select(exprs)
        .collect()
        .map_err(|e| fail(e.to_string()))?;
    let table = RepositoryTable::from_frame(frame)?;
    info!("loaded {} repositories from {}", table.len(), path.display());
    Ok(table)
}

/// Reads only the header row so a missing column is reported by name.
fn check_header(path: &Path) -> std::result::Result<(), String> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
    let headers = reader.headers().map_err(|e| e.to_string())?;
    let missing: Vec<&str> = columns::ALL
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h == *name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!("missing column(s): {}", missing.join(", ")))
    }
}

fn check_dates(frame: &DataFrame, name: &str) -> std::result::Result<(), String> {
    let column = frame.column(name).map_err(|e| e.to_string())?;
    match column.dtype() {
        DataType::Date | DataType::Datetime(_, _) => {}
        // a header-only file has nothing to infer a type from
        DataType::String if frame.height() == 0 => {}
        other => return Err(format!("column {name} is not a date column ({other})")),
    }
    match column.null_count() {
        0 => Ok(()),
        n => Err(format!("column {name} has {n} missing or unparseable date(s)")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "Owner,Repository_Name,Programming_Language,License_Type,Number_of_Stars,Number_of_Forks,Number_of_Open_Issues,Creation_Date,Last_Updated_Date";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_types_columns() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             alice,alpha,Rust,MIT,50,5,3,2023-01-10,2023-03-01\n\
             bob,beta,Go,,10,20,9,2023-01-22,2023-01-30\n"
        ));
        let table = load(file.path()).unwrap();
        let frame = table.frame();

        assert_eq!(table.len(), 2);
        assert_eq!(frame.get_column_names(), columns::ALL.to_vec());
        assert_eq!(frame.column(NAME).unwrap().dtype(), &DataType::String);
        assert_eq!(frame.column(STARS).unwrap().dtype(), &DataType::Int64);
        assert_eq!(frame.column(CREATED).unwrap().dtype(), &DataType::Date);
        assert_eq!(frame.column(UPDATED).unwrap().dtype(), &DataType::Date);

        let licenses: Vec<Option<&str>> = frame
            .column(LICENSE)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(licenses, vec![Some("MIT"), Some("")]);
    }

    #[test]
    fn load_truncates_datetimes_to_dates() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             alice,alpha,Rust,MIT,50,5,3,2023-01-10 08:30:00,2023-03-01 23:59:59\n"
        ));
        let table = load(file.path()).unwrap();
        assert_eq!(
            table.frame().column(CREATED).unwrap().dtype(),
            &DataType::Date
        );
    }

    #[test]
    fn load_keeps_extra_columns_out() {
        let file = write_csv(&format!(
            "{HEADER},Homepage\n\
             alice,alpha,Rust,MIT,50,5,3,2023-01-10,2023-03-01,https://example.com\n"
        ));
        let table = load(file.path()).unwrap();
        assert_eq!(table.frame().width(), 9);
    }

    #[test]
    fn load_missing_file() {
        let err = load("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, Error::DataLoad { .. }));
    }

    #[test]
    fn load_missing_column() {
        let file = write_csv(
            "Owner,Repository_Name,Programming_Language,License_Type,Number_of_Stars\n\
             alice,alpha,Rust,MIT,50\n",
        );
        match load(file.path()) {
            Err(Error::DataLoad { reason, .. }) => {
                assert!(reason.contains(FORKS));
                assert!(reason.contains(UPDATED));
            }
            other => panic!("expected a load error, got {other:?}"),
        }
    }

    #[test]
    fn load_unparseable_dates() {
        let file = write_csv(&format!(
            "{HEADER}\n\
             alice,alpha,Rust,MIT,50,5,3,yesterday,2023-03-01\n\
             bob,beta,Go,MIT,10,20,9,last week,2023-01-30\n"
        ));
        match load(file.path()) {
            Err(Error::DataLoad { reason, .. }) => assert!(reason.contains(CREATED)),
            other => panic!("expected a load error, got {other:?}"),
        }
    }

    #[test]
    fn load_header_only() {
        let file = write_csv(&format!("{HEADER}\n"));
        let table = load(file.path()).unwrap();
        assert!(table.is_empty());
        assert_eq!(
            table.frame().column(CREATED).unwrap().dtype(),
            &DataType::Date
        );
    }
}
