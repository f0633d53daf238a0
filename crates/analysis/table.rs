use crate::columns;
use crate::error::Result;
use polars::prelude::*;

/// The loaded repositories, one row per repository in source file order.
///
/// Filtering and aggregation only read the table and always produce new
/// frames.
#[derive(Debug, Clone)]
pub struct RepositoryTable {
    frame: DataFrame,
}

impl RepositoryTable {
    /// Wraps a frame holding every canonical column; extra columns are dropped
    /// and the canonical ones are put in order.
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let frame = frame.select(columns::ALL)?;
        Ok(RepositoryTable { frame })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub(crate) fn lazy(&self) -> LazyFrame {
        self.frame.clone().lazy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn from_frame_reorders_and_drops_extra_columns() {
        let frame = testing::sample().frame().clone();
        let reversed: Vec<&str> = columns::ALL.iter().rev().copied().collect();
        let mut shuffled = frame.select(reversed).unwrap();
        shuffled
            .with_column(Series::new("extra", vec![1i64; frame.height()]))
            .unwrap();

        let table = RepositoryTable::from_frame(shuffled).unwrap();
        assert_eq!(table.frame().get_column_names(), columns::ALL.to_vec());
        assert_eq!(table.len(), 5);
        assert!(table.frame().equals(&frame));
    }

    #[test]
    fn from_frame_rejects_missing_columns() {
        let frame = df!(columns::OWNER => &["alice"]).unwrap();
        assert!(RepositoryTable::from_frame(frame).is_err());
    }
}
