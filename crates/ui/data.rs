use analysis::RepositoryTable;
use polars::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;

fn deserialize_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(serde::de::Error::custom("Expected string|number")),
    }
}

/// One repository as shown in the Repositories table.
#[derive(Debug, Serialize, Deserialize)]
pub struct Data {
    #[serde(rename = "Repository_Name", deserialize_with = "deserialize_string")]
    pub repository: String,
    #[serde(rename = "Owner", deserialize_with = "deserialize_string")]
    pub owner: String,
    #[serde(rename = "Programming_Language", deserialize_with = "deserialize_string")]
    pub language: String,
    #[serde(rename = "License_Type", deserialize_with = "deserialize_string")]
    pub license: String,
    #[serde(rename = "Number_of_Stars", deserialize_with = "deserialize_string")]
    pub stars: String,
    #[serde(rename = "Number_of_Forks", deserialize_with = "deserialize_string")]
    pub forks: String,
    #[serde(rename = "Number_of_Open_Issues", deserialize_with = "deserialize_string")]
    pub open_issues: String,
    #[serde(rename = "Creation_Date", deserialize_with = "deserialize_string")]
    pub created: String,
    #[serde(rename = "Last_Updated_Date", deserialize_with = "deserialize_string")]
    pub updated: String,
}

pub const COLUMNS: usize = 9;

pub const HEADER: [&str; COLUMNS] = [
    "repository",
    "owner",
    "language",
    "license",
    "stars",
    "forks",
    "issues",
    "created",
    "updated",
];

impl Data {
    pub const fn ref_array(&self) -> [&String; COLUMNS] {
        [
            &self.repository,
            &self.owner,
            &self.language,
            &self.license,
            &self.stars,
            &self.forks,
            &self.open_issues,
            &self.created,
            &self.updated,
        ]
    }
}

/// Converts the table into display rows through polars' JSON writer.
pub fn repository_rows(table: &RepositoryTable) -> Result<Vec<Data>, Box<dyn Error>> {
    let mut frame = table.frame().clone();
    let mut j = Vec::<u8>::new();
    JsonWriter::new(&mut j)
        .with_json_format(JsonFormat::Json)
        .finish(&mut frame)?;
    let rows = serde_json::from_slice::<Vec<Data>>(&j)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_from_json() {
        let json = r#"[{"Owner":"alice","Repository_Name":"alpha","Programming_Language":"Rust",
            "License_Type":"MIT","Number_of_Stars":50,"Number_of_Forks":5,
            "Number_of_Open_Issues":null,"Creation_Date":"2023-01-10","Last_Updated_Date":"2023-03-01"}]"#;
        let rows: Vec<Data> = serde_json::from_str(json).unwrap();
        assert_eq!(rows[0].repository, "alpha");
        assert_eq!(rows[0].stars, "50");
        assert_eq!(rows[0].open_issues, "");
        assert_eq!(rows[0].created, "2023-01-10");
    }
}
