//! Column names of the source CSV and of the derived tables.

pub const OWNER: &str = "Owner";
pub const NAME: &str = "Repository_Name";
pub const LANGUAGE: &str = "Programming_Language";
pub const LICENSE: &str = "License_Type";
pub const STARS: &str = "Number_of_Stars";
pub const FORKS: &str = "Number_of_Forks";
pub const OPEN_ISSUES: &str = "Number_of_Open_Issues";
pub const CREATED: &str = "Creation_Date";
pub const UPDATED: &str = "Last_Updated_Date";

/// Every column a repository table carries, in table order.
pub const ALL: [&str; 9] = [
    OWNER,
    NAME,
    LANGUAGE,
    LICENSE,
    STARS,
    FORKS,
    OPEN_ISSUES,
    CREATED,
    UPDATED,
];

pub const TEXT: [&str; 4] = [OWNER, NAME, LANGUAGE, LICENSE];
pub const COUNTS: [&str; 3] = [STARS, FORKS, OPEN_ISSUES];
pub const DATES: [&str; 2] = [CREATED, UPDATED];

// derived table columns
pub const REPOSITORY: &str = "repository";
pub const LANGUAGE_KEY: &str = "language";
pub const LICENSE_KEY: &str = "license";
pub const OWNER_KEY: &str = "owner";
pub const MONTH: &str = "month";
pub const LABEL: &str = "label";
pub const COUNT: &str = "count";
pub const TOTAL: &str = "total";
pub const TOTAL_STARS: &str = "total_stars";
pub const STARS_KEY: &str = "stars";
pub const FORKS_KEY: &str = "forks";
pub const OPEN_ISSUES_KEY: &str = "open_issues";
pub const CREATED_COUNT: &str = "created";
pub const UPDATED_COUNT: &str = "updated";

/// Calendar month format used for month keys.
pub const MONTH_FORMAT: &str = "%Y-%m";
