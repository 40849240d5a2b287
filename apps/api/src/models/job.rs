use sqlx::FromRow;

/// A row of the `jobs` table, as far as matching needs it.
///
/// `salary_range` has historically held the company name. `min_experience` is
/// not part of every deployed schema, so a missing column reads as `None`.
#[derive(Debug, Clone, FromRow)]
pub struct JobRow {
    pub id: i32,
    pub title: Option<String>,
    pub location: Option<String>,
    pub salary_range: Option<String>,
    pub required_skills: Option<String>,
    #[sqlx(default)]
    pub min_experience: Option<f64>,
}
