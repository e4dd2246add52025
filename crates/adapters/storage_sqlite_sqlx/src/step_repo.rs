use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rehnuma_app::ports::StepRepository;
use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::id::{ServiceId, StepId};
use rehnuma_domain::step::{NewStep, Step};

use crate::error::StorageError;

struct Wrapper(Step);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let service_id: i64 = row.try_get("service_id")?;

        Ok(Self(Step::new(
            StepId::new(id),
            NewStep {
                service_id: ServiceId::new(service_id),
                step_number: row.try_get("step_number")?,
                title_en: row.try_get("title_en")?,
                title_ur: row.try_get("title_ur")?,
                description_en: row.try_get("description_en")?,
                description_ur: row.try_get("description_ur")?,
                image_path: row.try_get("image_path")?,
            },
        )))
    }
}

const INSERT: &str = r"
    INSERT INTO steps (service_id, step_number, title_en, title_ur, description_en, description_ur, image_path)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_SERVICE: &str =
    "SELECT * FROM steps WHERE service_id = ? ORDER BY step_number ASC";

/// `SQLite`-backed step repository.
pub struct SqliteStepRepository {
    pool: SqlitePool,
}

impl SqliteStepRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl StepRepository for SqliteStepRepository {
    fn create(&self, step: NewStep) -> impl Future<Output = Result<Step, RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(step.service_id.get())
                .bind(step.step_number)
                .bind(&step.title_en)
                .bind(&step.title_ur)
                .bind(&step.description_en)
                .bind(&step.description_ur)
                .bind(&step.image_path)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Step::new(StepId::new(result.last_insert_rowid()), step))
        }
    }

    fn find_by_service_id(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<Vec<Step>, RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SERVICE)
                .bind(service_id.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
