//! `SQLite` implementation of [`ServiceRepository`].

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use rehnuma_app::ports::ServiceRepository;
use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::id::ServiceId;
use rehnuma_domain::service::{Category, NewService, Service};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Service);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Service> {
        value.map(|w| w.0)
    }
}

fn decode_list(row: &SqliteRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let category: String = row.try_get("type")?;
        let category =
            Category::from_str(&category).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Service::new(
            ServiceId::new(id),
            NewService {
                title_en: row.try_get("title_en")?,
                title_ur: row.try_get("title_ur")?,
                category,
                icon: row.try_get("icon")?,
                description_en: row.try_get("description_en")?,
                description_ur: row.try_get("description_ur")?,
                checklist_en: decode_list(row, "checklist_en")?,
                checklist_ur: decode_list(row, "checklist_ur")?,
                jurisdiction: row.try_get("jurisdiction")?,
                office_locations: decode_list(row, "office_locations")?,
                estimated_days: row.try_get("estimated_days")?,
                fee_structure: row.try_get("fee_structure")?,
            },
        )))
    }
}

const INSERT: &str = r"
    INSERT INTO services (
        title_en, title_ur, type, icon, description_en, description_ur,
        checklist_en, checklist_ur, jurisdiction, office_locations, estimated_days, fee_structure
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM services WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM services ORDER BY id";
const SELECT_BY_TYPE: &str = "SELECT * FROM services WHERE type = ? ORDER BY id";
const DELETE_STEPS: &str = "DELETE FROM steps";
const DELETE_SERVICES: &str = "DELETE FROM services";

/// `SQLite`-backed service repository.
pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ServiceRepository for SqliteServiceRepository {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let checklist_en =
                serde_json::to_string(&service.checklist_en).map_err(StorageError::from)?;
            let checklist_ur =
                serde_json::to_string(&service.checklist_ur).map_err(StorageError::from)?;
            let office_locations =
                serde_json::to_string(&service.office_locations).map_err(StorageError::from)?;

            let result = sqlx::query(INSERT)
                .bind(&service.title_en)
                .bind(&service.title_ur)
                .bind(service.category.as_str())
                .bind(&service.icon)
                .bind(&service.description_en)
                .bind(&service.description_ur)
                .bind(checklist_en)
                .bind(checklist_ur)
                .bind(&service.jurisdiction)
                .bind(office_locations)
                .bind(&service.estimated_days)
                .bind(&service.fee_structure)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Service::new(
                ServiceId::new(result.last_insert_rowid()),
                service,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(
        &self,
        category: Option<Category>,
    ) -> impl Future<Output = Result<Vec<Service>, RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = match category {
                Some(category) => {
                    sqlx::query_as(SELECT_BY_TYPE)
                        .bind(category.as_str())
                        .fetch_all(&pool)
                        .await
                }
                None => sqlx::query_as(SELECT_ALL).fetch_all(&pool).await,
            }
            .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut tx = pool.begin().await.map_err(StorageError::from)?;
            sqlx::query(DELETE_STEPS)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            sqlx::query(DELETE_SERVICES)
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;
            tx.commit().await.map_err(StorageError::from)?;

            Ok(())
        }
    }
}
