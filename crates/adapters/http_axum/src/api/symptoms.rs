//! Symptom checker endpoints.

use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use rehnuma_domain::symptom::{self, Symptom};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub name: String,
}

/// `GET /api/symptoms?q=`
pub async fn list(Query(query): Query<ListQuery>) -> Json<Vec<&'static Symptom>> {
    Json(symptom::filter(&query.q))
}

/// `GET /api/symptoms/lookup?name=`
pub async fn lookup(Query(query): Query<LookupQuery>) -> Json<Option<&'static Symptom>> {
    Json(symptom::find(&query.name))
}
