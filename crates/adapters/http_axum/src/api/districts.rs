//! District finder endpoints.

use axum::Json;
use axum::extract::Query;
use serde::Deserialize;

use rehnuma_domain::district::{self, DISTRICTS, District};

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub area: String,
}

/// `GET /api/districts`
pub async fn list() -> Json<&'static [District]> {
    Json(DISTRICTS)
}

/// `GET /api/districts/areas`
pub async fn areas() -> Json<Vec<&'static str>> {
    Json(district::all_areas())
}

/// `GET /api/districts/lookup?area=`
///
/// An unknown area is answered with `null`, not an error.
pub async fn lookup(Query(query): Query<LookupQuery>) -> Json<Option<&'static District>> {
    Json(district::find_by_area(&query.area))
}
