use axum::Json;

use rehnuma_domain::emergency::{EMERGENCY_CONTACTS, EmergencyContact};

/// `GET /api/emergency-contacts`
pub async fn list() -> Json<&'static [EmergencyContact]> {
    Json(EMERGENCY_CONTACTS)
}
