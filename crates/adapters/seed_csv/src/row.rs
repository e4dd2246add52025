//! Raw CSV rows and their conversion into seed records.

use std::str::FromStr;

use serde::Deserialize;

use rehnuma_app::ports::{ServiceRecord, StepRecord};
use rehnuma_domain::service::{Category, NewService};
use rehnuma_domain::step::StepDraft;

use crate::error::SeedError;
use crate::source::{SERVICES_FILE, STEPS_FILE};

/// One line of `services.csv`.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceRow {
    id: String,
    title_en: String,
    #[serde(default)]
    title_ur: String,
    #[serde(rename = "type")]
    category: String,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    description_en: String,
    #[serde(default)]
    description_ur: String,
    #[serde(default)]
    checklist_en: String,
    #[serde(default)]
    checklist_ur: String,
    #[serde(default)]
    jurisdiction: Option<String>,
    #[serde(default)]
    office_locations: String,
    #[serde(default)]
    estimated_days: Option<String>,
    #[serde(default)]
    fee_structure: Option<String>,
}

/// One line of `steps.csv`.
#[derive(Debug, Deserialize)]
pub(crate) struct StepRow {
    service_id: String,
    step_number: String,
    title_en: String,
    #[serde(default)]
    title_ur: String,
    #[serde(default)]
    description_en: String,
    #[serde(default)]
    description_ur: String,
    #[serde(default)]
    image_path: Option<String>,
}

/// Decode a JSON array cell; anything that is not an array of strings is empty.
fn string_list(cell: &str) -> Vec<String> {
    serde_json::from_str(cell).unwrap_or_default()
}

fn non_blank(cell: Option<String>) -> Option<String> {
    cell.filter(|value| !value.trim().is_empty())
}

impl ServiceRow {
    pub(crate) fn into_record(self, row: usize) -> Result<ServiceRecord, SeedError> {
        let category =
            Category::from_str(self.category.trim()).map_err(|_| SeedError::UnknownType {
                file: SERVICES_FILE,
                row,
                value: self.category.clone(),
            })?;

        let service = NewService {
            title_en: self.title_en,
            title_ur: self.title_ur,
            category,
            icon: self.icon,
            description_en: self.description_en,
            description_ur: self.description_ur,
            checklist_en: string_list(&self.checklist_en),
            checklist_ur: string_list(&self.checklist_ur),
            jurisdiction: non_blank(self.jurisdiction),
            office_locations: string_list(&self.office_locations),
            estimated_days: non_blank(self.estimated_days),
            fee_structure: non_blank(self.fee_structure),
        };
        service.validate().map_err(|source| SeedError::InvalidRow {
            file: SERVICES_FILE,
            row,
            source,
        })?;

        Ok(ServiceRecord {
            source_id: self.id.trim().to_string(),
            service,
        })
    }
}

impl StepRow {
    pub(crate) fn into_record(self, row: usize) -> Result<StepRecord, SeedError> {
        let step_number =
            self.step_number
                .trim()
                .parse::<i64>()
                .map_err(|_| SeedError::InvalidStepNumber {
                    file: STEPS_FILE,
                    row,
                    value: self.step_number.clone(),
                })?;

        let step = StepDraft {
            step_number,
            title_en: self.title_en,
            title_ur: self.title_ur,
            description_en: self.description_en,
            description_ur: self.description_ur,
            image_path: non_blank(self.image_path),
        };
        step.validate().map_err(|source| SeedError::InvalidRow {
            file: STEPS_FILE,
            row,
            source,
        })?;

        Ok(StepRecord {
            source_service_id: self.service_id.trim().to_string(),
            step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_row(category: &str, checklist_en: &str) -> ServiceRow {
        ServiceRow {
            id: " 7 ".to_string(),
            title_en: "NADRA CNIC".to_string(),
            title_ur: String::new(),
            category: category.to_string(),
            icon: "IdCard".to_string(),
            description_en: "Apply for a new CNIC".to_string(),
            description_ur: String::new(),
            checklist_en: checklist_en.to_string(),
            checklist_ur: String::new(),
            jurisdiction: Some("   ".to_string()),
            office_locations: "[\"NADRA Mega Center\"]".to_string(),
            estimated_days: None,
            fee_structure: Some("Rs. 750".to_string()),
        }
    }

    #[test]
    fn should_decode_json_arrays_and_trim_source_id() {
        let record = service_row("government", "[\"B-Form\",\"Parent CNIC\"]")
            .into_record(1)
            .unwrap();
        assert_eq!(record.source_id, "7");
        assert_eq!(record.service.checklist_en, vec!["B-Form", "Parent CNIC"]);
        assert!(record.service.checklist_ur.is_empty());
        assert_eq!(record.service.office_locations, vec!["NADRA Mega Center"]);
        assert_eq!(record.service.jurisdiction, None);
        assert_eq!(record.service.fee_structure.as_deref(), Some("Rs. 750"));
    }

    #[test]
    fn should_default_to_empty_list_when_json_is_invalid() {
        let record = service_row("hospital", "not json").into_record(1).unwrap();
        assert!(record.service.checklist_en.is_empty());
    }

    #[test]
    fn should_fail_with_row_when_type_unknown() {
        let err = service_row("school", "[]").into_record(4).unwrap_err();
        assert!(matches!(err, SeedError::UnknownType { row: 4, .. }));
    }

    #[test]
    fn should_fail_with_row_when_step_number_is_not_integer() {
        let row = StepRow {
            service_id: "1".to_string(),
            step_number: "two".to_string(),
            title_en: "Token".to_string(),
            title_ur: String::new(),
            description_en: "Take a token".to_string(),
            description_ur: String::new(),
            image_path: None,
        };
        let err = row.into_record(2).unwrap_err();
        assert!(matches!(err, SeedError::InvalidStepNumber { row: 2, .. }));
    }
}
