//! Step: one ordered instruction within a service.

use serde::{Deserialize, Serialize};

use crate::error::{RehnumaError, ValidationError};
use crate::id::{ServiceId, StepId};
use crate::language::Bilingual;

/// A persisted step, owned by exactly one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    #[serde(flatten)]
    pub content: NewStep,
}

impl Step {
    #[must_use]
    pub fn new(id: StepId, content: NewStep) -> Self {
        Self { id, content }
    }
}

/// Step content before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStep {
    pub service_id: ServiceId,
    /// 1-based position within the owning service.
    pub step_number: i64,
    pub title_en: String,
    pub title_ur: String,
    pub description_en: String,
    pub description_ur: String,
    pub image_path: Option<String>,
}

impl NewStep {
    #[must_use]
    pub fn builder(service_id: ServiceId, step_number: i64) -> NewStepBuilder {
        StepDraft::new(step_number).attach_to(service_id)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] when the step number is below 1
    /// or the bilingual title or description is blank.
    pub fn validate(&self) -> Result<(), RehnumaError> {
        check_content(
            self.step_number,
            [&self.title_en, &self.title_ur],
            [&self.description_en, &self.description_ur],
        )
    }
}

fn check_content(
    step_number: i64,
    [title_en, title_ur]: [&str; 2],
    [description_en, description_ur]: [&str; 2],
) -> Result<(), RehnumaError> {
    if step_number < 1 {
        return Err(ValidationError::InvalidStepNumber(step_number).into());
    }
    if Bilingual::new(title_en, title_ur).is_blank() {
        return Err(ValidationError::EmptyTitle.into());
    }
    if Bilingual::new(description_en, description_ur).is_blank() {
        return Err(ValidationError::EmptyDescription.into());
    }
    Ok(())
}

/// Step content whose owning service is not known yet.
///
/// The seeder reads steps keyed by the source file's service identifier and
/// only learns the stored [`ServiceId`] once the service row is inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDraft {
    pub step_number: i64,
    pub title_en: String,
    pub title_ur: String,
    pub description_en: String,
    pub description_ur: String,
    pub image_path: Option<String>,
}

impl StepDraft {
    #[must_use]
    pub fn new(step_number: i64) -> Self {
        Self {
            step_number,
            title_en: String::new(),
            title_ur: String::new(),
            description_en: String::new(),
            description_ur: String::new(),
            image_path: None,
        }
    }

    /// Same invariants as [`NewStep::validate`], checked before the owner exists.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] when an invariant fails.
    pub fn validate(&self) -> Result<(), RehnumaError> {
        check_content(
            self.step_number,
            [&self.title_en, &self.title_ur],
            [&self.description_en, &self.description_ur],
        )
    }

    /// Bind the draft to its owning service.
    #[must_use]
    pub fn attach_to(self, service_id: ServiceId) -> NewStepBuilder {
        NewStepBuilder {
            inner: NewStep {
                service_id,
                step_number: self.step_number,
                title_en: self.title_en,
                title_ur: self.title_ur,
                description_en: self.description_en,
                description_ur: self.description_ur,
                image_path: self.image_path,
            },
        }
    }
}

/// Builder for [`NewStep`].
#[derive(Debug)]
pub struct NewStepBuilder {
    inner: NewStep,
}

impl NewStepBuilder {
    #[must_use]
    pub fn title(mut self, en: impl Into<String>, ur: impl Into<String>) -> Self {
        self.inner.title_en = en.into();
        self.inner.title_ur = ur.into();
        self
    }

    #[must_use]
    pub fn description(mut self, en: impl Into<String>, ur: impl Into<String>) -> Self {
        self.inner.description_en = en.into();
        self.inner.description_ur = ur.into();
        self
    }

    #[must_use]
    pub fn image_path(mut self, path: impl Into<String>) -> Self {
        self.inner.image_path = Some(path.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewStep`].
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] if invariants fail.
    pub fn build(self) -> Result<NewStep, RehnumaError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_step() {
        let step = NewStep::builder(ServiceId::new(1), 1)
            .title("Visit DC Office", "ڈی سی آفس جائیں")
            .description("Go to your district office.", "")
            .image_path("/images/steps/dc-office.png")
            .build()
            .unwrap();
        assert_eq!(step.step_number, 1);
        assert_eq!(step.image_path.as_deref(), Some("/images/steps/dc-office.png"));
    }

    #[test]
    fn should_reject_step_number_zero() {
        let result = NewStep::builder(ServiceId::new(1), 0)
            .title("Step", "")
            .description("desc", "")
            .build();
        assert!(matches!(
            result,
            Err(RehnumaError::Validation(ValidationError::InvalidStepNumber(0)))
        ));
    }

    #[test]
    fn should_reject_draft_without_description() {
        let mut draft = StepDraft::new(1);
        draft.title_en = "Token".to_string();
        assert!(matches!(
            draft.validate(),
            Err(RehnumaError::Validation(ValidationError::EmptyDescription))
        ));
    }

    #[test]
    fn should_carry_draft_fields_when_attached() {
        let mut draft = StepDraft::new(2);
        draft.title_en = "Submit Form P/D".to_string();
        draft.description_ur = "فارم جمع کروائیں".to_string();

        let step = draft.attach_to(ServiceId::new(9)).build().unwrap();
        assert_eq!(step.service_id, ServiceId::new(9));
        assert_eq!(step.step_number, 2);
        assert_eq!(step.title_en, "Submit Form P/D");
    }

    #[test]
    fn should_serialize_with_camel_case_keys() {
        let step = Step::new(
            StepId::new(5),
            NewStep::builder(ServiceId::new(2), 1)
                .title("Token", "ٹوکن")
                .description("Take a token", "")
                .build()
                .unwrap(),
        );
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["serviceId"], 2);
        assert_eq!(json["stepNumber"], 1);
        assert!(json["imagePath"].is_null());
    }
}
