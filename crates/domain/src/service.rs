//! Service: a guided bureaucratic or medical procedure.
//!
//! Services are created only by the seeder and are read-only afterwards.
//! The JSON shape uses camelCase keys and exposes the category as `type`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RehnumaError, ValidationError};
use crate::id::ServiceId;
use crate::language::Bilingual;
use crate::step::Step;

/// Top-level grouping of services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hospital,
    Government,
}

impl Category {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hospital => "hospital",
            Self::Government => "government",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(Self::Hospital),
            "government" => Ok(Self::Government),
            other => Err(ValidationError::UnknownCategory(other.to_string())),
        }
    }
}

/// A persisted service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    #[serde(flatten)]
    pub content: NewService,
}

impl Service {
    /// Attach a storage-assigned id to validated content.
    #[must_use]
    pub fn new(id: ServiceId, content: NewService) -> Self {
        Self { id, content }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.content.category
    }
}

/// Service content before the store assigns it an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    pub title_en: String,
    pub title_ur: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub icon: String,
    pub description_en: String,
    pub description_ur: String,
    pub checklist_en: Vec<String>,
    pub checklist_ur: Vec<String>,
    pub jurisdiction: Option<String>,
    pub office_locations: Vec<String>,
    pub estimated_days: Option<String>,
    pub fee_structure: Option<String>,
}

impl NewService {
    /// Create a builder for constructing a [`NewService`].
    #[must_use]
    pub fn builder(category: Category) -> NewServiceBuilder {
        NewServiceBuilder::new(category)
    }

    #[must_use]
    pub fn title(&self) -> Bilingual {
        Bilingual::new(&self.title_en, &self.title_ur)
    }

    #[must_use]
    pub fn description(&self) -> Bilingual {
        Bilingual::new(&self.description_en, &self.description_ur)
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] when the title or the description
    /// is empty in both languages.
    pub fn validate(&self) -> Result<(), RehnumaError> {
        if self.title().is_blank() {
            return Err(ValidationError::EmptyTitle.into());
        }
        if self.description().is_blank() {
            return Err(ValidationError::EmptyDescription.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`NewService`].
#[derive(Debug)]
pub struct NewServiceBuilder {
    inner: NewService,
}

impl NewServiceBuilder {
    fn new(category: Category) -> Self {
        Self {
            inner: NewService {
                title_en: String::new(),
                title_ur: String::new(),
                category,
                icon: String::new(),
                description_en: String::new(),
                description_ur: String::new(),
                checklist_en: Vec::new(),
                checklist_ur: Vec::new(),
                jurisdiction: None,
                office_locations: Vec::new(),
                estimated_days: None,
                fee_structure: None,
            },
        }
    }

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
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.inner.icon = icon.into();
        self
    }

    #[must_use]
    pub fn checklist(mut self, en: Vec<String>, ur: Vec<String>) -> Self {
        self.inner.checklist_en = en;
        self.inner.checklist_ur = ur;
        self
    }

    #[must_use]
    pub fn jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.inner.jurisdiction = Some(jurisdiction.into());
        self
    }

    #[must_use]
    pub fn office_locations(mut self, locations: Vec<String>) -> Self {
        self.inner.office_locations = locations;
        self
    }

    #[must_use]
    pub fn estimated_days(mut self, estimated_days: impl Into<String>) -> Self {
        self.inner.estimated_days = Some(estimated_days.into());
        self
    }

    #[must_use]
    pub fn fee_structure(mut self, fee_structure: impl Into<String>) -> Self {
        self.inner.fee_structure = Some(fee_structure.into());
        self
    }

    /// Consume the builder, validate, and return a [`NewService`].
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] if the bilingual title or
    /// description is blank.
    pub fn build(self) -> Result<NewService, RehnumaError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// A service merged with its ordered steps, materialised for detail reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceWithSteps {
    #[serde(flatten)]
    pub service: Service,
    pub steps: Vec<Step>,
}

impl ServiceWithSteps {
    /// Merge a service with its steps, ordering them by ascending step number.
    #[must_use]
    pub fn new(service: Service, mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|step| step.content.step_number);
        Self { service, steps }
    }
}
