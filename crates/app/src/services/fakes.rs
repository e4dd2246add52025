//! In-memory port implementations shared by the service tests.

use std::future::Future;
use std::sync::Mutex;

use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::id::{ServiceId, StepId};
use rehnuma_domain::language::Language;
use rehnuma_domain::service::{Category, NewService, Service};
use rehnuma_domain::step::{NewStep, Step};

use crate::ports::{Narrator, ServiceRepository, StepRepository};

/// Both tables behind one lock so `clear` cascades like the real store.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    services: Vec<Service>,
    steps: Vec<Step>,
    next_service_id: i64,
    next_step_id: i64,
}

impl InMemoryStore {
    pub fn service_count(&self) -> usize {
        self.inner.lock().unwrap().services.len()
    }

    pub fn step_count(&self) -> usize {
        self.inner.lock().unwrap().steps.len()
    }
}

impl ServiceRepository for InMemoryStore {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, RehnumaError>> + Send {
        let mut tables = self.inner.lock().unwrap();
        tables.next_service_id += 1;
        let created = Service::new(ServiceId::new(tables.next_service_id), service);
        tables.services.push(created.clone());
        async { Ok(created) }
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, RehnumaError>> + Send {
        let tables = self.inner.lock().unwrap();
        let result = tables.services.iter().find(|s| s.id == id).cloned();
        async { Ok(result) }
    }

    fn get_all(
        &self,
        category: Option<Category>,
    ) -> impl Future<Output = Result<Vec<Service>, RehnumaError>> + Send {
        let tables = self.inner.lock().unwrap();
        let result: Vec<Service> = tables
            .services
            .iter()
            .filter(|s| category.is_none_or(|c| s.category() == c))
            .cloned()
            .collect();
        async { Ok(result) }
    }

    fn clear(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        let mut tables = self.inner.lock().unwrap();
        *tables = Tables::default();
        async { Ok(()) }
    }
}

impl StepRepository for InMemoryStore {
    fn create(&self, step: NewStep) -> impl Future<Output = Result<Step, RehnumaError>> + Send {
        let mut tables = self.inner.lock().unwrap();
        let taken = tables.steps.iter().any(|s| {
            s.content.service_id == step.service_id && s.content.step_number == step.step_number
        });
        let result = if taken {
            Err(RehnumaError::Storage(
                "UNIQUE constraint failed: steps.service_id, steps.step_number".into(),
            ))
        } else {
            tables.next_step_id += 1;
            let created = Step::new(StepId::new(tables.next_step_id), step);
            tables.steps.push(created.clone());
            Ok(created)
        };
        async { result }
    }

    fn find_by_service_id(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<Vec<Step>, RehnumaError>> + Send {
        let tables = self.inner.lock().unwrap();
        let result: Vec<Step> = tables
            .steps
            .iter()
            .filter(|s| s.content.service_id == service_id)
            .cloned()
            .collect();
        async { Ok(result) }
    }
}

/// What a [`RecordingNarrator`] was asked to do, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Cancel,
    Speak(String, Language),
    Recognize(Language),
}

#[derive(Default)]
pub struct RecordingNarrator {
    pub calls: Mutex<Vec<Call>>,
    pub heard: Mutex<Option<String>>,
}

impl Narrator for RecordingNarrator {
    fn cancel(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        self.calls.lock().unwrap().push(Call::Cancel);
        async { Ok(()) }
    }

    fn speak(
        &self,
        text: &str,
        language: Language,
        _rate: f32,
    ) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Speak(text.to_string(), language));
        async { Ok(()) }
    }

    fn recognize(
        &self,
        language: Language,
    ) -> impl Future<Output = Result<Option<String>, RehnumaError>> + Send {
        self.calls.lock().unwrap().push(Call::Recognize(language));
        let heard = self.heard.lock().unwrap().take();
        async { Ok(heard) }
    }
}
