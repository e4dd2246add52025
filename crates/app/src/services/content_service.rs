//! Content service: read access to services and their steps, plus the
//! append-only write path used by the seeder.

use rehnuma_domain::error::{NotFoundError, RehnumaError};
use rehnuma_domain::id::ServiceId;
use rehnuma_domain::service::{Category, NewService, Service, ServiceWithSteps};
use rehnuma_domain::step::{NewStep, Step};

use crate::ports::{ServiceRepository, StepRepository};

/// Application service over the content store.
pub struct ContentService<SR, TR> {
    services: SR,
    steps: TR,
}

impl<SR, TR> ContentService<SR, TR>
where
    SR: ServiceRepository,
    TR: StepRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(services: SR, steps: TR) -> Self {
        Self { services, steps }
    }

    /// List services, optionally only those of one category.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_services(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<Service>, RehnumaError> {
        self.services.get_all(category).await
    }

    /// Look up a service and merge it with its steps in ascending step order.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::NotFound`] when no service with `id` exists,
    /// or a storage error from the repositories.
    pub async fn get_service(&self, id: ServiceId) -> Result<ServiceWithSteps, RehnumaError> {
        let service = self.services.get_by_id(id).await?.ok_or_else(|| {
            RehnumaError::from(NotFoundError {
                entity: "Service",
                id: id.to_string(),
            })
        })?;
        let steps = self.steps.find_by_service_id(id).await?;
        Ok(ServiceWithSteps::new(service, steps))
    }

    /// Insert a new service after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn insert_service(&self, service: NewService) -> Result<Service, RehnumaError> {
        service.validate()?;
        self.services.create(service).await
    }

    /// Insert a new step after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RehnumaError::Validation`] if invariants fail, or a
    /// storage error (including a missing owning service) from the repository.
    pub async fn insert_step(&self, step: NewStep) -> Result<Step, RehnumaError> {
        step.validate()?;
        self.steps.create(step).await
    }

    /// Drop all content; steps go with their services.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn reset(&self) -> Result<(), RehnumaError> {
        self.services.clear().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::fakes::InMemoryStore;
    use rehnuma_domain::error::ValidationError;

    type TestContentService = ContentService<Arc<InMemoryStore>, Arc<InMemoryStore>>;

    fn make_service() -> (TestContentService, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::default());
        (
            ContentService::new(Arc::clone(&store), Arc::clone(&store)),
            store,
        )
    }

    fn new_service(category: Category, title: &str) -> NewService {
        NewService::builder(category)
            .title(title, "")
            .description("guide", "رہنمائی")
            .build()
            .unwrap()
    }

    fn new_step(service_id: ServiceId, number: i64) -> NewStep {
        NewStep::builder(service_id, number)
            .title(format!("Step {number}"), "")
            .description("do this", "")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_list_only_services_of_requested_category() {
        let (svc, _) = make_service();
        svc.insert_service(new_service(Category::Hospital, "OPD"))
            .await
            .unwrap();
        svc.insert_service(new_service(Category::Government, "CNIC"))
            .await
            .unwrap();
        svc.insert_service(new_service(Category::Government, "Domicile"))
            .await
            .unwrap();

        let government = svc
            .list_services(Some(Category::Government))
            .await
            .unwrap();
        assert_eq!(government.len(), 2);
        assert!(
            government
                .iter()
                .all(|s| s.category() == Category::Government)
        );

        let all = svc.list_services(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn should_return_steps_sorted_when_inserted_out_of_order() {
        let (svc, _) = make_service();
        let service = svc
            .insert_service(new_service(Category::Hospital, "OPD"))
            .await
            .unwrap();
        for number in [3, 1, 2] {
            svc.insert_step(new_step(service.id, number)).await.unwrap();
        }

        let detail = svc.get_service(service.id).await.unwrap();
        let numbers: Vec<i64> = detail.steps.iter().map(|s| s.content.step_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(detail.service, service);
    }

    #[tokio::test]
    async fn should_not_mix_steps_of_other_services() {
        let (svc, _) = make_service();
        let a = svc
            .insert_service(new_service(Category::Hospital, "OPD"))
            .await
            .unwrap();
        let b = svc
            .insert_service(new_service(Category::Government, "CNIC"))
            .await
            .unwrap();
        svc.insert_step(new_step(a.id, 1)).await.unwrap();
        svc.insert_step(new_step(b.id, 1)).await.unwrap();
        svc.insert_step(new_step(b.id, 2)).await.unwrap();

        assert_eq!(svc.get_service(a.id).await.unwrap().steps.len(), 1);
        assert_eq!(svc.get_service(b.id).await.unwrap().steps.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_service_missing() {
        let (svc, _) = make_service();
        let result = svc.get_service(ServiceId::new(99)).await;
        assert!(matches!(result, Err(RehnumaError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_reject_invalid_step_before_storing() {
        let (svc, store) = make_service();
        let mut step = new_step(ServiceId::new(1), 1);
        step.step_number = 0;

        let result = svc.insert_step(step).await;
        assert!(matches!(
            result,
            Err(RehnumaError::Validation(ValidationError::InvalidStepNumber(0)))
        ));
        assert_eq!(store.step_count(), 0);
    }

    #[tokio::test]
    async fn should_remove_services_and_steps_on_reset() {
        let (svc, store) = make_service();
        let service = svc
            .insert_service(new_service(Category::Hospital, "OPD"))
            .await
            .unwrap();
        svc.insert_step(new_step(service.id, 1)).await.unwrap();

        svc.reset().await.unwrap();

        assert_eq!(store.service_count(), 0);
        assert_eq!(store.step_count(), 0);
        assert!(svc.list_services(None).await.unwrap().is_empty());
    }
}
