//! Storage port: repository traits for the content store.
//!
//! The store is append-only at runtime: rows are created by the seeder and
//! only ever removed wholesale by [`ServiceRepository::clear`].

use std::future::Future;

use rehnuma_domain::error::RehnumaError;
use rehnuma_domain::id::ServiceId;
use rehnuma_domain::service::{Category, NewService, Service};
use rehnuma_domain::step::{NewStep, Step};

/// Repository for [`Service`] rows.
pub trait ServiceRepository {
    /// Insert a service and return it with its assigned id.
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, RehnumaError>> + Send;

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, RehnumaError>> + Send;

    /// All services in insertion order, restricted to `category` when given.
    fn get_all(
        &self,
        category: Option<Category>,
    ) -> impl Future<Output = Result<Vec<Service>, RehnumaError>> + Send;

    /// Remove every service together with the steps it owns.
    fn clear(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send;
}

/// Repository for [`Step`] rows.
pub trait StepRepository {
    /// Insert a step and return it with its assigned id.
    fn create(&self, step: NewStep) -> impl Future<Output = Result<Step, RehnumaError>> + Send;

    /// Steps owned by `service_id`, ordered by ascending step number.
    fn find_by_service_id(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<Vec<Step>, RehnumaError>> + Send;
}

impl<T: ServiceRepository + Send + Sync> ServiceRepository for std::sync::Arc<T> {
    fn create(
        &self,
        service: NewService,
    ) -> impl Future<Output = Result<Service, RehnumaError>> + Send {
        (**self).create(service)
    }

    fn get_by_id(
        &self,
        id: ServiceId,
    ) -> impl Future<Output = Result<Option<Service>, RehnumaError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(
        &self,
        category: Option<Category>,
    ) -> impl Future<Output = Result<Vec<Service>, RehnumaError>> + Send {
        (**self).get_all(category)
    }

    fn clear(&self) -> impl Future<Output = Result<(), RehnumaError>> + Send {
        (**self).clear()
    }
}

impl<T: StepRepository + Send + Sync> StepRepository for std::sync::Arc<T> {
    fn create(&self, step: NewStep) -> impl Future<Output = Result<Step, RehnumaError>> + Send {
        (**self).create(step)
    }

    fn find_by_service_id(
        &self,
        service_id: ServiceId,
    ) -> impl Future<Output = Result<Vec<Step>, RehnumaError>> + Send {
        (**self).find_by_service_id(service_id)
    }
}
