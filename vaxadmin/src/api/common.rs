//! Common lookups shared across the back office: area/module trees,
//! vaccine and product lists, and raw uniqueness checks.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Transport};

#[derive(Clone)]
pub struct CommonApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl CommonApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    /// Full area tree.
    pub async fn area_tree<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.area_tree(), params).await
    }

    /// Area tree scoped to the current user.
    pub async fn user_area_tree<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.user_area_tree(), params).await
    }

    /// Module permission tree.
    pub async fn module_tree<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.module_tree(), params).await
    }

    /// Vaccine class list.
    pub async fn vaccines(&self) -> Result<Value, ApiError> {
        let url = format!("{}/vaccine", self.endpoints.condition_list());
        self.transport.get(&url, &no_params()).await
    }

    /// Vaccine short names for one class.
    pub async fn vaccines_by_type(&self, type_code: &str) -> Result<Value, ApiError> {
        let url = format!("{}/vaccine/{}", self.endpoints.condition_list(), type_code);
        self.transport.get(&url, &no_params()).await
    }

    /// Product (registered vaccine) classes.
    pub async fn product_types(&self) -> Result<Value, ApiError> {
        let url = format!("{}/product/Type", self.endpoints.condition_list());
        self.transport.get(&url, &no_params()).await
    }

    /// Manufacturer list.
    pub async fn manufacturers<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/qy", self.endpoints.condition_list());
        self.transport.get(&url, params).await
    }

    /// Products for a vaccine + manufacturer pair.
    pub async fn products<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/product", self.endpoints.condition_list());
        self.transport.get(&url, params).await
    }

    /// Dosage forms and specifications.
    pub async fn dosage_specs<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/jxSpec", self.endpoints.condition_list());
        self.transport.get(&url, params).await
    }

    /// Status option list.
    pub async fn statuses<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/status", self.endpoints.condition_list());
        self.transport.get(&url, params).await
    }

    /// Bidding companies in an area, without permission scoping.
    pub async fn companies_in_area(&self, area_code: &str) -> Result<Value, ApiError> {
        let url = format!("{}/tbQy/{}", self.endpoints.common(), area_code);
        self.transport.get(&url, &no_params()).await
    }

    /// Raw uniqueness check against a named field.
    ///
    /// Calls here bypass in-flight tracking; a conflict comes back as
    /// `ApiError::Conflict` carrying the server message.
    pub async fn is_unique<P: Serialize>(&self, field: &str, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.endpoints.uniqueness_check(), field);
        self.transport.get(&url, params).await
    }
}
