//! Purchase order management.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, Transport};

#[derive(Clone)]
pub struct PurchaseApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl PurchaseApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    /// Paged purchase order list.
    pub async fn list<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/", self.endpoints.purchase_order());
        self.transport.get(&url, params).await
    }

    /// Demand plans waiting to be purchased.
    pub async fn pending_demands<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/plan/list", self.endpoints.purchase_order());
        self.transport.get(&url, params).await
    }

    /// Bidding companies available to purchase from.
    pub async fn bidding_companies(&self) -> Result<Value, ApiError> {
        let url = format!("{}/tbqy", self.endpoints.purchase_order());
        self.transport.get(&url, &no_params()).await
    }

    /// Create a purchase order.
    pub async fn create<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/", self.endpoints.purchase_order());
        self.transport.post(&url, params, Vec::new()).await
    }

    /// Edit a purchase order.
    pub async fn update<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/", self.endpoints.purchase_order());
        self.transport.put(&url, params, Vec::new()).await
    }

    /// Purchase order detail.
    pub async fn detail(&self, purchase_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.endpoints.purchase_order(), purchase_no);
        self.transport.get(&url, &no_params()).await
    }

    /// Export the purchase order list.
    pub async fn export_list<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        let url = format!("{}/export", self.endpoints.purchase_order());
        self.transport.download(&url, params).await
    }

    /// Export one purchase order's detail.
    pub async fn export_detail(&self, purchase_no: &str) -> Result<Download, ApiError> {
        let url = format!("{}/export/{}", self.endpoints.purchase_order(), purchase_no);
        self.transport.download(&url, &no_params()).await
    }

    /// Delete one purchase order.
    pub async fn delete(&self, purchase_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.endpoints.purchase_order(), purchase_no);
        self.transport.delete(&url, &no_params()).await
    }

    /// Delete several purchase orders.
    pub async fn delete_many<P: Serialize>(&self, ids: &P) -> Result<Value, ApiError> {
        let url = format!("{}/", self.endpoints.purchase_order());
        self.transport.delete(&url, ids).await
    }

    /// Confirm a purchase order.
    pub async fn confirm(&self, purchase_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.endpoints.purchase_order(), purchase_no);
        self.transport.put(&url, &no_params(), Vec::new()).await
    }

    /// Validate a purchase order before confirmation.
    pub async fn pre_confirm_check(&self, purchase_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}/check/{}", self.endpoints.purchase_order(), purchase_no);
        self.transport.get(&url, &no_params()).await
    }

    /// Check that a contract number is unique.
    pub async fn check_contract_no<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/heTong", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }
}
