//! Procurement contract management.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, FileAttachment, Transport};

#[derive(Clone)]
pub struct ContractApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl ContractApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    /// Paged contract list.
    pub async fn list<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.contract(), params).await
    }

    /// Create a contract.
    pub async fn create<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.contract(), params, Vec::new()).await
    }

    /// Edit a contract.
    pub async fn update<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.endpoints.contract(), params, Vec::new()).await
    }

    /// Delete one contract.
    pub async fn delete(&self, contract_id: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.contract(), contract_id);
        self.transport.delete(&url, &no_params()).await
    }

    /// Delete several contracts.
    pub async fn delete_many<P: Serialize>(&self, ids: &P) -> Result<Value, ApiError> {
        self.transport.delete(&self.endpoints.contract(), ids).await
    }

    /// Contract detail by contract number.
    pub async fn detail(&self, contract_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.contract(), contract_no);
        self.transport.get(&url, &no_params()).await
    }

    /// Purchase orders not yet bound to any contract.
    pub async fn unbound_purchase_orders<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}purchase", self.endpoints.contract());
        self.transport.get(&url, params).await
    }

    /// Unbind a purchase order from its contract.
    pub async fn unbind_order(&self, order_id: &str) -> Result<Value, ApiError> {
        let url = format!("{}order/{}", self.endpoints.contract(), order_id);
        self.transport.delete(&url, &no_params()).await
    }

    /// Export the contract list as a spreadsheet.
    pub async fn export<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        let url = format!("{}export", self.endpoints.contract());
        self.transport.download(&url, params).await
    }

    /// Upload a contract attachment.
    pub async fn upload_attachment(&self, files: Vec<FileAttachment>) -> Result<Value, ApiError> {
        let url = format!("{}upload/file", self.endpoints.contract());
        self.transport.post(&url, &no_params(), files).await
    }

    /// Check that a contract number is unique.
    pub async fn check_contract_no<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/heTong", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }
}
