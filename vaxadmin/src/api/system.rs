//! System management: users, roles, bidding companies, messages and
//! payment settings.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, FileAttachment, Transport};

#[derive(Clone)]
pub struct SystemApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl SystemApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    // Users

    /// Paged user list.
    pub async fn user_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/list/page", self.endpoints.user());
        self.transport.get(&url, params).await
    }

    /// One user's info.
    pub async fn user_info(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/info/{}", self.endpoints.user(), id);
        self.transport.get(&url, &no_params()).await
    }

    /// Create a user.
    pub async fn add_user<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/save", self.endpoints.user());
        self.transport.post(&url, params, Vec::new()).await
    }

    /// Edit a user.
    pub async fn update_user<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/update", self.endpoints.user());
        self.transport.put(&url, params, Vec::new()).await
    }

    /// Delete a user.
    pub async fn delete_user(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/delete/{}", self.endpoints.user(), id);
        self.transport.delete(&url, &no_params()).await
    }

    /// Roles assignable to users.
    pub async fn assignable_roles(&self) -> Result<Value, ApiError> {
        let url = format!("{}/role/list/all", self.endpoints.user());
        self.transport.get(&url, &no_params()).await
    }

    /// Bidding companies assignable to users.
    pub async fn assignable_companies(&self) -> Result<Value, ApiError> {
        let url = format!("{}/tbqy/list/all", self.endpoints.user());
        self.transport.get(&url, &no_params()).await
    }

    /// Check that a login name is unique.
    pub async fn check_login_name<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/loginName", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }

    // Roles

    /// All roles.
    pub async fn roles<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/list/all", self.endpoints.role());
        self.transport.get(&url, params).await
    }

    /// Create a role.
    pub async fn add_role<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/save", self.endpoints.role());
        self.transport.post(&url, params, Vec::new()).await
    }

    /// Edit a role.
    pub async fn update_role<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/update", self.endpoints.role());
        self.transport.put(&url, params, Vec::new()).await
    }

    /// Delete a role.
    pub async fn delete_role(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/delete/{}", self.endpoints.role(), id);
        self.transport.delete(&url, &no_params()).await
    }

    /// Check that a role code is unique.
    pub async fn check_role_code<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/roleCode", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }

    /// Check that a role name is unique.
    pub async fn check_role_name<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/roleName", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }

    // Bidding companies

    /// Paged company list.
    pub async fn company_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.company(), params).await
    }

    /// One company.
    pub async fn company_info(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.company(), id);
        self.transport.get(&url, &no_params()).await
    }

    /// Create a company.
    pub async fn add_company<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.company(), params, Vec::new()).await
    }

    /// Edit a company.
    pub async fn update_company<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.endpoints.company(), params, Vec::new()).await
    }

    /// Delete a company.
    pub async fn delete_company(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.company(), id);
        self.transport.delete(&url, &no_params()).await
    }

    /// Check that a company name is unique.
    pub async fn check_company_name<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/qy/name", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }

    /// Check that a company code is unique.
    pub async fn check_company_code<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/qy/code", self.endpoints.uniqueness_check());
        self.transport.get(&url, params).await
    }

    /// Export the company list.
    pub async fn export_companies<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        let url = format!("{}export", self.endpoints.company());
        self.transport.download(&url, params).await
    }

    /// Import companies from a spreadsheet.
    pub async fn import_companies(&self, files: Vec<FileAttachment>) -> Result<Value, ApiError> {
        let url = format!("{}import", self.endpoints.company());
        self.transport.post(&url, &no_params(), files).await
    }

    /// Download the company import template.
    pub async fn company_template(&self) -> Result<Download, ApiError> {
        let url = format!("{}download", self.endpoints.company());
        self.transport.download(&url, &no_params()).await
    }

    // Messages

    /// Paged message list.
    pub async fn message_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/page", self.endpoints.message());
        self.transport.get(&url, params).await
    }

    /// One message.
    pub async fn message_detail(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/{}", self.endpoints.message(), id);
        self.transport.get(&url, &no_params()).await
    }

    /// Mark a message read.
    pub async fn mark_message_read(&self, id: &str) -> Result<Value, ApiError> {
        let url = format!("{}/update/{}", self.endpoints.message(), id);
        self.transport.put(&url, &no_params(), Vec::new()).await
    }

    // Payment settings

    /// Current payment settings.
    pub async fn pay_settings<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/set", self.endpoints.pay());
        self.transport.get(&url, params).await
    }

    /// Update payment settings.
    pub async fn set_pay_settings<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}/set", self.endpoints.pay());
        self.transport.post(&url, params, Vec::new()).await
    }
}
