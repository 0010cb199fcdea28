//! Login/logout and password flows.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Transport};

#[derive(Clone)]
pub struct AuthApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl AuthApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    /// Fetch the temporary token issued before login.
    pub async fn temporary_token<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.temporary_token(), params).await
    }

    /// Log in.
    pub async fn login<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.login(), params, Vec::new()).await
    }

    /// Log out the current session.
    pub async fn logout(&self) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.logout(), &no_params(), Vec::new()).await
    }

    /// Change the current user's password.
    pub async fn update_password<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.endpoints.update_pass(), params, Vec::new()).await
    }

    /// Send a password-reset validation code.
    pub async fn send_reset_code<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.send_valid(), params, Vec::new()).await
    }

    /// Reset a forgotten password.
    pub async fn reset_password<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.endpoints.reset_pass(), params, Vec::new()).await
    }
}
