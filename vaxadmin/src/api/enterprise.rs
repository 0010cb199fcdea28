//! Enterprise (bidding company) order handling.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, Transport};

#[derive(Clone)]
pub struct EnterpriseOrderApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl EnterpriseOrderApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    /// Paged order list.
    pub async fn list<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.endpoints.enterprise_order(), params).await
    }

    /// Query one order.
    pub async fn query<P: Serialize>(&self, id: &str, params: &P) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.enterprise_order(), id);
        self.transport.get(&url, params).await
    }

    /// Confirm or reject an order.
    pub async fn confirm_or_reject<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport
            .put(&self.confirm_url(), params, Vec::new())
            .await
    }

    // The deployed route has a doubled slash: the order prefix ends in
    // '/' and the backend matches "/info" appended verbatim.
    fn confirm_url(&self) -> String {
        format!("{}/info", self.endpoints.enterprise_order())
    }

    /// Ship an order.
    pub async fn ship<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.endpoints.enterprise_order(), params, Vec::new()).await
    }

    /// Shipment history for an order.
    pub async fn shipment_history(&self, order_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoints.enterprise_order(), order_no);
        self.transport.get(&url, &no_params()).await
    }

    /// Order detail.
    pub async fn detail(&self, order_no: &str) -> Result<Value, ApiError> {
        let url = format!("{}info/{}", self.endpoints.enterprise_order(), order_no);
        self.transport.get(&url, &no_params()).await
    }

    /// Export the order list.
    pub async fn export<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        let url = format!("{}export", self.endpoints.enterprise_order());
        self.transport.download(&url, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::session::SessionStore;
    use crate::transport::NoopHooks;

    #[test]
    fn test_confirm_route_keeps_doubled_slash() {
        let transport = Transport::new(
            &ClientConfig::default(),
            SessionStore::new(),
            Arc::new(NoopHooks),
        )
        .unwrap();
        let api = EnterpriseOrderApi::new(transport, Arc::new(Endpoints::new("http://host/app")));

        assert_eq!(api.confirm_url(), "http://host/app/order/qy//info");
    }
}
