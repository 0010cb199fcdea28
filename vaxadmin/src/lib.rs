//! # Vaccine Procurement Admin Client
//!
//! Client library for the vaccine procurement & settlement back office.
//! Every request travels through a signed, encrypted envelope; every
//! resource API is a thin mapping onto the backend's endpoints.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         ADMIN CLIENT                             │
//! │                                                                  │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐ ┌───────────┐  │
//! │  │ ContractApi │ │ PurchaseApi │ │SettlementApi│ │ SystemApi │  │
//! │  └─────────────┘ └─────────────┘ └─────────────┘ └───────────┘  │
//! │         │               │               │              │         │
//! │         └───────────────┴───────┬───────┴──────────────┘         │
//! │                                 ▼                                │
//! │  ┌──────────────────────────────────────────────────────────┐   │
//! │  │                       Transport                           │   │
//! │  │  envelope codec • status taxonomy • in-flight tracking    │   │
//! │  └──────────────────────────────────────────────────────────┘   │
//! │                                 │                                │
//! │                                 ▼                                │
//! │                      Procurement Backend                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let client = AdminClient::from_env()?;
//!
//! client.session().set_token(token);
//! let contracts = client.contracts.list(&PageQuery::default()).await?;
//! ```

pub mod api;
pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod models;
pub mod session;
pub mod transport;

use std::sync::Arc;

use tracing::info;

use api::{
    AuthApi, CommonApi, ContractApi, DiseaseControlDemandApi, EnterpriseOrderApi, FormsApi,
    OutpatientDemandApi, PurchaseApi, SettlementApi, SystemApi,
};
use config::ClientConfig;
use endpoints::Endpoints;
use session::SessionStore;
use transport::{ApiError, NoopHooks, Transport, UiHooks};

/// The assembled back-office client.
///
/// One transport is shared by every resource module, so the session
/// token, in-flight tracking and UI hooks behave globally, as they did
/// in the browser build.
#[derive(Clone)]
pub struct AdminClient {
    /// Login/logout and password flows.
    pub auth: AuthApi,

    /// Procurement contracts.
    pub contracts: ContractApi,

    /// Purchase orders.
    pub purchases: PurchaseApi,

    /// Enterprise (bidding company) orders.
    pub enterprise_orders: EnterpriseOrderApi,

    /// Station and company settlement.
    pub settlement: SettlementApi,

    /// Statistics report forms.
    pub forms: FormsApi,

    /// Outpatient demand plans.
    pub outpatient_demand: OutpatientDemandApi,

    /// Disease-control demand plans.
    pub disease_control_demand: DiseaseControlDemandApi,

    /// Users, roles, companies, messages, pay settings.
    pub system: SystemApi,

    /// Trees, lookup lists, uniqueness checks.
    pub common: CommonApi,

    session: SessionStore,
    transport: Transport,
}

impl AdminClient {
    /// Build a client with default (no-op) UI hooks.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_hooks(config, Arc::new(NoopHooks))
    }

    /// Build a client from environment configuration (`.env` aware).
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    /// Build a client with host-supplied UI hook strategies.
    pub fn with_hooks(config: ClientConfig, hooks: Arc<dyn UiHooks>) -> Result<Self, ApiError> {
        info!(base_url = %config.base_url, "building admin client");

        let session = SessionStore::new();
        let transport = Transport::new(&config, session.clone(), hooks)?;
        let endpoints = Arc::new(Endpoints::new(&config.base_url));

        Ok(Self {
            auth: AuthApi::new(transport.clone(), Arc::clone(&endpoints)),
            contracts: ContractApi::new(transport.clone(), Arc::clone(&endpoints)),
            purchases: PurchaseApi::new(transport.clone(), Arc::clone(&endpoints)),
            enterprise_orders: EnterpriseOrderApi::new(transport.clone(), Arc::clone(&endpoints)),
            settlement: SettlementApi::new(transport.clone(), Arc::clone(&endpoints)),
            forms: FormsApi::new(transport.clone(), Arc::clone(&endpoints)),
            outpatient_demand: OutpatientDemandApi::new(transport.clone(), Arc::clone(&endpoints)),
            disease_control_demand: DiseaseControlDemandApi::new(
                transport.clone(),
                Arc::clone(&endpoints),
            ),
            system: SystemApi::new(transport.clone(), Arc::clone(&endpoints)),
            common: CommonApi::new(transport.clone(), Arc::clone(&endpoints)),
            session,
            transport,
        })
    }

    /// The shared session store (token, recorded error message).
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// The shared transport (in-flight tracker access).
    pub fn transport(&self) -> &Transport {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_builds_and_shares_session() {
        let client = AdminClient::new(ClientConfig::default()).unwrap();

        client.session().set_token("t-123");
        let clone = client.clone();
        assert_eq!(clone.session().token().as_deref(), Some("t-123"));
        assert_eq!(client.transport().tracker().inflight(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_backend_rejects_and_releases_tracking() {
        // Port 1 refuses connections immediately; the request must reject
        // at the HTTP layer and the in-flight guard must still release.
        let config = ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(2),
        };
        let client = AdminClient::new(config).unwrap();

        let result = client.contracts.list(&models::PageQuery::default()).await;
        assert!(matches!(result, Err(ApiError::Http(_))));
        assert_eq!(client.transport().tracker().inflight(), 0);
    }
}
