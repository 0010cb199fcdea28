//! # Resource API Modules
//!
//! One module per back-office resource, each a thin set of one-to-one
//! mappings from a method to an HTTP verb + endpoint path. No branching,
//! no validation; the transport does all the work.
//!
//! ## Modules
//!
//! | Module | Resource |
//! |--------|----------|
//! | `auth` | login/logout, password flows |
//! | `contract` | procurement contracts |
//! | `purchase` | purchase orders |
//! | `enterprise` | enterprise (bidding company) orders |
//! | `settlement` | station & company settlement pages |
//! | `forms` | statistics report forms |
//! | `demand` | outpatient & disease-control demand plans |
//! | `system` | users, roles, companies, messages, pay settings |
//! | `common` | trees, lookup lists, uniqueness checks |

pub mod auth;
pub mod common;
pub mod contract;
pub mod demand;
pub mod enterprise;
pub mod forms;
pub mod purchase;
pub mod settlement;
pub mod system;

pub use auth::AuthApi;
pub use common::CommonApi;
pub use contract::ContractApi;
pub use demand::{DiseaseControlDemandApi, OutpatientDemandApi};
pub use enterprise::EnterpriseOrderApi;
pub use forms::FormsApi;
pub use purchase::PurchaseApi;
pub use settlement::SettlementApi;
pub use system::SystemApi;

use serde_json::Value;

/// The empty payload used where the original passed `{}` by default.
pub(crate) fn no_params() -> Value {
    Value::Object(serde_json::Map::new())
}
