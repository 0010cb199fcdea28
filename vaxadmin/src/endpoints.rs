//! # Endpoint Registry
//!
//! Every backend endpoint is a path concatenation under a fixed prefix
//! set. This module centralizes the prefixes, joined onto the
//! environment-selected base URL from [`ClientConfig`].
//!
//! Trailing slashes are significant: the contract and enterprise-order
//! prefixes end with `/` because resource ids are appended directly,
//! exactly as the deployed backend routes them.
//!
//! [`ClientConfig`]: crate::config::ClientConfig

/// Endpoint URL registry bound to one base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    // Login / logout

    /// Temporary token issued before login.
    pub fn temporary_token(&self) -> String {
        self.join("/ss/token")
    }

    pub fn login(&self) -> String {
        self.join("/ss/login")
    }

    pub fn logout(&self) -> String {
        self.join("/ss/logout")
    }

    // System management

    /// Role management.
    pub fn role(&self) -> String {
        self.join("/sys/role")
    }

    /// User management.
    pub fn user(&self) -> String {
        self.join("/sys/user")
    }

    /// Bidding companies.
    pub fn company(&self) -> String {
        self.join("/sys/tbqy/")
    }

    /// Payment settings.
    pub fn pay(&self) -> String {
        self.join("/sys/pay")
    }

    /// Message inbox.
    pub fn message(&self) -> String {
        self.join("/sys/message")
    }

    // Password flows

    pub fn update_pass(&self) -> String {
        self.join("/common/user/passUpdate")
    }

    pub fn send_valid(&self) -> String {
        self.join("/common/validReset")
    }

    pub fn reset_pass(&self) -> String {
        self.join("/common/passReset")
    }

    // Common lookups

    pub fn common(&self) -> String {
        self.join("/common")
    }

    pub fn area_tree(&self) -> String {
        self.join("/common/tree/area")
    }

    pub fn user_area_tree(&self) -> String {
        self.join("/common/tree/area/user")
    }

    pub fn module_tree(&self) -> String {
        self.join("/common/tree/module")
    }

    /// Uniqueness validation; calls here bypass in-flight tracking.
    pub fn uniqueness_check(&self) -> String {
        self.join("/check/isExist")
    }

    /// Conditional list lookups (vaccines, manufacturers, products...).
    pub fn condition_list(&self) -> String {
        self.join("/common/condition/list")
    }

    // Demand planning

    /// Outpatient (vaccination station) demand plans.
    pub fn outpatient_demand(&self) -> String {
        self.join("/plan/mz")
    }

    /// District disease-control demand plans.
    pub fn disease_control_demand(&self) -> String {
        self.join("/plan/jk")
    }

    // Orders and settlement

    /// Enterprise (bidding company) orders.
    pub fn enterprise_order(&self) -> String {
        self.join("/order/qy/")
    }

    /// Purchase orders.
    pub fn purchase_order(&self) -> String {
        self.join("/order/user")
    }

    /// Settlement/report pages.
    pub fn settlement(&self) -> String {
        self.join("/report")
    }

    /// Contracts.
    pub fn contract(&self) -> String {
        self.join("/contract/")
    }

    /// Statistics report forms.
    pub fn form(&self) -> String {
        self.join("/form")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_preserves_significant_slashes() {
        let endpoints = Endpoints::new("http://localhost:9999/unImmunePlan/");
        assert_eq!(
            endpoints.contract(),
            "http://localhost:9999/unImmunePlan/contract/"
        );
        assert_eq!(
            endpoints.purchase_order(),
            "http://localhost:9999/unImmunePlan/order/user"
        );
    }

    #[test]
    fn test_uniqueness_check_matches_tracker_filter() {
        let endpoints = Endpoints::new("http://localhost");
        assert!(endpoints
            .uniqueness_check()
            .contains(crate::transport::UNIQUENESS_CHECK_PATH));
    }
}
