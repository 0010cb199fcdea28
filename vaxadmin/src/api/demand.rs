//! Demand planning.
//!
//! Two planning surfaces share the same CRUD shape: outpatient
//! (vaccination station) plans under `/plan/mz`, and district
//! disease-control plans under `/plan/jk`. The disease-control side adds
//! rollup/allocation over the subordinate stations' plans; the outpatient
//! side adds generation from the resident booking feed.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, Transport};

#[derive(Clone)]
pub struct OutpatientDemandApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl OutpatientDemandApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.endpoints.outpatient_demand(), suffix)
    }

    /// Create a demand plan.
    pub async fn save<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/save"), params, Vec::new()).await
    }

    /// Edit a demand plan.
    pub async fn update<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.url("/update"), params, Vec::new()).await
    }

    /// Paged plan list.
    pub async fn page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/list/page"), params).await
    }

    /// Plan detail.
    pub async fn detail(&self, plan_no: &str) -> Result<Value, ApiError> {
        self.transport.get(&self.url(&format!("/info/{}", plan_no)), &no_params()).await
    }

    /// Delete one plan.
    pub async fn delete(&self, plan_no: &str) -> Result<Value, ApiError> {
        self.transport.delete(&self.url(&format!("/delete/{}", plan_no)), &no_params()).await
    }

    /// Delete several plans.
    pub async fn delete_many<P: Serialize>(&self, ids: &P) -> Result<Value, ApiError> {
        self.transport.delete(&self.url("/deleteBatch"), ids).await
    }

    /// Report a plan upward with the given status.
    pub async fn report(&self, plan_no: &str, status: &str) -> Result<Value, ApiError> {
        let url = self.url(&format!("/update/{}/{}", plan_no, status));
        self.transport.put(&url, &no_params(), Vec::new()).await
    }

    /// Export the plan list.
    pub async fn export<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/export"), params).await
    }

    /// Synced resident booking list.
    pub async fn resident_bookings<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/jmb/list"), params).await
    }

    /// Rollup of resident bookings into demand quantities.
    pub async fn resident_rollup<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/jmb/total"), params).await
    }

    /// Generate a demand plan from resident bookings.
    pub async fn generate<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/jmb"), params, Vec::new()).await
    }
}

#[derive(Clone)]
pub struct DiseaseControlDemandApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl DiseaseControlDemandApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.endpoints.disease_control_demand(), suffix)
    }

    /// Create a demand plan.
    pub async fn save<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/save"), params, Vec::new()).await
    }

    /// Edit a demand plan (also used to adjust quantities).
    pub async fn update<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.url("/update"), params, Vec::new()).await
    }

    /// Paged plan list.
    pub async fn page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/list/page"), params).await
    }

    /// Plan detail.
    pub async fn detail(&self, plan_no: &str) -> Result<Value, ApiError> {
        self.transport.get(&self.url(&format!("/info/{}", plan_no)), &no_params()).await
    }

    /// Delete one plan.
    pub async fn delete(&self, plan_no: &str) -> Result<Value, ApiError> {
        self.transport.delete(&self.url(&format!("/delete/{}", plan_no)), &no_params()).await
    }

    /// Delete several plans.
    pub async fn delete_many<P: Serialize>(&self, ids: &P) -> Result<Value, ApiError> {
        self.transport.delete(&self.url("/deleteBatch"), ids).await
    }

    /// Export the plan list.
    pub async fn export<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/export"), params).await
    }

    /// Subordinate station plan detail rows for one plan.
    pub async fn station_detail_list<P: Serialize>(&self, plan_no: &str, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url(&format!("/mz/detail/{}", plan_no)), params).await
    }

    /// Detail of one subordinate station plan.
    pub async fn station_detail_info<P: Serialize>(&self, plan_no: &str, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url(&format!("/mz/info/{}", plan_no)), params).await
    }

    /// All subordinate station plans.
    pub async fn station_list_all<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/mz/list/all"), params).await
    }

    /// Roll subordinate station demands up into a district plan.
    pub async fn collect<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/mz/hz"), params, Vec::new()).await
    }

    /// Allocate vaccine quantities back to stations.
    pub async fn allocate<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.put(&self.url("/mz/fp"), params, Vec::new()).await
    }

    /// Export subordinate station detail rows for one plan.
    pub async fn export_station_details<P: Serialize>(&self, plan_no: &str, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url(&format!("/mz/export/{}", plan_no)), params).await
    }
}
