//! Settlement pages for vaccination stations and bidding companies.
//!
//! The settlement surface is the widest in the back office: paged lists,
//! adult/child detail breakdowns, pre-settle confirmations, single and
//! batch settlement, split-payment history, and spreadsheet exports for
//! each page.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, Transport};

#[derive(Clone)]
pub struct SettlementApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl SettlementApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.endpoints.settlement(), suffix)
    }

    // Vaccination station settlement

    /// Paged station settlement list.
    pub async fn station_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/station/page"), params).await
    }

    /// Adult detail rows for station settlement.
    pub async fn adult_station_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/station/adult/page"), params).await
    }

    /// Export the adult detail rows.
    pub async fn export_adult_station<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/station/adult/export"), params).await
    }

    /// Child detail rows for station settlement.
    pub async fn child_station_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/station/child/page"), params).await
    }

    /// Export the child detail rows.
    pub async fn export_child_station<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/station/child/export"), params).await
    }

    /// Export the station settlement list.
    pub async fn export_station<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/station/export"), params).await
    }

    /// Settlement info shown before settling.
    pub async fn station_info<P: Serialize>(&self, settle_ids: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/station"), settle_ids).await
    }

    /// Edit station settlement info.
    pub async fn edit_station<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/station"), params, Vec::new()).await
    }

    /// Settle a single station record.
    pub async fn station_settle<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/station/settle"), params, Vec::new()).await
    }

    /// Settle station records in batch.
    pub async fn station_settle_batch<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/station/batch/settle"), params, Vec::new()).await
    }

    /// Split-payment history for one station settlement detail.
    pub async fn station_settle_detail_history(&self, detail_id: &str) -> Result<Value, ApiError> {
        let url = self.url(&format!("/station/getMzSettleDetailHis/{}", detail_id));
        self.transport.get(&url, &no_params()).await
    }

    /// Confirmation info for a station settlement.
    pub async fn station_settle_confirm<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/station/mzSettleInfoConfirm"), params, Vec::new()).await
    }

    /// View a station settlement's info.
    pub async fn station_settle_info(&self, settle_id: &str) -> Result<Value, ApiError> {
        let url = self.url(&format!("/station/getMzSettleInfo/{}", settle_id));
        self.transport.get(&url, &no_params()).await
    }

    // Bidding company settlement

    /// Paged company settlement list.
    pub async fn company_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/qy/"), params).await
    }

    /// Settlement info shown before settling a company.
    pub async fn company_before_settle<P: Serialize>(&self, settle_ids: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/qy/beforeSettle"), settle_ids).await
    }

    /// Export the company settlement list.
    pub async fn export_company<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/qy/export"), params).await
    }

    /// Confirmation info for a company settlement.
    pub async fn company_settle_confirm<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/qy/csSettleInfoConfirm"), params, Vec::new()).await
    }

    /// Settle a single company record.
    pub async fn company_settle<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/qy/settle"), params, Vec::new()).await
    }

    /// Settle company records in batch.
    pub async fn company_settle_batch<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.post(&self.url("/qy/batch/settle"), params, Vec::new()).await
    }

    /// Detail of one company settlement.
    pub async fn company_settle_detail(&self, settle_id: &str) -> Result<Value, ApiError> {
        let url = self.url(&format!("/qy/getCsSettleDetail/{}", settle_id));
        self.transport.get(&url, &no_params()).await
    }

    /// Split-payment history for one company settlement detail.
    pub async fn company_settle_detail_history(&self, detail_id: &str) -> Result<Value, ApiError> {
        let url = self.url(&format!("/qy/getCsSettleDetailHis/{}", detail_id));
        self.transport.get(&url, &no_params()).await
    }

    // Settlement totals

    /// Paged station settlement totals.
    pub async fn total_station_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/total/station/page"), params).await
    }

    /// Paged contract settlement totals.
    pub async fn total_contract_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/total/contract/page"), params).await
    }
}
