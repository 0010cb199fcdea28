//! Statistics report forms: booking, manual entry, order and shortage
//! breakdowns, each with a paged list and a spreadsheet export.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::no_params;
use crate::endpoints::Endpoints;
use crate::transport::{ApiError, Download, Transport};

#[derive(Clone)]
pub struct FormsApi {
    transport: Transport,
    endpoints: Arc<Endpoints>,
}

impl FormsApi {
    pub(crate) fn new(transport: Transport, endpoints: Arc<Endpoints>) -> Self {
        Self { transport, endpoints }
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}{}", self.endpoints.form(), suffix)
    }

    /// Online booking statistics.
    pub async fn online_booking_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/inline/page"), params).await
    }

    /// Export online booking statistics.
    pub async fn export_online_booking<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/inline/export"), params).await
    }

    /// Manual entry statistics.
    pub async fn manual_entry_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/handle/page"), params).await
    }

    /// Export manual entry statistics.
    pub async fn export_manual_entry<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/handle/export"), params).await
    }

    /// Adult pre-order detail rows.
    pub async fn adult_detail_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/detail/adult/page"), params).await
    }

    /// Export adult pre-order detail rows.
    pub async fn export_adult_detail<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/detail/adult/export"), params).await
    }

    /// Child pre-order detail rows.
    pub async fn child_detail_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/detail/child/page"), params).await
    }

    /// Export child pre-order detail rows.
    pub async fn export_child_detail<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/detail/child/export"), params).await
    }

    /// Order statistics.
    pub async fn order_stats_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/order/page"), params).await
    }

    /// Export order statistics.
    pub async fn export_order_stats<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/order/export"), params).await
    }

    /// Vaccine shortage registration detail rows.
    pub async fn shortage_detail_page<P: Serialize>(&self, params: &P) -> Result<Value, ApiError> {
        self.transport.get(&self.url("/detail/collect/page"), params).await
    }

    /// Export shortage registration detail rows.
    pub async fn export_shortage_detail<P: Serialize>(&self, params: &P) -> Result<Download, ApiError> {
        self.transport.download(&self.url("/detail/collect/export"), params).await
    }

    /// Vaccination stations in an area (report filter options).
    pub async fn stations(&self, area_code: &str) -> Result<Value, ApiError> {
        let url = format!("{}/station/{}", self.endpoints.common(), area_code);
        self.transport.get(&url, &no_params()).await
    }

    /// Sub-areas of an area (report filter options).
    pub async fn areas(&self, area_code: &str) -> Result<Value, ApiError> {
        let url = format!("{}/area/list/{}", self.endpoints.common(), area_code);
        self.transport.get(&url, &no_params()).await
    }
}
