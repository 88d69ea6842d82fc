use crate::core::endpoint::{build_url, Endpoint, QueryParams};
use crate::core::extract::extract_records;
use crate::core::http::HttpFetcher;
use crate::core::{Category, ConfigProvider, Fetcher, Record, RecordKind};
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;

/// Client for the Irish Rail realtime API.
///
/// Every call issues exactly one request and parses the response from
/// scratch; nothing is cached between calls.
pub struct IrishRailClient<F: Fetcher = HttpFetcher> {
    fetcher: F,
    base_url: String,
}

impl IrishRailClient<HttpFetcher> {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::with_fetcher(fetcher, config.base_url()))
    }
}

impl<F: Fetcher> IrishRailClient<F> {
    pub fn with_fetcher(fetcher: F, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All stations, optionally restricted to one network segment.
    pub async fn list_stations(&self, category: Option<Category>) -> Result<Vec<Record>> {
        let (endpoint, params) = match category {
            Some(category) => (
                Endpoint::AllStationsWithType,
                QueryParams::new().with("StationType", category.code()),
            ),
            None => (Endpoint::AllStations, QueryParams::new()),
        };
        self.fetch_records(endpoint, &params, RecordKind::Station).await
    }

    /// Trains currently running, optionally restricted to one network segment.
    pub async fn list_current_trains(&self, category: Option<Category>) -> Result<Vec<Record>> {
        let (endpoint, params) = match category {
            Some(category) => (
                Endpoint::CurrentTrainsWithType,
                QueryParams::new().with("TrainType", category.code()),
            ),
            None => (Endpoint::CurrentTrains, QueryParams::new()),
        };
        self.fetch_records(endpoint, &params, RecordKind::TrainPosition)
            .await
    }

    /// Trains due to serve the station with the given name.
    pub async fn station_schedule_by_name(
        &self,
        name: &str,
        minutes_ahead: Option<u32>,
    ) -> Result<Vec<Record>> {
        validate_non_empty_string("station_name", name)?;
        let params = schedule_params("StationDesc", name, minutes_ahead);
        self.fetch_records(Endpoint::StationDataByName, &params, RecordKind::StationData)
            .await
    }

    /// Trains due to serve the station with the given code.
    pub async fn station_schedule_by_code(
        &self,
        code: &str,
        minutes_ahead: Option<u32>,
    ) -> Result<Vec<Record>> {
        validate_non_empty_string("station_code", code)?;
        let params = schedule_params("StationCode", code, minutes_ahead);
        self.fetch_records(Endpoint::StationDataByCode, &params, RecordKind::StationData)
            .await
    }

    async fn fetch_records(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
        kind: RecordKind,
    ) -> Result<Vec<Record>> {
        let url = build_url(&self.base_url, endpoint, params)?;
        let body = self.fetcher.fetch(&url).await?;
        let records = extract_records(&body, kind.element(), kind.table())?;
        tracing::info!("Fetched {} records from {}", records.len(), endpoint.path());
        Ok(records)
    }
}

// A window of 0 minutes is sent as no window at all.
fn schedule_params(key: &str, value: &str, minutes_ahead: Option<u32>) -> QueryParams {
    let mut params = QueryParams::new().with(key, value);
    if let Some(minutes) = minutes_ahead.filter(|m| *m > 0) {
        params.push("NumMins", minutes);
    }
    params
}
