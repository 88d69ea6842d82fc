use crate::utils::error::{RailError, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://api.irishrail.ie/realtime/realtime.asmx";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AllStations,
    AllStationsWithType,
    CurrentTrains,
    CurrentTrainsWithType,
    StationDataByName,
    StationDataByCode,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AllStations => "getAllStationsXML",
            Endpoint::AllStationsWithType => "getAllStationsXML_WithStationType",
            Endpoint::CurrentTrains => "getCurrentTrainsXML",
            Endpoint::CurrentTrainsWithType => "getCurrentTrainsXML_WithTrainType",
            Endpoint::StationDataByName => "getStationDataByNameXML",
            Endpoint::StationDataByCode => "getStationDataByCodeXML",
        }
    }
}

/// Query parameters, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl ToString) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: &str, value: impl ToString) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Join `base_url` and the endpoint path, then form-encode `params`.
///
/// With no parameters the URL carries no query string at all.
pub fn build_url(base_url: &str, endpoint: Endpoint, params: &QueryParams) -> Result<String> {
    let joined = format!("{}/{}", base_url.trim_end_matches('/'), endpoint.path());
    let mut url = Url::parse(&joined).map_err(|e| RailError::ConfigError {
        message: format!("invalid base URL '{}': {}", base_url, e),
    })?;

    // query_pairs_mut() would leave a bare '?' behind when nothing is appended
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_omits_query_string() {
        let url = build_url(DEFAULT_BASE_URL, Endpoint::AllStations, &QueryParams::new()).unwrap();

        assert_eq!(url, "http://api.irishrail.ie/realtime/realtime.asmx/getAllStationsXML");
        assert!(!url.contains('?'));
    }

    #[test]
    fn test_params_are_encoded_in_insertion_order() {
        let params = QueryParams::new()
            .with("StationDesc", "Dun Laoghaire")
            .with("NumMins", 20);
        let url = build_url(DEFAULT_BASE_URL, Endpoint::StationDataByName, &params).unwrap();

        assert_eq!(
            url,
            "http://api.irishrail.ie/realtime/realtime.asmx/getStationDataByNameXML?StationDesc=Dun+Laoghaire&NumMins=20"
        );
    }

    #[test]
    fn test_reserved_characters_are_percent_encoded() {
        let params = QueryParams::new().with("StationDesc", "Sydney Parade & Co/1");
        let url = build_url(DEFAULT_BASE_URL, Endpoint::StationDataByName, &params).unwrap();

        assert!(url.ends_with("?StationDesc=Sydney+Parade+%26+Co%2F1"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let params = QueryParams::new().with("TrainType", "D");
        let first = build_url(DEFAULT_BASE_URL, Endpoint::CurrentTrainsWithType, &params).unwrap();
        let second = build_url(DEFAULT_BASE_URL, Endpoint::CurrentTrainsWithType, &params).unwrap();

        assert_eq!(first, second);
        assert!(first.ends_with("getCurrentTrainsXML_WithTrainType?TrainType=D"));
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let url = build_url("http://localhost:8080/", Endpoint::CurrentTrains, &QueryParams::new()).unwrap();

        assert_eq!(url, "http://localhost:8080/getCurrentTrainsXML");
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let result = build_url("not a url", Endpoint::AllStations, &QueryParams::new());

        assert!(matches!(result, Err(RailError::ConfigError { .. })));
    }
}
