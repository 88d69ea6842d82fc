use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::utils::error::RailError;

/// One parsed XML element: output field name -> element text, `None` when
/// the source element is missing or empty. Values are never coerced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub data: HashMap<String, Option<String>>,
}

impl Record {
    /// Value of `field`; `None` both for absent values and unknown fields.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(|v| v.as_deref())
    }
}

/// Ordered (output field, source tag) pairs for one data shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationTable {
    fields: &'static [(&'static str, &'static str)],
}

impl TranslationTable {
    pub const fn new(fields: &'static [(&'static str, &'static str)]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [(&'static str, &'static str)] {
        self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|(field, _)| *field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub const STATION_FIELDS: TranslationTable = TranslationTable::new(&[
    ("name", "StationDesc"),
    ("alias", "StationAlias"),
    ("lat", "StationLatitude"),
    ("long", "StationLongitude"),
    ("code", "StationCode"),
    ("id", "StationId"),
]);

pub const TRAIN_POSITION_FIELDS: TranslationTable = TranslationTable::new(&[
    ("status", "TrainStatus"),
    ("latitude", "TrainLatitude"),
    ("longitude", "TrainLongitude"),
    ("code", "TrainCode"),
    ("date", "TrainDate"),
    ("message", "PublicMessage"),
    ("direction", "Direction"),
]);

pub const STATION_DATA_FIELDS: TranslationTable = TranslationTable::new(&[
    ("code", "Traincode"),
    ("origin", "Origin"),
    ("destination", "Destination"),
    ("origin_time", "Origintime"),
    ("destination_time", "Destinationtime"),
    ("due_in_mins", "Duein"),
    ("late_mins", "Late"),
    ("expected_arrival_time", "Exparrival"),
    ("expected_departure_time", "Expdepart"),
    ("scheduled_arrival_time", "Scharrival"),
    ("scheduled_departure_time", "Schdepart"),
    ("type", "Traintype"),
    ("direction", "Direction"),
    ("location_type", "Locationtype"),
]);

/// The data shapes the API returns, each with its repeating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Station,
    TrainPosition,
    StationData,
}

impl RecordKind {
    pub fn element(&self) -> &'static str {
        match self {
            RecordKind::Station => "objStation",
            RecordKind::TrainPosition => "objTrainPositions",
            RecordKind::StationData => "objStationData",
        }
    }

    pub fn table(&self) -> &'static TranslationTable {
        match self {
            RecordKind::Station => &STATION_FIELDS,
            RecordKind::TrainPosition => &TRAIN_POSITION_FIELDS,
            RecordKind::StationData => &STATION_DATA_FIELDS,
        }
    }
}

/// Rail network segment used to filter station and train listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Mainline,
    Suburban,
    Dart,
}

impl Category {
    pub fn code(&self) -> &'static str {
        match self {
            Category::Mainline => "M",
            Category::Suburban => "S",
            Category::Dart => "D",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mainline => "mainline",
            Category::Suburban => "suburban",
            Category::Dart => "dart",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RailError;

    // Unknown names are rejected for every listing; there is no silent fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainline" => Ok(Category::Mainline),
            "suburban" => Ok(Category::Suburban),
            "dart" => Ok(Category::Dart),
            _ => Err(RailError::validation(
                "category",
                s,
                "expected one of: mainline, suburban, dart",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes() {
        assert_eq!(Category::Mainline.code(), "M");
        assert_eq!(Category::Suburban.code(), "S");
        assert_eq!(Category::Dart.code(), "D");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("dart".parse::<Category>().unwrap(), Category::Dart);
        assert_eq!("Mainline".parse::<Category>().unwrap(), Category::Mainline);
        assert_eq!(" suburban ".parse::<Category>().unwrap(), Category::Suburban);

        let err = "luas".parse::<Category>().unwrap_err();
        assert!(matches!(err, RailError::ValidationError { ref field, .. } if field == "category"));
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(RecordKind::Station.table().len(), 6);
        assert_eq!(RecordKind::TrainPosition.table().len(), 7);
        assert_eq!(RecordKind::StationData.table().len(), 14);
    }

    #[test]
    fn test_record_get() {
        let mut data = HashMap::new();
        data.insert("name".to_string(), Some("Heuston".to_string()));
        data.insert("alias".to_string(), None);
        let record = Record { data };

        assert_eq!(record.get("name"), Some("Heuston"));
        assert_eq!(record.get("alias"), None);
        assert!(record.data.contains_key("alias"));
        assert_eq!(record.get("missing"), None);
    }
}
