pub mod client;
pub mod endpoint;
pub mod extract;
pub mod http;
pub mod output;

pub use crate::domain::model::{
    Category, Record, RecordKind, TranslationTable, STATION_DATA_FIELDS, STATION_FIELDS,
    TRAIN_POSITION_FIELDS,
};
pub use crate::domain::ports::{ConfigProvider, Fetcher};
pub use crate::utils::error::Result;
