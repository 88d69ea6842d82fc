use crate::utils::error::Result;

/// Source of raw response bodies. Implementations must fail on non-success
/// statuses instead of returning the body.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn user_agent(&self) -> Option<&str>;
}
