use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct FetchResult {
    pub file_key: String,
    pub status_code: u16,
    pub content_length: Option<u64>,
    pub response_time: Duration,
    pub data: Value,
}

impl FetchResult {
    pub fn file_name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }
}
