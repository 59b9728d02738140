//! Raw serde structs for the alternative.me Fear & Greed endpoint.

use serde::{Deserialize, Serialize};

/// `GET /fng/` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub data: Vec<FearGreedRaw>,
}

/// One index reading. Everything is a string upstream, including the unix
/// timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FearGreedRaw {
    pub value: String,
    pub value_classification: String,
    #[serde(default)]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_live_shape() {
        let resp: FearGreedResponse = serde_json::from_str(
            r#"{
                "name": "Fear and Greed Index",
                "data": [{
                    "value": "39",
                    "value_classification": "Fear",
                    "timestamp": "1719000000",
                    "time_until_update": "3600"
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].value, "39");
    }
}
