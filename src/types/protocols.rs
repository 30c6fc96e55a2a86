use serde::{Deserialize, Serialize};

/// A protocol activated on chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub code: i64,
    pub hash: String,
    pub first_level: i64,
    /// `None` while the protocol is still active.
    pub last_level: Option<i64>,
    pub constants: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
}

impl Protocol {
    pub fn alias(&self) -> Option<&str> {
        self.metadata.as_ref()?.get("alias")?.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_protocol_has_no_last_level() {
        let json = r#"{
            "code": 9,
            "hash": "PsFLorenaUUuikDWvMDr6fGBRG8kt3e3D3fHoXK1j1BFRxeSH4i",
            "firstLevel": 1343489,
            "lastLevel": null,
            "constants": {"blocksPerCycle": 4096},
            "metadata": {"alias": "Florence"}
        }"#;
        let protocol: Protocol = serde_json::from_str(json).unwrap();
        assert_eq!(protocol.last_level, None);
        assert_eq!(protocol.alias(), Some("Florence"));
    }
}
