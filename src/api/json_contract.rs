use serde::{Deserialize, Serialize};

use crate::error::{ShotMapError, ShotMapResult};

use super::ShotMap;

pub const SHOT_MAP_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotMapJsonContractV1 {
    pub schema_version: u32,
    pub shot_map: ShotMap,
}

impl ShotMap {
    pub fn to_json_contract_v1_pretty(&self) -> ShotMapResult<String> {
        let payload = ShotMapJsonContractV1 {
            schema_version: SHOT_MAP_JSON_SCHEMA_V1,
            shot_map: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ShotMapError::InvalidData(format!("failed to serialize shot map contract v1: {e}"))
        })
    }

    /// Accepts either a bare shot map or a versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ShotMapResult<Self> {
        if let Ok(map) = serde_json::from_str::<ShotMap>(input) {
            return Ok(map);
        }
        let payload: ShotMapJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ShotMapError::InvalidData(format!("failed to parse shot map json payload: {e}"))
        })?;
        if payload.schema_version != SHOT_MAP_JSON_SCHEMA_V1 {
            return Err(ShotMapError::InvalidData(format!(
                "unsupported shot map schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.shot_map)
    }
}
