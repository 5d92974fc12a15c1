use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

use super::MountSnapshot;

pub const MOUNT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: MountSnapshot,
}

impl MountSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ShowcaseResult<String> {
        let payload = MountSnapshotJsonContractV1 {
            schema_version: MOUNT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ShowcaseError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ShowcaseResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<MountSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: MountSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ShowcaseError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != MOUNT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
