mod json_contract;
mod mount_config;
mod mount_core;
mod mount_manager;
mod mount_snapshot;
mod mount_transitions;
mod plugin_dispatch;
mod plugin_registry;

pub use json_contract::{MOUNT_SNAPSHOT_JSON_SCHEMA_V1, MountSnapshotJsonContractV1};
pub use mount_config::{MountConfig, MountOptions};
pub use mount_manager::MountLifecycleManager;
pub use mount_snapshot::{MountPhase, MountSnapshot, MountStats};
