use serde::{Deserialize, Serialize};

use crate::core::{ChartKind, RenderDimensions};
use crate::observe::ObservationStrategy;

/// Coarse lifecycle phase of one mount point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountPhase {
    /// No container attached.
    Detached,
    /// Container attached, but no widget and no subscription (placeholder
    /// kind, unregistered kind, or a failed draw of a fixed-size kind).
    Idle,
    /// A widget or a resize subscription is live.
    Mounted,
}

/// Monotonic counters over the manager's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MountStats {
    pub draws: u64,
    pub draw_failures: u64,
    pub teardowns: u64,
    pub subscriptions: u64,
    pub disposals: u64,
    pub coalesced_resizes: u64,
}

impl MountStats {
    /// Subscriptions established and not yet disposed.
    #[must_use]
    pub fn live_subscriptions(self) -> u64 {
        self.subscriptions - self.disposals
    }
}

/// Serializable deterministic state snapshot used by tests and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountSnapshot {
    pub phase: MountPhase,
    pub kind: Option<ChartKind>,
    pub dimensions: Option<RenderDimensions>,
    pub has_widget: bool,
    pub subscription: Option<ObservationStrategy>,
    pub stats: MountStats,
}
