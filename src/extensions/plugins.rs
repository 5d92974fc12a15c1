use serde::{Deserialize, Serialize};

use crate::api::MountPhase;
use crate::core::{ChartKind, RenderDimensions};
use crate::observe::ObservationStrategy;

/// Read-only mount state passed to plugin hooks, taken after the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountContext {
    pub phase: MountPhase,
    pub kind: Option<ChartKind>,
    pub dimensions: Option<RenderDimensions>,
    pub subscription: Option<ObservationStrategy>,
}

/// Event stream exposed to plugins, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountEvent {
    Attached { kind: ChartKind },
    /// The kind has no factory; the placeholder stays in place.
    Unresolved { kind: ChartKind },
    /// Container cleared and widget handle dropped.
    TornDown { kind: ChartKind },
    Drawn {
        kind: ChartKind,
        dimensions: RenderDimensions,
    },
    DrawFailed { kind: ChartKind },
    Subscribed { strategy: ObservationStrategy },
    Unsubscribed { strategy: ObservationStrategy },
    /// A resize signal produced the dimensions already mounted.
    ResizeCoalesced { dimensions: RenderDimensions },
    Detached,
}

/// Extension hook interface for bounded custom logic.
pub trait MountPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: MountEvent, context: MountContext);
}
