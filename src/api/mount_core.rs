use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::core::{ChartKind, RenderDimensions};
use crate::extensions::MountPlugin;
use crate::observe::{SizeObservationAdapter, Subscription};
use crate::render::{WidgetHandle, WidgetRegistry};

use super::{MountConfig, MountOptions, MountPhase, MountSnapshot, MountStats};

/// Shared between the core and the resize callbacks it hands out.
///
/// `live_generation` names the only subscription whose callbacks are still
/// honored (`0` when none is live); stale callbacks are dropped silently.
#[derive(Debug, Default)]
pub(super) struct ResizeSignal {
    pub(super) live_generation: Cell<u64>,
    pub(super) pending: Cell<bool>,
}

pub(super) struct MountedWidget {
    pub(super) handle: WidgetHandle,
    pub(super) dimensions: RenderDimensions,
}

/// Per-container state between attach and detach.
pub(super) struct MountPoint<C> {
    pub(super) container: C,
    pub(super) kind: ChartKind,
    pub(super) options: MountOptions,
    pub(super) widget: Option<MountedWidget>,
    pub(super) subscription: Option<Subscription>,
}

impl<C> MountPoint<C> {
    pub(super) fn new(container: C, kind: ChartKind, options: MountOptions) -> Self {
        Self {
            container,
            kind,
            options,
            widget: None,
            subscription: None,
        }
    }
}

/// Internal state behind the public facade (`MountLifecycleManager`).
pub(super) struct MountCore<C> {
    pub(super) registry: WidgetRegistry<C>,
    pub(super) observation: SizeObservationAdapter<C>,
    pub(super) config: MountConfig,
    pub(super) plugins: Vec<Box<dyn MountPlugin>>,
    pub(super) point: Option<MountPoint<C>>,
    pub(super) stats: MountStats,
    pub(super) signal: Rc<ResizeSignal>,
    pub(super) last_generation: u64,
    pub(super) self_ref: Weak<RefCell<MountCore<C>>>,
}

impl<C> MountCore<C> {
    pub(super) fn new(
        registry: WidgetRegistry<C>,
        observation: SizeObservationAdapter<C>,
        config: MountConfig,
        self_ref: Weak<RefCell<MountCore<C>>>,
    ) -> Self {
        Self {
            registry,
            observation,
            config,
            plugins: Vec::new(),
            point: None,
            stats: MountStats::default(),
            signal: Rc::new(ResizeSignal::default()),
            last_generation: 0,
            self_ref,
        }
    }

    pub(super) fn phase(&self) -> MountPhase {
        match &self.point {
            None => MountPhase::Detached,
            Some(point) if point.widget.is_none() && point.subscription.is_none() => {
                MountPhase::Idle
            }
            Some(_) => MountPhase::Mounted,
        }
    }

    pub(super) fn snapshot(&self) -> MountSnapshot {
        let point = self.point.as_ref();
        MountSnapshot {
            phase: self.phase(),
            kind: point.map(|point| point.kind),
            dimensions: point
                .and_then(|point| point.widget.as_ref())
                .map(|widget| widget.dimensions),
            has_widget: point.is_some_and(|point| point.widget.is_some()),
            subscription: point
                .and_then(|point| point.subscription.as_ref())
                .map(Subscription::strategy),
            stats: self.stats,
        }
    }

    pub(super) fn widget_handle(&self) -> Option<&WidgetHandle> {
        self.point
            .as_ref()
            .and_then(|point| point.widget.as_ref())
            .map(|widget| &widget.handle)
    }
}
