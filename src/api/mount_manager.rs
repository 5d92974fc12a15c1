use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{ChartKind, Container, RenderDimensions};
use crate::error::ShowcaseResult;
use crate::observe::{ObservationStrategy, SizeObservationAdapter};
use crate::render::WidgetRegistry;

use super::mount_core::MountCore;
use super::{MountConfig, MountOptions, MountPhase, MountSnapshot, MountStats};

/// Owns the widget and resize subscription of one chart preview container.
///
/// `attach`, `notify_identifier_changed` and `detach` are the only mutation
/// entry points; resize signals arrive through the observation adapter.
/// Every transition runs to completion before returning, tears the previous
/// widget down before drawing the next one, and never propagates a widget
/// failure to the caller.
pub struct MountLifecycleManager<C: Container + 'static> {
    pub(super) core: Rc<RefCell<MountCore<C>>>,
}

impl<C: Container + 'static> MountLifecycleManager<C> {
    pub fn new(
        registry: WidgetRegistry<C>,
        observation: SizeObservationAdapter<C>,
        config: MountConfig,
    ) -> ShowcaseResult<Self> {
        config.validate()?;
        let core = Rc::new_cyclic(|self_ref| {
            RefCell::new(MountCore::new(
                registry,
                observation,
                config,
                self_ref.clone(),
            ))
        });
        Ok(Self { core })
    }

    /// Binds `container` and mounts `kind` into it.
    ///
    /// Attaching while another container is bound detaches it first.
    pub fn attach(&mut self, container: C, kind: ChartKind, options: MountOptions) {
        self.transition(|core| core.attach(container, kind, options));
    }

    pub fn notify_identifier_changed(&mut self, new_kind: ChartKind) {
        self.transition(|core| core.change_identifier(new_kind));
    }

    /// Tears everything down and releases the container. Safe to call at any
    /// point and any number of times.
    pub fn detach(&mut self) {
        self.transition(MountCore::detach);
    }

    fn transition(&mut self, apply: impl FnOnce(&mut MountCore<C>)) {
        let mut core = self.core.borrow_mut();
        apply(&mut *core);
        core.drain_pending_resizes();
    }

    #[must_use]
    pub fn phase(&self) -> MountPhase {
        self.core.borrow().phase()
    }

    #[must_use]
    pub fn current_kind(&self) -> Option<ChartKind> {
        self.core.borrow().point.as_ref().map(|point| point.kind)
    }

    /// Dimensions of the mounted widget, if any.
    #[must_use]
    pub fn dimensions(&self) -> Option<RenderDimensions> {
        self.snapshot().dimensions
    }

    #[must_use]
    pub fn has_widget(&self) -> bool {
        self.core.borrow().widget_handle().is_some()
    }

    #[must_use]
    pub fn has_subscription(&self) -> bool {
        self.subscription_strategy().is_some()
    }

    #[must_use]
    pub fn subscription_strategy(&self) -> Option<ObservationStrategy> {
        self.snapshot().subscription
    }

    #[must_use]
    pub fn stats(&self) -> MountStats {
        self.core.borrow().stats
    }

    #[must_use]
    pub fn snapshot(&self) -> MountSnapshot {
        self.core.borrow().snapshot()
    }

    #[must_use]
    pub fn config(&self) -> MountConfig {
        self.core.borrow().config.clone()
    }

    /// Runs `inspect` against the mounted widget when it is a `T`.
    pub fn inspect_widget<T: Any, R>(&self, inspect: impl FnOnce(&T) -> R) -> Option<R> {
        let core = self.core.borrow();
        core.widget_handle()
            .and_then(|handle| handle.downcast_ref::<T>())
            .map(inspect)
    }
}

impl<C: Container + 'static> Drop for MountLifecycleManager<C> {
    fn drop(&mut self) {
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.detach();
        }
    }
}
