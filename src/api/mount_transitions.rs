use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::catalog::PayloadCatalog;
use crate::core::{ChartKind, Container, RenderDimensions};
use crate::extensions::MountEvent;
use crate::observe::ResizeCallback;
use crate::render::RenderOptions;

use super::mount_core::{MountCore, MountPoint, MountedWidget};
use super::MountOptions;

/// Upper bound on resize passes drained by one transition. Only reachable
/// when an observer re-notifies synchronously on every redraw.
const MAX_RESIZE_PASSES: usize = 8;

impl<C: Container + 'static> MountCore<C> {
    pub(super) fn attach(&mut self, container: C, kind: ChartKind, options: MountOptions) {
        if self.point.is_some() {
            debug!(kind = %kind, "attach on a live mount point; detaching the previous container");
            self.detach();
        }
        debug!(kind = %kind, "attaching container");
        self.point = Some(MountPoint::new(container, kind, options));
        self.emit_event(MountEvent::Attached { kind });
        self.mount_current();
    }

    pub(super) fn change_identifier(&mut self, new_kind: ChartKind) {
        let Some(point) = self.point.as_mut() else {
            debug!(kind = %new_kind, "identifier changed without an attached container; ignoring");
            return;
        };
        if point.kind == new_kind {
            trace!(kind = %new_kind, "identifier unchanged");
            return;
        }
        debug!(from = %point.kind, to = %new_kind, "chart identifier changed; remounting");

        self.dispose_subscription();
        self.teardown_widget();
        if let Some(point) = self.point.as_mut() {
            point.kind = new_kind;
        }
        self.mount_current();
    }

    /// Idempotent: a detached core stays untouched.
    pub(super) fn detach(&mut self) {
        if self.point.is_none() {
            return;
        }
        self.dispose_subscription();
        self.teardown_widget();
        self.point = None;
        self.signal.pending.set(false);
        debug!("container detached");
        self.emit_event(MountEvent::Detached);
    }

    /// Runs queued resize signals until none is left.
    pub(super) fn drain_pending_resizes(&mut self) {
        let mut passes = 0;
        while self.signal.pending.replace(false) {
            if passes == MAX_RESIZE_PASSES {
                warn!(
                    passes,
                    "resize signals keep arriving during redraw; waiting for the next signal"
                );
                return;
            }
            passes += 1;
            self.handle_resize();
        }
    }

    fn mount_current(&mut self) {
        let Some(kind) = self.point.as_ref().map(|point| point.kind) else {
            return;
        };
        let responsive = match self.registry.require(kind) {
            Ok(resolved) => resolved.is_responsive(),
            Err(err) => {
                debug!(error = %err, "leaving placeholder content");
                self.emit_event(MountEvent::Unresolved { kind });
                return;
            }
        };

        self.draw_current(kind, responsive);
        if responsive {
            self.subscribe_current();
        }
    }

    fn handle_resize(&mut self) {
        let Some(point) = self.point.as_ref() else {
            return;
        };
        let kind = point.kind;
        let responsive = self
            .registry
            .resolve(kind)
            .is_some_and(|resolved| resolved.is_responsive());
        if !responsive {
            return;
        }

        let dimensions = self
            .config
            .dimension_policy
            .compute_dimensions(kind, point.container.measure());
        let mounted = point.widget.as_ref().map(|widget| widget.dimensions);
        if self.config.coalesce_unchanged_resizes && mounted == Some(dimensions) {
            self.stats.coalesced_resizes += 1;
            trace!(kind = %kind, "resize kept the mounted size; skipping redraw");
            self.emit_event(MountEvent::ResizeCoalesced { dimensions });
            return;
        }

        debug!(kind = %kind, "container resized; redrawing widget");
        self.teardown_widget();
        self.draw_current(kind, responsive);
        // Clearing the container may invalidate an observer bound below it.
        if self.config.resubscribe_after_resize {
            self.subscribe_current();
        }
    }

    fn draw_current(&mut self, kind: ChartKind, responsive: bool) {
        let (outcome, before_draw) = {
            let Some(point) = self.point.as_ref() else {
                return;
            };
            let Some(resolved) = self.registry.resolve(kind) else {
                return;
            };
            debug_assert!(point.widget.is_none(), "previous widget must be torn down first");

            let before_draw = point.container.snapshot_content();
            let measured = point.container.measure();
            if let Err(err) = measured.require_laid_out() {
                debug!(kind = %kind, error = %err, "deriving fallback size before layout settled");
            }
            let dimensions = self
                .config
                .dimension_policy
                .compute_dimensions(kind, measured);
            let options = build_render_options(
                &self.config.payloads,
                kind,
                dimensions,
                responsive,
                &point.options,
            );
            let outcome = resolved
                .factory()
                .draw(&point.container, &options)
                .map(|handle| MountedWidget { handle, dimensions });
            (outcome, before_draw)
        };

        match outcome {
            Ok(widget) => {
                let dimensions = widget.dimensions;
                if let Some(point) = self.point.as_mut() {
                    point.widget = Some(widget);
                }
                self.stats.draws += 1;
                debug!(
                    kind = %kind,
                    width = dimensions.width,
                    height = dimensions.height,
                    "widget drawn"
                );
                self.emit_event(MountEvent::Drawn { kind, dimensions });
            }
            Err(err) => {
                // Drop whatever the factory wrote before failing.
                if let Some(point) = self.point.as_ref() {
                    match before_draw {
                        Some(content) => point.container.restore_content(&content),
                        None => point.container.clear(),
                    }
                }
                self.stats.draw_failures += 1;
                warn!(kind = %kind, error = %err, "chart mount error; restored pre-draw content");
                self.emit_event(MountEvent::DrawFailed { kind });
            }
        }
    }

    /// Clears the container and drops the handle in one step.
    fn teardown_widget(&mut self) {
        let Some(point) = self.point.as_mut() else {
            return;
        };
        point.container.clear();
        let kind = point.kind;
        if point.widget.take().is_some() {
            self.stats.teardowns += 1;
            debug!(kind = %kind, "widget torn down");
            self.emit_event(MountEvent::TornDown { kind });
        }
    }

    fn subscribe_current(&mut self) {
        self.dispose_subscription();
        if self.point.is_none() {
            return;
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        let callback = self.resize_callback(generation);
        self.signal.live_generation.set(generation);

        let Some(point) = self.point.as_mut() else {
            return;
        };
        let subscription = self.observation.observe(&point.container, callback);
        let strategy = subscription.strategy();
        point.subscription = Some(subscription);
        self.stats.subscriptions += 1;
        debug!(?strategy, generation, "resize subscription established");
        self.emit_event(MountEvent::Subscribed { strategy });
    }

    fn dispose_subscription(&mut self) {
        let Some(mut subscription) = self
            .point
            .as_mut()
            .and_then(|point| point.subscription.take())
        else {
            return;
        };
        self.signal.live_generation.set(0);
        self.signal.pending.set(false);
        subscription.dispose();
        let strategy = subscription.strategy();
        self.stats.disposals += 1;
        debug!(?strategy, "resize subscription disposed");
        self.emit_event(MountEvent::Unsubscribed { strategy });
    }

    fn resize_callback(&self, generation: u64) -> ResizeCallback {
        let core = self.self_ref.clone();
        let signal = Rc::clone(&self.signal);
        Rc::new(move || {
            if signal.live_generation.get() != generation {
                return;
            }
            signal.pending.set(true);
            let Some(shared) = core.upgrade() else {
                return;
            };
            // Signals raised during a running transition stay pending and
            // are drained by that transition before it returns.
            let Ok(mut guard) = shared.try_borrow_mut() else {
                return;
            };
            guard.drain_pending_resizes();
        })
    }
}

/// Merges catalog payload and host options into factory options.
///
/// Host colors replace payload colors; host fields override payload fields.
pub(super) fn build_render_options(
    payloads: &PayloadCatalog,
    kind: ChartKind,
    dimensions: RenderDimensions,
    responsive: bool,
    options: &MountOptions,
) -> RenderOptions {
    let payload = payloads.payload_for(kind);
    let colors = options
        .colors
        .clone()
        .or_else(|| payload.map(|payload| payload.colors.clone()))
        .unwrap_or_default();

    let mut render = RenderOptions::new(kind, dimensions, responsive).with_colors(colors);
    if let Some(payload) = payload {
        render = render.with_extensions(&payload.fields);
    }
    render.with_extensions(&options.fields)
}
