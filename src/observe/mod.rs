//! Container size observation.
//!
//! Two mutually exclusive strategies produce the same "resized" signal: a
//! native content-box observer bound to the container, or a coarser
//! viewport-resize listener used when the host has no such observer.

mod manual;

pub use manual::ManualResizeSource;

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Invoked on every reported size change. Carries no dimensions: the
/// receiver re-measures the container itself.
pub type ResizeCallback = Rc<dyn Fn()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationStrategy {
    /// Native content-box observation of the container element.
    ContentBox,
    /// Global viewport resize events.
    ViewportResize,
}

/// Live attachment of an underlying observer or listener.
pub trait ObserverConnection {
    /// Detaches the observer. Called at most once by [`Subscription`].
    fn disconnect(&mut self);
}

/// Native content-box observation (e.g. `ResizeObserver`).
pub trait ContentBoxObserver<C> {
    /// Whether the host environment provides native observation.
    fn is_supported(&self) -> bool;

    /// Starts observing `container`. The first callback may be the
    /// observer's initial notification.
    fn observe(&self, container: &C, on_resize: ResizeCallback) -> Box<dyn ObserverConnection>;
}

/// Global viewport resize events.
pub trait ViewportResizeSource {
    fn listen(&self, on_resize: ResizeCallback) -> Box<dyn ObserverConnection>;
}

/// One established observation. Disposal is idempotent and also happens
/// on drop, so a subscription never outlives its owner.
pub struct Subscription {
    strategy: ObservationStrategy,
    connection: Option<Box<dyn ObserverConnection>>,
}

impl Subscription {
    #[must_use]
    pub fn strategy(&self) -> ObservationStrategy {
        self.strategy
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.connection.is_some()
    }

    pub fn dispose(&mut self) {
        if let Some(mut connection) = self.connection.take() {
            connection.disconnect();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("strategy", &self.strategy)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Picks the observation strategy and hands out [`Subscription`]s.
pub struct SizeObservationAdapter<C> {
    content_box: Option<Box<dyn ContentBoxObserver<C>>>,
    viewport: Box<dyn ViewportResizeSource>,
}

impl<C> SizeObservationAdapter<C> {
    /// Uses `content_box` when the host supports it, `viewport` otherwise.
    #[must_use]
    pub fn new(
        content_box: impl ContentBoxObserver<C> + 'static,
        viewport: impl ViewportResizeSource + 'static,
    ) -> Self {
        Self {
            content_box: Some(Box::new(content_box)),
            viewport: Box::new(viewport),
        }
    }

    #[must_use]
    pub fn viewport_only(viewport: impl ViewportResizeSource + 'static) -> Self {
        Self {
            content_box: None,
            viewport: Box::new(viewport),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> ObservationStrategy {
        match &self.content_box {
            Some(observer) if observer.is_supported() => ObservationStrategy::ContentBox,
            _ => ObservationStrategy::ViewportResize,
        }
    }

    pub fn observe(&self, container: &C, on_resize: ResizeCallback) -> Subscription {
        let strategy = self.strategy();
        let connection = match (&self.content_box, strategy) {
            (Some(observer), ObservationStrategy::ContentBox) => {
                observer.observe(container, on_resize)
            }
            _ => self.viewport.listen(on_resize),
        };
        Subscription {
            strategy,
            connection: Some(connection),
        }
    }
}
