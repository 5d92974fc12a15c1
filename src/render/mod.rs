mod null_factory;
mod options;
mod primitives;
mod registry;

pub use null_factory::NullFactory;
pub use options::{RESERVED_OPTION_KEYS, RenderOptions, WidgetHandle};
pub use primitives::Color;
pub use registry::{ResolvedFactory, WidgetRegistry};

use crate::error::ShowcaseResult;

/// Constructor contract of one widget kind.
///
/// Factories draw into the host container and return an opaque handle. A
/// failed construction is reported as `Err`; the caller decides how to
/// contain it. Widgets keep no state outside the container subtree they
/// populate, so clearing the container releases them.
pub trait WidgetFactory<C> {
    fn draw(&self, container: &C, options: &RenderOptions) -> ShowcaseResult<WidgetHandle>;
}

impl<C, F> WidgetFactory<C> for F
where
    F: Fn(&C, &RenderOptions) -> ShowcaseResult<WidgetHandle>,
{
    fn draw(&self, container: &C, options: &RenderOptions) -> ShowcaseResult<WidgetHandle> {
        self(container, options)
    }
}
