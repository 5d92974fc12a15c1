use std::cell::Cell;

use crate::error::ShowcaseResult;
use crate::render::{RenderOptions, WidgetFactory, WidgetHandle};

/// No-op factory used by tests and headless hosts.
///
/// It still validates the options so tests catch invalid sizes before a real
/// widget library is wired in.
#[derive(Debug, Default)]
pub struct NullFactory {
    draw_count: Cell<usize>,
    last_options: Cell<Option<(u32, u32)>>,
}

impl NullFactory {
    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count.get()
    }

    /// Width and height of the most recent successful draw.
    #[must_use]
    pub fn last_size(&self) -> Option<(u32, u32)> {
        self.last_options.get()
    }
}

impl<C> WidgetFactory<C> for NullFactory {
    fn draw(&self, _container: &C, options: &RenderOptions) -> ShowcaseResult<WidgetHandle> {
        options.validate()?;
        self.draw_count.set(self.draw_count.get() + 1);
        self.last_options.set(Some((options.width, options.height)));
        Ok(WidgetHandle::detached())
    }
}
