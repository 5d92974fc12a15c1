use indexmap::IndexMap;

use crate::core::ChartKind;
use crate::error::{ShowcaseError, ShowcaseResult};

use super::WidgetFactory;

struct RegisteredFactory<C> {
    factory: Box<dyn WidgetFactory<C>>,
    responsive: bool,
}

/// Maps each renderable chart kind to exactly one widget factory.
///
/// Responsiveness is registry metadata: callers never choose it per draw.
pub struct WidgetRegistry<C> {
    entries: IndexMap<ChartKind, RegisteredFactory<C>>,
}

/// Borrowed view of a registry entry returned by [`WidgetRegistry::resolve`].
pub struct ResolvedFactory<'a, C> {
    kind: ChartKind,
    factory: &'a dyn WidgetFactory<C>,
    responsive: bool,
}

impl<C> ResolvedFactory<'_, C> {
    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn is_responsive(&self) -> bool {
        self.responsive
    }

    #[must_use]
    pub fn factory(&self) -> &dyn WidgetFactory<C> {
        self.factory
    }
}

impl<C> Default for WidgetRegistry<C> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<C> WidgetRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `factory` using the kind's default responsiveness.
    pub fn register(
        &mut self,
        kind: ChartKind,
        factory: impl WidgetFactory<C> + 'static,
    ) -> ShowcaseResult<()> {
        self.register_with_responsiveness(kind, factory, kind.is_responsive_by_default())
    }

    pub fn register_with_responsiveness(
        &mut self,
        kind: ChartKind,
        factory: impl WidgetFactory<C> + 'static,
        responsive: bool,
    ) -> ShowcaseResult<()> {
        if !kind.is_renderable() {
            return Err(ShowcaseError::InvalidConfig(format!(
                "`{kind}` is a placeholder kind and cannot have a widget factory"
            )));
        }
        if self.entries.contains_key(&kind) {
            return Err(ShowcaseError::InvalidConfig(format!(
                "widget factory for `{kind}` is already registered"
            )));
        }
        self.entries.insert(
            kind,
            RegisteredFactory {
                factory: Box::new(factory),
                responsive,
            },
        );
        Ok(())
    }

    /// Removes the factory for `kind`. Returns `true` when removed.
    pub fn unregister(&mut self, kind: ChartKind) -> bool {
        self.entries.shift_remove(&kind).is_some()
    }

    /// Looks up the factory for `kind`; `None` means "render nothing".
    #[must_use]
    pub fn resolve(&self, kind: ChartKind) -> Option<ResolvedFactory<'_, C>> {
        self.entries.get(&kind).map(|entry| ResolvedFactory {
            kind,
            factory: entry.factory.as_ref(),
            responsive: entry.responsive,
        })
    }

    /// Like [`resolve`](Self::resolve), reporting a missing factory as
    /// [`ShowcaseError::UnresolvedKind`].
    pub fn require(&self, kind: ChartKind) -> ShowcaseResult<ResolvedFactory<'_, C>> {
        self.resolve(kind).ok_or(ShowcaseError::UnresolvedKind(kind))
    }

    #[must_use]
    pub fn is_registered(&self, kind: ChartKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = ChartKind> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
