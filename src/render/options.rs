use std::any::Any;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::core::{ChartKind, RenderDimensions};
use crate::error::{ShowcaseError, ShowcaseResult};

use super::Color;

/// Option keys owned by the mount lifecycle; payload fields never override them.
pub const RESERVED_OPTION_KEYS: [&str; 4] = ["width", "height", "colors", "responsive"];

/// Options handed to a widget factory for one draw call.
///
/// Serializes to the flat camelCase object the charting library expects:
/// the sizing fields plus every kind-specific extension (`levels`,
/// `region`, series `data`, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOptions {
    #[serde(skip)]
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub colors: SmallVec<[Color; 4]>,
    pub responsive: bool,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl RenderOptions {
    #[must_use]
    pub fn new(kind: ChartKind, dimensions: RenderDimensions, responsive: bool) -> Self {
        Self {
            kind,
            width: dimensions.width,
            height: dimensions.height,
            colors: SmallVec::new(),
            responsive,
            extensions: Map::new(),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    /// Adds extension fields; reserved keys are skipped.
    #[must_use]
    pub fn with_extensions(mut self, fields: &Map<String, Value>) -> Self {
        for (key, value) in fields {
            if RESERVED_OPTION_KEYS.contains(&key.as_str()) {
                continue;
            }
            self.extensions.insert(key.clone(), value.clone());
        }
        self
    }

    #[must_use]
    pub fn dimensions(&self) -> RenderDimensions {
        RenderDimensions::new(self.width, self.height)
    }

    #[must_use]
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        if !self.dimensions().is_valid() {
            return Err(ShowcaseError::draw_failure(
                self.kind,
                format!("invalid render size {}x{}", self.width, self.height),
            ));
        }
        Ok(())
    }

    pub fn to_json_value(&self) -> ShowcaseResult<Value> {
        serde_json::to_value(self).map_err(|e| {
            ShowcaseError::draw_failure(self.kind, format!("failed to serialize options: {e}"))
        })
    }
}

/// Opaque result of a successful draw.
///
/// The lifecycle only tracks that a widget exists; dropping the handle
/// together with clearing the container releases it.
pub struct WidgetHandle {
    widget: Box<dyn Any>,
}

impl WidgetHandle {
    #[must_use]
    pub fn new<T: Any>(widget: T) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    /// Handle for widgets whose whole state lives in the container subtree.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(())
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.widget.downcast_ref()
    }
}

impl fmt::Debug for WidgetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetHandle").finish_non_exhaustive()
    }
}
