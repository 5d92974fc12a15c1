use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

/// Measured inner size of a container, in CSS pixels.
///
/// Values come straight from a layout query, so they may be fractional,
/// zero before first layout, or even non-finite on exotic hosts.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentBox {
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Height usable for sizing, or `None` when the box has not been laid out.
    #[must_use]
    pub fn laid_out_height(self) -> Option<f64> {
        (self.height.is_finite() && self.height > 0.0).then_some(self.height)
    }

    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.width.is_finite() && self.width > 0.0 && self.laid_out_height().is_some()
    }

    pub fn require_laid_out(self) -> ShowcaseResult<Self> {
        if self.is_laid_out() {
            return Ok(self);
        }
        Err(ShowcaseError::MeasurementUnavailable {
            width: self.width,
            height: self.height,
        })
    }
}

/// Final integer size handed to a widget factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderDimensions {
    pub width: u32,
    pub height: u32,
}

impl RenderDimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}
