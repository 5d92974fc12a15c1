use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ShowcaseError, ShowcaseResult};

use super::{ChartKind, ContentBox, RenderDimensions};

/// Inclusive `[min, max]` clamp for both render axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionBounds {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl DimensionBounds {
    #[must_use]
    pub const fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Degenerate bounds pinning both axes to one size.
    #[must_use]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self::new(width, width, height, height)
    }

    pub fn validate(self) -> ShowcaseResult<()> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ShowcaseError::InvalidConfig(format!(
                "dimension bounds minimums must be > 0 (got {}x{})",
                self.min_width, self.min_height
            )));
        }
        if self.min_width > self.max_width || self.min_height > self.max_height {
            return Err(ShowcaseError::InvalidConfig(format!(
                "dimension bounds must satisfy min <= max (width {}..={}, height {}..={})",
                self.min_width, self.max_width, self.min_height, self.max_height
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn contains(self, dimensions: RenderDimensions) -> bool {
        (self.min_width..=self.max_width).contains(&dimensions.width)
            && (self.min_height..=self.max_height).contains(&dimensions.height)
    }

    #[must_use]
    pub fn clamp_width(self, measured: f64) -> u32 {
        clamp_rounded(measured, self.min_width, self.max_width)
    }

    #[must_use]
    pub fn clamp_height(self, measured: f64) -> u32 {
        clamp_rounded(measured, self.min_height, self.max_height)
    }
}

fn clamp_rounded(measured: f64, min: u32, max: u32) -> u32 {
    let rounded = if measured.is_finite() {
        measured.round()
    } else {
        0.0
    };
    // Bounded by `max: u32`, so the cast cannot truncate.
    rounded.clamp(f64::from(min), f64::from(max)) as u32
}

/// How one chart kind turns a measured content box into render dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum SizingRule {
    /// Follows the container, clamped to `bounds`. When the container has no
    /// height yet, the height is derived as `width * height_fallback_ratio`.
    Clamped {
        bounds: DimensionBounds,
        height_fallback_ratio: f64,
    },
    /// Ignores the container entirely.
    Fixed { width: u32, height: u32 },
}

impl SizingRule {
    #[must_use]
    pub const fn clamped(bounds: DimensionBounds, height_fallback_ratio: f64) -> Self {
        Self::Clamped {
            bounds,
            height_fallback_ratio,
        }
    }

    #[must_use]
    pub const fn fixed(width: u32, height: u32) -> Self {
        Self::Fixed { width, height }
    }

    pub fn validate(self) -> ShowcaseResult<()> {
        match self {
            Self::Clamped {
                bounds,
                height_fallback_ratio,
            } => {
                bounds.validate()?;
                if !height_fallback_ratio.is_finite() || height_fallback_ratio <= 0.0 {
                    return Err(ShowcaseError::InvalidConfig(format!(
                        "height fallback ratio must be finite and > 0 (got {height_fallback_ratio})"
                    )));
                }
                Ok(())
            }
            Self::Fixed { width, height } => DimensionBounds::fixed(width, height).validate(),
        }
    }

    #[must_use]
    pub fn bounds(self) -> DimensionBounds {
        match self {
            Self::Clamped { bounds, .. } => bounds,
            Self::Fixed { width, height } => DimensionBounds::fixed(width, height),
        }
    }

    /// Whether the output depends on the measured container size.
    #[must_use]
    pub fn follows_container(self) -> bool {
        matches!(self, Self::Clamped { .. })
    }

    #[must_use]
    pub fn apply(self, measured: ContentBox) -> RenderDimensions {
        match self {
            Self::Fixed { width, height } => RenderDimensions::new(width, height),
            Self::Clamped {
                bounds,
                height_fallback_ratio,
            } => {
                let width = bounds.clamp_width(measured.width);
                let height = match measured.laid_out_height() {
                    Some(height) => bounds.clamp_height(height),
                    None => bounds.clamp_height(f64::from(width) * height_fallback_ratio),
                };
                RenderDimensions::new(width, height)
            }
        }
    }
}

/// Per-kind sizing table.
///
/// Kinds without an explicit rule (including `get-started`) use the fallback
/// rule, so `compute_dimensions` is total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionPolicy {
    #[serde(default)]
    rules: IndexMap<ChartKind, SizingRule>,
    #[serde(default = "default_fallback_rule")]
    fallback: SizingRule,
}

impl Default for DimensionPolicy {
    fn default() -> Self {
        let mut rules = IndexMap::new();
        rules.insert(
            ChartKind::Bar,
            SizingRule::clamped(DimensionBounds::new(300, 700, 200, 320), 0.6),
        );
        rules.insert(ChartKind::Line, SizingRule::fixed(720, 320));
        rules.insert(ChartKind::Pie, SizingRule::fixed(320, 320));
        rules.insert(
            ChartKind::World,
            SizingRule::clamped(DimensionBounds::new(320, 900, 240, 600), 0.6),
        );
        rules.insert(
            ChartKind::Radar,
            SizingRule::clamped(DimensionBounds::new(400, 600, 300, 400), 0.75),
        );
        Self {
            rules,
            fallback: default_fallback_rule(),
        }
    }
}

impl DimensionPolicy {
    /// Policy with no per-kind rules; every kind uses `fallback`.
    pub fn with_fallback(fallback: SizingRule) -> ShowcaseResult<Self> {
        fallback.validate()?;
        Ok(Self {
            rules: IndexMap::new(),
            fallback,
        })
    }

    pub fn set_rule(&mut self, kind: ChartKind, rule: SizingRule) -> ShowcaseResult<()> {
        if !kind.is_renderable() {
            return Err(ShowcaseError::InvalidConfig(format!(
                "`{kind}` is not a renderable chart kind"
            )));
        }
        rule.validate()?;
        self.rules.insert(kind, rule);
        Ok(())
    }

    #[must_use]
    pub fn rule(&self, kind: ChartKind) -> SizingRule {
        self.rules.get(&kind).copied().unwrap_or(self.fallback)
    }

    #[must_use]
    pub fn fallback(&self) -> SizingRule {
        self.fallback
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        self.fallback.validate()?;
        for (kind, rule) in &self.rules {
            if !kind.is_renderable() {
                return Err(ShowcaseError::InvalidConfig(format!(
                    "`{kind}` is not a renderable chart kind"
                )));
            }
            rule.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn compute_dimensions(&self, kind: ChartKind, measured: ContentBox) -> RenderDimensions {
        self.rule(kind).apply(measured)
    }
}

fn default_fallback_rule() -> SizingRule {
    SizingRule::clamped(DimensionBounds::new(300, 900, 200, 600), 0.6)
}
