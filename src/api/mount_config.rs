use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::catalog::{ChartPayload, PayloadCatalog};
use crate::core::{ChartKind, DimensionPolicy, SizingRule};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::render::Color;

/// Public mount lifecycle configuration.
///
/// This type is serializable so pages can ship sizing tables and example
/// payloads as JSON instead of hard-coding them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountConfig {
    #[serde(default)]
    pub dimension_policy: DimensionPolicy,
    #[serde(default)]
    pub payloads: PayloadCatalog,
    /// Skip teardown and redraw when a resize signal yields the mounted size.
    #[serde(default = "default_true")]
    pub coalesce_unchanged_resizes: bool,
    /// Re-establish the observer after each resize-triggered redraw.
    #[serde(default = "default_true")]
    pub resubscribe_after_resize: bool,
}

impl Default for MountConfig {
    fn default() -> Self {
        Self {
            dimension_policy: DimensionPolicy::default(),
            payloads: PayloadCatalog::default(),
            coalesce_unchanged_resizes: true,
            resubscribe_after_resize: true,
        }
    }
}

impl MountConfig {
    /// Sets the sizing rule of one kind.
    pub fn with_sizing_rule(mut self, kind: ChartKind, rule: SizingRule) -> ShowcaseResult<Self> {
        self.dimension_policy.set_rule(kind, rule)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_dimension_policy(mut self, policy: DimensionPolicy) -> Self {
        self.dimension_policy = policy;
        self
    }

    #[must_use]
    pub fn with_payload(mut self, kind: ChartKind, payload: ChartPayload) -> Self {
        self.payloads.insert(kind, payload);
        self
    }

    #[must_use]
    pub fn with_payloads(mut self, payloads: PayloadCatalog) -> Self {
        self.payloads = payloads;
        self
    }

    #[must_use]
    pub fn with_coalesce_unchanged_resizes(mut self, enabled: bool) -> Self {
        self.coalesce_unchanged_resizes = enabled;
        self
    }

    #[must_use]
    pub fn with_resubscribe_after_resize(mut self, enabled: bool) -> Self {
        self.resubscribe_after_resize = enabled;
        self
    }

    pub fn validate(&self) -> ShowcaseResult<()> {
        self.dimension_policy.validate()?;
        if self.payloads.payload_for(ChartKind::GetStarted).is_some() {
            return Err(ShowcaseError::InvalidConfig(
                "the get-started placeholder cannot carry an example payload".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ShowcaseResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShowcaseError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ShowcaseResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ShowcaseError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_true() -> bool {
    true
}

/// Host-supplied options for one attach–detach span.
///
/// They are merged over the kind's catalog payload on every draw, so they
/// survive identifier changes (a page-wide palette, for example).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MountOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<SmallVec<[Color; 4]>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl MountOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = Some(colors.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}
