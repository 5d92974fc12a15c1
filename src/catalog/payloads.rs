use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use smallvec::{SmallVec, smallvec};

use crate::core::ChartKind;
use crate::render::Color;

/// Static example options for one chart kind.
///
/// `fields` is opaque to the mount lifecycle: series data and kind-specific
/// extensions are forwarded to the widget factory unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub colors: SmallVec<[Color; 4]>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ChartPayload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }
}

/// Example payloads keyed by chart kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadCatalog {
    payloads: IndexMap<ChartKind, ChartPayload>,
}

impl PayloadCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            payloads: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, kind: ChartKind, payload: ChartPayload) -> Option<ChartPayload> {
        self.payloads.insert(kind, payload)
    }

    #[must_use]
    pub fn payload_for(&self, kind: ChartKind) -> Option<&ChartPayload> {
        self.payloads.get(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl Default for PayloadCatalog {
    fn default() -> Self {
        let mut catalog = Self::empty();
        catalog.insert(ChartKind::Bar, bar_payload());
        catalog.insert(ChartKind::Line, line_payload());
        catalog.insert(ChartKind::Pie, pie_payload());
        catalog.insert(ChartKind::World, world_payload());
        catalog.insert(ChartKind::Radar, radar_payload());
        catalog
    }
}

fn bar_payload() -> ChartPayload {
    ChartPayload::new()
        .with_colors([Color::PRIMARY])
        .with_field(
            "data",
            json!([{ "title": "Series 1", "data": [
                { "label": "A", "value": 30 },
                { "label": "B", "value": 55 },
            ]}]),
        )
}

fn line_payload() -> ChartPayload {
    ChartPayload::new()
        .with_colors([Color::PRIMARY, Color::rgb(0x60, 0xa5, 0xfa)])
        .with_field(
            "data",
            json!([
                { "title": "Jan", "data": [
                    { "label": "A", "value": 30 },
                    { "label": "B", "value": 50 },
                ]},
                { "title": "Feb", "data": [
                    { "label": "A", "value": 40 },
                    { "label": "B", "value": 60 },
                ]},
            ]),
        )
}

fn pie_payload() -> ChartPayload {
    ChartPayload::new()
        .with_field(
            "data",
            json!([{ "title": "Series 1", "data": [
                { "label": "A", "value": 30 },
                { "label": "B", "value": 70 },
            ]}]),
        )
        .with_field("tooltipVisible", json!(true))
}

fn world_payload() -> ChartPayload {
    ChartPayload::new().with_field("region", json!("uk"))
}

fn radar_payload() -> ChartPayload {
    let series = |title: &str, values: [u32; 5]| {
        let labels = ["Performance", "Accessibility", "SEO", "Best Practices", "UX"];
        let data: Vec<Value> = labels
            .iter()
            .zip(values)
            .map(|(label, value)| json!({ "label": label, "value": value }))
            .collect();
        json!({ "title": title, "data": data })
    };

    ChartPayload {
        colors: smallvec![
            Color::rgb(0xef, 0x44, 0x44),
            Color::rgb(0x00, 0x00, 0x00),
            Color::rgb(0x3b, 0x82, 0xf6),
        ],
        fields: Map::new(),
    }
    .with_field(
        "data",
        json!([
            series("Frontend", [85, 70, 90, 80, 88]),
            series("Backend", [78, 60, 65, 92, 70]),
            series("DevOps", [90, 55, 50, 88, 60]),
        ]),
    )
    .with_field("levels", json!(5))
    .with_field("maxValue", json!(100))
    .with_field("areaOpacity", json!(0.35))
    .with_field("strokeWidth", json!(1))
    .with_field("circleConfig", json!({ "radius": 4 }))
}
