//! Browser bindings: DOM containers, `ResizeObserver` with a window resize
//! fallback, and factories backed by the Chartoon widget constructors.

use gloo_events::EventListener;
use js_sys::{Array, Function, JSON, Reflect};
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, ResizeObserver};

use crate::core::{ChartKind, Container, ContentBox};
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::observe::{
    ContentBoxObserver, ObserverConnection, ResizeCallback, SizeObservationAdapter,
    ViewportResizeSource,
};
use crate::render::{RenderOptions, WidgetFactory, WidgetHandle, WidgetRegistry};

/// Preview mount element owned by the page.
#[derive(Debug, Clone)]
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl Container for DomContainer {
    fn measure(&self) -> ContentBox {
        let rect = self.element.get_bounding_client_rect();
        ContentBox::new(rect.width(), rect.height())
    }

    fn clear(&self) {
        self.element.set_inner_html("");
    }

    fn snapshot_content(&self) -> Option<String> {
        Some(self.element.inner_html())
    }

    fn restore_content(&self, content: &str) {
        self.element.set_inner_html(content);
    }
}

fn global_has(name: &str) -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str(name)).unwrap_or(false)
}

struct InertConnection;

impl ObserverConnection for InertConnection {
    fn disconnect(&mut self) {}
}

/// Native `ResizeObserver` bound to the container element.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeResizeObserver;

struct ResizeObserverConnection {
    observer: ResizeObserver,
    _callback: Closure<dyn FnMut(Array, ResizeObserver)>,
}

impl ObserverConnection for ResizeObserverConnection {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

impl ContentBoxObserver<DomContainer> for NativeResizeObserver {
    fn is_supported(&self) -> bool {
        global_has("ResizeObserver")
    }

    fn observe(
        &self,
        container: &DomContainer,
        on_resize: ResizeCallback,
    ) -> Box<dyn ObserverConnection> {
        let callback = Closure::<dyn FnMut(Array, ResizeObserver)>::new(
            move |_entries: Array, _observer: ResizeObserver| on_resize(),
        );
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(container.element());
                Box::new(ResizeObserverConnection {
                    observer,
                    _callback: callback,
                })
            }
            Err(err) => {
                warn!(error = ?err, "ResizeObserver construction failed; not observing");
                Box::new(InertConnection)
            }
        }
    }
}

/// Window `resize` listener used when `ResizeObserver` is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowResizeSource;

struct ListenerConnection {
    listener: Option<EventListener>,
}

impl ObserverConnection for ListenerConnection {
    fn disconnect(&mut self) {
        // Dropping the listener removes it from the window.
        self.listener.take();
    }
}

impl ViewportResizeSource for WindowResizeSource {
    fn listen(&self, on_resize: ResizeCallback) -> Box<dyn ObserverConnection> {
        let Some(window) = web_sys::window() else {
            warn!("no window object; viewport resize events are not observed");
            return Box::new(InertConnection);
        };
        let listener = EventListener::new(&window, "resize", move |_event| on_resize());
        Box::new(ListenerConnection {
            listener: Some(listener),
        })
    }
}

/// Observation adapter preferring `ResizeObserver`, falling back to window resize events.
#[must_use]
pub fn browser_observation() -> SizeObservationAdapter<DomContainer> {
    SizeObservationAdapter::new(NativeResizeObserver, WindowResizeSource)
}

/// Calls `new Constructor(container, options)` with JSON-encoded options.
#[derive(Debug, Clone)]
pub struct JsConstructorFactory {
    constructor: Function,
}

impl JsConstructorFactory {
    #[must_use]
    pub fn new(constructor: Function) -> Self {
        Self { constructor }
    }
}

impl WidgetFactory<DomContainer> for JsConstructorFactory {
    fn draw(
        &self,
        container: &DomContainer,
        options: &RenderOptions,
    ) -> ShowcaseResult<WidgetHandle> {
        let kind = options.kind;
        let encoded = serde_json::to_string(options).map_err(|e| {
            ShowcaseError::draw_failure(kind, format!("failed to serialize options: {e}"))
        })?;
        let js_options = JSON::parse(&encoded)
            .map_err(|err| ShowcaseError::draw_failure(kind, format!("{err:?}")))?;
        let target: &JsValue = container.element().as_ref();
        let args = Array::of2(target, &js_options);
        let widget = Reflect::construct(&self.constructor, &args)
            .map_err(|err| ShowcaseError::draw_failure(kind, format!("{err:?}")))?;
        Ok(WidgetHandle::new(widget))
    }
}

/// Constructor export of the charting library for each renderable kind.
#[must_use]
pub const fn constructor_name(kind: ChartKind) -> Option<&'static str> {
    match kind {
        ChartKind::GetStarted => None,
        ChartKind::Bar => Some("ChartoonBarChart"),
        ChartKind::Line => Some("ChartoonBasicLineChart"),
        ChartKind::Pie => Some("ChartoonPieChart"),
        ChartKind::World => Some("ChartoonMapChart"),
        ChartKind::Radar => Some("ChartoonRadarChart"),
    }
}

/// Builds a registry from the library's module object.
///
/// Kinds whose constructor is missing from `module` stay unregistered and
/// render nothing.
pub fn registry_from_module(module: &JsValue) -> ShowcaseResult<WidgetRegistry<DomContainer>> {
    let mut registry = WidgetRegistry::new();
    for kind in ChartKind::RENDERABLE {
        let Some(name) = constructor_name(kind) else {
            continue;
        };
        let export = Reflect::get(module, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
        match export.dyn_into::<Function>() {
            Ok(constructor) => registry.register(kind, JsConstructorFactory::new(constructor))?,
            Err(_) => warn!(kind = %kind, constructor = name, "widget constructor not exported"),
        }
    }
    Ok(registry)
}
