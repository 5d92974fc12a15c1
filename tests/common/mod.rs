#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chartoon_showcase::core::{ChartKind, Container, ContentBox};
use chartoon_showcase::extensions::{MountContext, MountEvent, MountPlugin};
use chartoon_showcase::observe::{ContentBoxObserver, ObserverConnection, ResizeCallback};
use chartoon_showcase::render::{RenderOptions, WidgetFactory, WidgetHandle};
use chartoon_showcase::{ShowcaseError, ShowcaseResult};

/// Ordered record of container, factory and observer side effects.
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

struct FakeDom {
    size: Cell<(f64, f64)>,
    content: RefCell<Vec<String>>,
    log: CallLog,
}

/// Container double: a measurable box holding a list of child nodes.
#[derive(Clone)]
pub struct FakeContainer {
    dom: Rc<FakeDom>,
}

impl FakeContainer {
    pub fn new(log: &CallLog, width: f64, height: f64) -> Self {
        Self {
            dom: Rc::new(FakeDom {
                size: Cell::new((width, height)),
                content: RefCell::new(Vec::new()),
                log: Rc::clone(log),
            }),
        }
    }

    pub fn with_placeholder(self, markup: &str) -> Self {
        self.dom.content.borrow_mut().push(markup.to_owned());
        self
    }

    pub fn resize(&self, width: f64, height: f64) {
        self.dom.size.set((width, height));
    }

    pub fn content(&self) -> Vec<String> {
        self.dom.content.borrow().clone()
    }

    pub fn append(&self, node: String) {
        self.dom.content.borrow_mut().push(node);
    }
}

impl Container for FakeContainer {
    fn measure(&self) -> ContentBox {
        let (width, height) = self.dom.size.get();
        ContentBox::new(width, height)
    }

    fn clear(&self) {
        self.dom.log.borrow_mut().push("clear".to_owned());
        self.dom.content.borrow_mut().clear();
    }

    fn snapshot_content(&self) -> Option<String> {
        Some(self.dom.content.borrow().join("\n"))
    }

    fn restore_content(&self, content: &str) {
        self.dom.log.borrow_mut().push("restore".to_owned());
        let mut nodes = self.dom.content.borrow_mut();
        nodes.clear();
        nodes.extend(
            content
                .split('\n')
                .filter(|node| !node.is_empty())
                .map(str::to_owned),
        );
    }
}

/// Widget stored behind the handle by [`RecordingFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnWidget {
    pub kind: ChartKind,
    pub width: u32,
    pub height: u32,
}

/// Factory double that appends a node per draw and records the options.
#[derive(Clone)]
pub struct RecordingFactory {
    log: CallLog,
    pub drawn: Rc<RefCell<Vec<RenderOptions>>>,
    failures_left: Rc<Cell<usize>>,
}

impl RecordingFactory {
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: Rc::clone(log),
            drawn: Rc::default(),
            failures_left: Rc::default(),
        }
    }

    /// Makes the next `count` draws fail.
    pub fn failing(self, count: usize) -> Self {
        self.failures_left.set(count);
        self
    }

    pub fn draw_count(&self) -> usize {
        self.drawn.borrow().len()
    }

    pub fn last_options(&self) -> Option<RenderOptions> {
        self.drawn.borrow().last().cloned()
    }
}

impl WidgetFactory<FakeContainer> for RecordingFactory {
    fn draw(
        &self,
        container: &FakeContainer,
        options: &RenderOptions,
    ) -> ShowcaseResult<WidgetHandle> {
        self.log
            .borrow_mut()
            .push(format!("draw:{}", options.kind));
        if self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            return Err(ShowcaseError::draw_failure(options.kind, "widget threw"));
        }
        container.append(format!(
            "{}:{}x{}",
            options.kind, options.width, options.height
        ));
        self.drawn.borrow_mut().push(options.clone());
        Ok(WidgetHandle::new(DrawnWidget {
            kind: options.kind,
            width: options.width,
            height: options.height,
        }))
    }
}

struct ObserverState {
    supported: bool,
    fire_on_observe: Cell<bool>,
    live: RefCell<Vec<Option<ResizeCallback>>>,
    log: CallLog,
}

/// Content-box observer double. Every callback ever handed out is kept so
/// tests can replay stale ones.
#[derive(Clone)]
pub struct FakeResizeObserver {
    state: Rc<ObserverState>,
    history: Rc<RefCell<Vec<ResizeCallback>>>,
}

impl FakeResizeObserver {
    pub fn new(log: &CallLog) -> Self {
        Self::with_support(log, true)
    }

    pub fn unsupported(log: &CallLog) -> Self {
        Self::with_support(log, false)
    }

    fn with_support(log: &CallLog, supported: bool) -> Self {
        Self {
            state: Rc::new(ObserverState {
                supported,
                fire_on_observe: Cell::new(false),
                live: RefCell::new(Vec::new()),
                log: Rc::clone(log),
            }),
            history: Rc::default(),
        }
    }

    /// Emits an initial notification synchronously from `observe`.
    pub fn notify_on_observe(&self, enabled: bool) {
        self.state.fire_on_observe.set(enabled);
    }

    pub fn live_count(&self) -> usize {
        self.state.live.borrow().iter().flatten().count()
    }

    pub fn observed_total(&self) -> usize {
        self.history.borrow().len()
    }

    /// Notifies every live observation.
    pub fn fire(&self) {
        let callbacks: Vec<ResizeCallback> =
            self.state.live.borrow().iter().flatten().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Replays the callback of the `index`-th observation, live or not.
    pub fn fire_historical(&self, index: usize) {
        let callback = self.history.borrow().get(index).cloned();
        if let Some(callback) = callback {
            callback();
        }
    }
}

struct FakeConnection {
    state: Rc<ObserverState>,
    slot: usize,
}

impl ObserverConnection for FakeConnection {
    fn disconnect(&mut self) {
        self.state.log.borrow_mut().push("disconnect".to_owned());
        if let Some(entry) = self.state.live.borrow_mut().get_mut(self.slot) {
            entry.take();
        }
    }
}

impl ContentBoxObserver<FakeContainer> for FakeResizeObserver {
    fn is_supported(&self) -> bool {
        self.state.supported
    }

    fn observe(
        &self,
        _container: &FakeContainer,
        on_resize: ResizeCallback,
    ) -> Box<dyn ObserverConnection> {
        self.state.log.borrow_mut().push("observe".to_owned());
        let slot = {
            let mut live = self.state.live.borrow_mut();
            live.push(Some(Rc::clone(&on_resize)));
            live.len() - 1
        };
        self.history.borrow_mut().push(Rc::clone(&on_resize));
        if self.state.fire_on_observe.get() {
            on_resize();
        }
        Box::new(FakeConnection {
            state: Rc::clone(&self.state),
            slot,
        })
    }
}

#[derive(Clone)]
pub struct RecordingPlugin {
    id: String,
    pub events: Rc<RefCell<Vec<(MountEvent, MountContext)>>>,
}

impl RecordingPlugin {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            events: Rc::default(),
        }
    }

    pub fn event_names(&self) -> Vec<&'static str> {
        self.events
            .borrow()
            .iter()
            .map(|(event, _)| event_name(event))
            .collect()
    }
}

impl MountPlugin for RecordingPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: MountEvent, context: MountContext) {
        self.events.borrow_mut().push((event, context));
    }
}

pub fn event_name(event: &MountEvent) -> &'static str {
    match event {
        MountEvent::Attached { .. } => "attached",
        MountEvent::Unresolved { .. } => "unresolved",
        MountEvent::TornDown { .. } => "torn_down",
        MountEvent::Drawn { .. } => "drawn",
        MountEvent::DrawFailed { .. } => "draw_failed",
        MountEvent::Subscribed { .. } => "subscribed",
        MountEvent::Unsubscribed { .. } => "unsubscribed",
        MountEvent::ResizeCoalesced { .. } => "coalesced",
        MountEvent::Detached => "detached",
    }
}
