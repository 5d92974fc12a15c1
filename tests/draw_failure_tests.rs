mod common;

use chartoon_showcase::api::{MountConfig, MountLifecycleManager, MountOptions, MountPhase};
use chartoon_showcase::core::{ChartKind, RenderDimensions};
use chartoon_showcase::observe::{ManualResizeSource, SizeObservationAdapter};
use chartoon_showcase::render::{RenderOptions, WidgetHandle, WidgetRegistry};
use chartoon_showcase::{ShowcaseError, ShowcaseResult};

use common::{FakeContainer, FakeResizeObserver, RecordingFactory, RecordingPlugin, call_log};

fn manager_with(
    factory: &RecordingFactory,
    observer: &FakeResizeObserver,
) -> MountLifecycleManager<FakeContainer> {
    let mut registry = WidgetRegistry::new();
    for kind in ChartKind::RENDERABLE {
        registry
            .register(kind, factory.clone())
            .expect("register factory");
    }
    MountLifecycleManager::new(
        registry,
        SizeObservationAdapter::new(observer.clone(), ManualResizeSource::new()),
        MountConfig::default(),
    )
    .expect("manager init")
}

#[test]
fn failed_draw_keeps_placeholder_and_is_not_propagated() {
    let log = call_log();
    let factory = RecordingFactory::new(&log).failing(1);
    let observer = FakeResizeObserver::new(&log);
    let mut manager = manager_with(&factory, &observer);
    let plugin = RecordingPlugin::new("recorder");
    manager
        .register_plugin(Box::new(plugin.clone()))
        .expect("register plugin");

    let container = FakeContainer::new(&log, 320.0, 200.0).with_placeholder("<svg-skeleton/>");
    manager.attach(container.clone(), ChartKind::Pie, MountOptions::new());

    assert_eq!(container.content(), vec!["<svg-skeleton/>".to_owned()]);
    assert!(!manager.has_widget());
    assert_eq!(manager.phase(), MountPhase::Idle);
    assert_eq!(manager.stats().draw_failures, 1);
    assert_eq!(plugin.event_names(), vec!["attached", "draw_failed"]);
}

#[test]
fn identifier_change_after_failure_gets_a_fresh_attempt() {
    let log = call_log();
    let factory = RecordingFactory::new(&log).failing(1);
    let observer = FakeResizeObserver::new(&log);
    let mut manager = manager_with(&factory, &observer);

    let container = FakeContainer::new(&log, 500.0, 250.0);
    manager.attach(container.clone(), ChartKind::Line, MountOptions::new());
    assert!(!manager.has_widget());

    manager.notify_identifier_changed(ChartKind::Pie);
    assert!(manager.has_widget());
    assert_eq!(manager.dimensions(), Some(RenderDimensions::new(320, 320)));
    assert_eq!(container.content(), vec!["pie:320x320".to_owned()]);
}

#[test]
fn responsive_kind_retries_on_the_next_resize_signal() {
    let log = call_log();
    let factory = RecordingFactory::new(&log).failing(1);
    let observer = FakeResizeObserver::new(&log);
    let mut manager = manager_with(&factory, &observer);

    let container = FakeContainer::new(&log, 500.0, 250.0);
    manager.attach(container.clone(), ChartKind::Bar, MountOptions::new());
    assert!(!manager.has_widget());
    assert!(manager.has_subscription());
    assert_eq!(manager.phase(), MountPhase::Mounted);

    observer.fire();
    assert!(manager.has_widget());
    assert_eq!(manager.dimensions(), Some(RenderDimensions::new(500, 250)));
    assert_eq!(manager.stats().coalesced_resizes, 0);
    assert_eq!(observer.live_count(), 1);
}

#[test]
fn later_attach_succeeds_after_a_failure() {
    let log = call_log();
    let factory = RecordingFactory::new(&log).failing(2);
    let observer = FakeResizeObserver::new(&log);
    let mut manager = manager_with(&factory, &observer);

    let container = FakeContainer::new(&log, 640.0, 480.0);
    manager.attach(container.clone(), ChartKind::World, MountOptions::new());
    container.resize(700.0, 480.0);
    observer.fire();
    assert!(!manager.has_widget());
    assert_eq!(manager.stats().draw_failures, 2);

    manager.detach();
    manager.attach(container.clone(), ChartKind::World, MountOptions::new());
    assert!(manager.has_widget());
    assert_eq!(manager.dimensions(), Some(RenderDimensions::new(700, 480)));
    assert_eq!(observer.live_count(), 1);
}

#[test]
fn invalid_sizing_is_rejected_before_any_mount() {
    let log = call_log();
    let factory = RecordingFactory::new(&log);
    let input = r#"{ "dimension_policy": { "fallback": { "rule": "fixed", "width": 0, "height": 10 } } }"#;
    let err = MountConfig::from_json_str(input).expect_err("zero-sized fallback must fail");
    assert!(matches!(err, ShowcaseError::InvalidConfig(_)));

    let mut registry = WidgetRegistry::<FakeContainer>::new();
    registry
        .register(ChartKind::Bar, factory)
        .expect("register bar");
    let config = MountConfig::default().with_payload(
        ChartKind::GetStarted,
        chartoon_showcase::catalog::ChartPayload::new(),
    );
    let result = MountLifecycleManager::new(
        registry,
        SizeObservationAdapter::viewport_only(ManualResizeSource::new()),
        config,
    );
    assert!(result.is_err());
}

fn half_drawing_factory(
    container: &FakeContainer,
    options: &RenderOptions,
) -> ShowcaseResult<WidgetHandle> {
    container.append(format!("<svg partial {}>", options.kind));
    Err(ShowcaseError::draw_failure(options.kind, "threw after appending"))
}

fn half_drawing_manager(
    log: &common::CallLog,
) -> (MountLifecycleManager<FakeContainer>, FakeResizeObserver) {
    let observer = FakeResizeObserver::new(log);
    let mut registry = WidgetRegistry::new();
    for kind in [ChartKind::Bar, ChartKind::Line] {
        registry
            .register(kind, half_drawing_factory)
            .expect("register factory");
    }
    let manager = MountLifecycleManager::new(
        registry,
        SizeObservationAdapter::new(observer.clone(), ManualResizeSource::new()),
        MountConfig::default(),
    )
    .expect("manager init");
    (manager, observer)
}

#[test]
fn partial_output_of_a_failed_first_draw_is_rolled_back() {
    let log = call_log();
    let (mut manager, _observer) = half_drawing_manager(&log);

    let container = FakeContainer::new(&log, 500.0, 250.0).with_placeholder("<placeholder/>");
    manager.attach(container.clone(), ChartKind::Bar, MountOptions::new());

    assert!(!manager.has_widget());
    assert_eq!(container.content(), vec!["<placeholder/>".to_owned()]);
}

#[test]
fn partial_output_after_teardown_leaves_the_container_empty() {
    let log = call_log();
    let (mut manager, observer) = half_drawing_manager(&log);

    let container = FakeContainer::new(&log, 500.0, 250.0).with_placeholder("<placeholder/>");
    manager.attach(container.clone(), ChartKind::Bar, MountOptions::new());
    container.resize(400.0, 250.0);
    observer.fire();
    assert!(!manager.has_widget());
    assert!(container.content().is_empty());

    manager.notify_identifier_changed(ChartKind::Line);
    assert!(!manager.has_widget());
    assert!(container.content().is_empty());
    assert_eq!(manager.stats().draw_failures, 3);
}

#[test]
fn containers_without_snapshots_are_cleared_on_failure() {
    use chartoon_showcase::core::{Container, ContentBox};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct OpaqueContainer {
        nodes: Rc<RefCell<Vec<String>>>,
    }

    impl Container for OpaqueContainer {
        fn measure(&self) -> ContentBox {
            ContentBox::new(500.0, 250.0)
        }

        fn clear(&self) {
            self.nodes.borrow_mut().clear();
        }
    }

    fn half_drawing(
        container: &OpaqueContainer,
        options: &RenderOptions,
    ) -> ShowcaseResult<WidgetHandle> {
        container.nodes.borrow_mut().push("<svg partial>".to_owned());
        Err(ShowcaseError::draw_failure(options.kind, "threw after appending"))
    }

    let mut registry = WidgetRegistry::new();
    registry
        .register(ChartKind::Pie, half_drawing)
        .expect("register pie");
    let mut manager = MountLifecycleManager::new(
        registry,
        SizeObservationAdapter::viewport_only(ManualResizeSource::new()),
        MountConfig::default(),
    )
    .expect("manager init");

    let container = OpaqueContainer::default();
    container.nodes.borrow_mut().push("<placeholder/>".to_owned());
    manager.attach(container.clone(), ChartKind::Pie, MountOptions::new());
    assert!(container.nodes.borrow().is_empty());
}
