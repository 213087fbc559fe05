//! Navigation handle and deferred height reports, driven through a live
//! virtual DOM with paused time

use std::cell::{Cell, RefCell};
use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};
use dioxus::prelude::*;
use docs_nav::hooks::use_settle_report;
use docs_nav::prelude::*;

thread_local! {
    static CONFIG: RefCell<Option<NavConfig>> = const { RefCell::new(None) };
    static HANDLE: Cell<Option<NavHandle>> = const { Cell::new(None) };
}

#[component]
fn NavHarness() -> Element {
    let config = CONFIG.with(|slot| slot.borrow_mut().take()).unwrap_or_default();
    let nav = use_nav_state(config);
    use_context_provider(|| nav);
    use_hook(|| HANDLE.with(|slot| slot.set(Some(nav))));

    rsx! {
        ReportingLevel { depth: 0, title: "Home".to_string() }
        ReportingLevel { depth: 1, title: "Guides".to_string() }
    }
}

#[component]
fn ReportingLevel(depth: usize, title: String) -> Element {
    let nav = use_context::<NavHandle>();
    let _level_ref = use_settle_report(nav, LevelKey::new(depth, title.clone()));
    rsx! {
        div { "{title}" }
    }
}

fn mount(config: NavConfig) -> (VirtualDom, NavHandle) {
    CONFIG.with(|slot| *slot.borrow_mut() = Some(config));
    let mut dom = VirtualDom::new(NavHarness);
    dom.rebuild_in_place();
    let nav = HANDLE.with(Cell::get).expect("harness did not provide a handle");
    (dom, nav)
}

/// Let effects and spawned tasks run for `duration` of (paused) time
async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let _ = tokio::time::timeout(duration, async {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate(&mut NoOpMutations);
        }
    })
    .await;
}

fn home() -> LevelKey {
    LevelKey::new(0, "Home")
}

fn guides() -> LevelKey {
    LevelKey::new(1, "Guides")
}

#[tokio::test(start_paused = true)]
async fn test_back_to_page_parent_closes_panel() {
    let (dom, nav) = mount(NavConfig::default());

    dom.in_runtime(|| {
        let mut nav = nav;
        nav.toggle();
        nav.drill_in("Guides");
        assert_eq!(nav.active_path.peek().as_slice(), ["Home", "Guides"]);

        nav.back(&ParentLink::new("Home", Some("/intro")));
        assert_eq!(nav.active_path.peek().as_slice(), ["Home"]);
        assert!(!nav.shell.peek().is_open());
    });
}

#[tokio::test(start_paused = true)]
async fn test_back_keeps_panel_open() {
    let (dom, nav) = mount(NavConfig::default());
    dom.in_runtime(|| {
        let mut nav = nav;
        nav.toggle();
        nav.drill_in("Guides");
        // the parent is a plain group
        nav.back(&ParentLink::new("Home", None));
        assert_eq!(nav.active_path.peek().as_slice(), ["Home"]);
        assert!(nav.shell.peek().is_open());
    });

    let config = NavConfig {
        back_behavior: BackBehavior::PopOnly,
        ..NavConfig::default()
    };
    let (dom, nav) = mount(config);
    dom.in_runtime(|| {
        let mut nav = nav;
        nav.toggle();
        nav.drill_in("Guides");
        nav.back(&ParentLink::new("Home", Some("/intro")));
        assert!(nav.shell.peek().is_open());
    });
}

#[tokio::test(start_paused = true)]
async fn test_complete_settle_only_for_live_current_level() {
    let (dom, nav) = mount(NavConfig::default());
    dom.in_runtime(|| {
        let mut nav = nav;
        nav.drill_in("Guides");
        let ticket = nav.begin_settle(&guides());
        assert!(nav.complete_settle(ticket, 180.0));
        assert_eq!(nav.heights.peek().height(), 180.0);

        let ticket = nav.begin_settle(&guides());
        nav.back(&ParentLink::new("Home", None));
        nav.cancel_settle(&guides());
        assert!(!nav.complete_settle(ticket, 900.0));

        // a live ticket for a level that is no longer current is refused too
        let ticket = nav.begin_settle(&guides());
        assert!(!nav.complete_settle(ticket, 900.0));
        assert_eq!(nav.heights.peek().height(), 180.0);
    });
}

fn is_pending(dom: &VirtualDom, nav: NavHandle, key: &LevelKey) -> bool {
    dom.in_runtime(|| nav.heights.peek().is_pending(key))
}

#[tokio::test(start_paused = true)]
async fn test_level_left_before_delay_reports_nothing() {
    let (mut dom, nav) = mount(NavConfig::default());
    run_for(&mut dom, Duration::from_millis(10)).await;
    assert!(is_pending(&dom, nav, &home()));
    assert!(!is_pending(&dom, nav, &guides()));

    dom.in_runtime(|| {
        let mut nav = nav;
        nav.drill_in("Guides");
    });
    run_for(&mut dom, Duration::from_millis(10)).await;
    assert!(is_pending(&dom, nav, &guides()));
    assert!(!is_pending(&dom, nav, &home()));

    // back out well inside the settle delay
    dom.in_runtime(|| {
        let mut nav = nav;
        nav.back(&ParentLink::new("Home", None));
    });
    run_for(&mut dom, Duration::from_millis(10)).await;
    assert!(!is_pending(&dom, nav, &guides()));
    assert!(is_pending(&dom, nav, &home()));

    run_for(&mut dom, Duration::from_millis(500)).await;
    assert!(!is_pending(&dom, nav, &guides()));
    let height = dom.in_runtime(|| nav.heights.peek().height());
    assert_eq!(height, NavConfig::default().initial_menu_height);
}
