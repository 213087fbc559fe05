//! End-to-end navigation scenarios on the renderer-independent state

use approx::assert_relative_eq;
use docs_nav::prelude::*;
use docs_nav::state::frame_offset;

fn guides_sidebar() -> Vec<MenuNode> {
    parse_sidebar(r#"[{ "title": "Guides", "items": [{ "title": "Intro", "slug": "/intro" }] }]"#).unwrap()
}

#[test]
fn test_guides_drill_in_and_out() {
    let config = NavConfig::default();
    let sidebar = guides_sidebar();
    let mut path = ActivePath::new(config.root_title.clone());

    let guides = &sidebar[0];
    assert_eq!(ItemAction::for_node(guides, "/docs"), ItemAction::DrillIn);
    path.push(guides.title.as_str());
    assert_eq!(path.as_slice(), ["Home", "Guides"]);

    let intro = &guides.children().unwrap()[0];
    assert_eq!(
        ItemAction::for_node(intro, "/docs"),
        ItemAction::Navigate { href: "/docs/intro".to_string() }
    );

    path.pop();
    assert_eq!(path.as_slice(), ["Home"]);
}

#[test]
fn test_only_current_level_is_centred() {
    let titles = ["Home", "Guides", "Auth", "OAuth"];
    let mut path = ActivePath::new(titles[0]);
    for n in 1..=titles.len() {
        for (depth, title) in titles.iter().take(n).enumerate() {
            let layout = LevelLayout::compute(depth, title, &path, ActiveMatch::TopOfStack);
            let is_current = depth == n - 1;
            assert_eq!(layout.active, is_current, "{title} at path length {n}");
            assert_eq!(frame_offset(depth, &path) == 0.0, is_current);
        }
        let root = LevelLayout::compute(0, "Home", &path, ActiveMatch::TopOfStack);
        assert_relative_eq!(root.translate_x, -100.0 * (n - 1) as f64);

        if n < titles.len() {
            path.push(titles[n]);
        }
    }
}

#[test]
fn test_toggle_twice_plays_one_fade_out() {
    let mut shell = ShellState::new(44.0);
    let transitions: Vec<_> = [shell.toggle(), shell.toggle()].into_iter().flatten().collect();

    assert!(!shell.is_open());
    let fade_outs = transitions
        .iter()
        .filter(|t| matches!(t, PanelTransition::FadeOut { .. }))
        .count();
    assert_eq!(fade_outs, 1);
    assert_eq!(transitions.len(), 2);
}

#[test]
fn test_height_follows_the_settled_level() {
    let mut path = ActivePath::new("Home");
    let mut heights = HeightArbiter::new(1000.0);
    let home = LevelKey::new(0, "Home");
    let guides = LevelKey::new(1, "Guides");

    let ticket = heights.begin(&home);
    assert_eq!(heights.complete(ticket, 640.0, &path), SettleOutcome::Applied);

    // drill in, then back out before the settle delay elapses
    path.push("Guides");
    let ticket = heights.begin(&guides);
    path.pop();
    heights.cancel(&guides);
    assert_eq!(heights.complete(ticket, 180.0, &path), SettleOutcome::Stale);
    assert_relative_eq!(heights.height(), 640.0);

    // drill in and stay
    path.push("Guides");
    let ticket = heights.begin(&guides);
    assert_eq!(heights.complete(ticket, 180.0, &path), SettleOutcome::Applied);
    assert_relative_eq!(heights.height(), 180.0);
}

#[test]
fn test_unnamed_section_has_no_label() {
    let sidebar = parse_sidebar(
        r#"[{ "section": "noname", "items": [
            { "title": "Introduction", "slug": "/introduction" },
            { "title": "Quickstart", "slug": "/quickstart" }
        ]}]"#,
    )
    .unwrap();

    match sidebar[0].kind() {
        NodeKind::Section { label, items } => {
            assert_eq!(label, None);
            let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
            assert_eq!(titles, ["Introduction", "Quickstart"]);
        }
        other => panic!("expected a section, got {other:?}"),
    }
}
