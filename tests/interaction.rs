//! End-to-end interaction scenarios on the headless host.

use showreel::app::actions::Slot;
use showreel::app::RevealKind;
use showreel::domain::{Project, Section, SectionTag, SiteConfig};
use showreel::ui::render_overlay_html;
use showreel::{initialize, Config, Direction, Event, HeadlessHost};

const HEIGHT: f64 = 800.0;

fn site(sections: Vec<Section>, projects: usize) -> SiteConfig {
    SiteConfig {
        sections,
        projects: (0..projects)
            .map(|i| Project::new(format!("Project {i}"), format!("img/{i}.jpg")))
            .collect(),
    }
}

fn portfolio() -> SiteConfig {
    site(
        vec![
            Section::tagged(SectionTag::Home),
            Section::tagged(SectionTag::About).with_elements(["avatar", "heading", "paragraph", "paragraph"]),
            Section::default(),
            Section::tagged(SectionTag::Contact).with_elements(["heading", "lead", "map"]),
        ],
        4,
    )
}

fn loaded(site: SiteConfig) -> HeadlessHost {
    let mut host = HeadlessHost::new(initialize(&Config::default(), site));
    host.dispatch(&Event::Loaded { width: 1200.0, height: HEIGHT }).unwrap();
    host
}

fn go(host: &mut HeadlessHost, index: usize) {
    host.dispatch(&Event::NavClick { index }).unwrap();
    host.settle().unwrap();
}

fn touch_start(x: f64, y: f64) -> Event {
    Event::TouchStart {
        x,
        y,
        time_ms: 0.0,
        touches: 1,
        on_carousel: true,
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn navigation_reaches_every_target_with_one_active_button() {
    for start in 0..4 {
        for target in (0..4).filter(|t| *t != start) {
            let mut host = loaded(portfolio());
            go(&mut host, start);
            go(&mut host, target);

            assert_eq!(host.state().pager.current_index(), target);
            assert!(!host.state().pager.is_animating());
            assert_eq!(host.scene().active_nav(), Some(target));
            #[allow(clippy::cast_precision_loss)]
            let expected = -(target as f64) * HEIGHT;
            assert!(close(host.scene().page_offset_y, expected));
        }
    }
}

#[test]
fn navigation_during_transition_or_out_of_range_is_dropped() {
    let mut host = loaded(portfolio());

    host.dispatch(&Event::NavClick { index: 9 }).unwrap();
    assert_eq!(host.state().pager.current_index(), 0);
    assert!(!host.state().pager.is_animating());

    host.dispatch(&Event::NavClick { index: 1 }).unwrap();
    host.advance(100).unwrap();
    host.dispatch(&Event::NavClick { index: 3 }).unwrap();
    host.dispatch(&Event::Wheel { delta_y: 120.0 }).unwrap();
    assert_eq!(host.state().pager.current_index(), 0);
    assert!(host.state().pager.is_animating());

    host.settle().unwrap();
    assert_eq!(host.state().pager.current_index(), 1);
}

#[test]
fn wheel_steps_one_section_and_stops_at_the_ends() {
    let mut host = loaded(portfolio());

    host.dispatch(&Event::Wheel { delta_y: -40.0 }).unwrap();
    assert!(!host.state().pager.is_animating());

    for expected in [1, 2, 3, 3] {
        host.dispatch(&Event::Wheel { delta_y: 40.0 }).unwrap();
        host.settle().unwrap();
        assert_eq!(host.state().pager.current_index(), expected);
    }
}

#[test]
fn vertical_swipe_changes_section() {
    let mut host = loaded(portfolio());
    host.dispatch(&Event::TouchStart {
        x: 200.0,
        y: 600.0,
        time_ms: 0.0,
        touches: 1,
        on_carousel: false,
    })
    .unwrap();
    host.dispatch(&Event::TouchEnd { x: 210.0, y: 480.0, time_ms: 250.0 }).unwrap();
    host.settle().unwrap();
    assert_eq!(host.state().pager.current_index(), 1);

    // too slow
    host.dispatch(&Event::TouchStart {
        x: 200.0,
        y: 600.0,
        time_ms: 1000.0,
        touches: 1,
        on_carousel: false,
    })
    .unwrap();
    host.dispatch(&Event::TouchEnd { x: 200.0, y: 400.0, time_ms: 1900.0 }).unwrap();
    host.settle().unwrap();
    assert_eq!(host.state().pager.current_index(), 1);
}

#[test]
fn advancing_once_per_project_comes_full_circle() {
    for direction in [Direction::Next, Direction::Previous] {
        let mut host = loaded(portfolio());
        let len = host.state().carousel.len();
        for _ in 0..len {
            host.dispatch(&Event::ArrowClick { direction }).unwrap();
            host.settle().unwrap();
        }
        assert_eq!(host.state().carousel.index(), 0);
        assert!(host.scene().panels_at_rest());
        assert!(close(host.scene().wrapper_opacity, 1.0));
    }
}

#[test]
fn rendered_view_wraps_neighbours() {
    let mut host = loaded(portfolio());
    host.dispatch(&Event::ArrowClick { direction: Direction::Previous }).unwrap();
    host.settle().unwrap();

    let view = host.scene().carousel.clone().unwrap();
    assert_eq!(view.index, 3);
    let indices: Vec<usize> = view.panels.iter().map(|p| p.project_index).collect();
    assert_eq!(indices, vec![2, 3, 0]);
    assert_eq!(view.panels[Slot::Current.position()].image_src, "img/3.jpg");
    assert!(host.scene().prefetched.contains(&"img/2.jpg".to_string()));
}

#[test]
fn bare_project_has_hidden_empty_overlay() {
    let host = loaded(portfolio());
    let view = host.scene().carousel.clone().unwrap();

    assert!(view.overlay.hidden);
    assert!(view.overlay.lines.is_empty());
    assert!(view.overlay.links.is_empty());
    assert_eq!(render_overlay_html(&view.overlay), "");
    assert_eq!(view.title, "Project 0");
    assert_eq!(view.subtitle, "");
}

#[test]
fn short_drag_snaps_back_without_advancing() {
    let mut host = loaded(portfolio());
    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchMove {
        x: 330.0,
        y: 410.0,
        time_ms: 120.0,
        touches: 1,
    })
    .unwrap();
    assert!(!host.scene().panels_at_rest());

    host.dispatch(&Event::TouchEnd { x: 330.0, y: 410.0, time_ms: 200.0 }).unwrap();
    host.settle().unwrap();

    assert_eq!(host.state().carousel.index(), 0);
    assert_eq!(host.state().pager.current_index(), 0);
    assert!(host.scene().panels_at_rest());
    assert_eq!(host.active_timers(), 1);
}

#[test]
fn slow_long_drag_snaps_back_and_resumes_autoplay() {
    let mut host = loaded(portfolio());
    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    assert_eq!(host.active_timers(), 0);
    host.dispatch(&Event::TouchMove {
        x: 200.0,
        y: 404.0,
        time_ms: 500.0,
        touches: 1,
    })
    .unwrap();
    assert!(!host.scene().panels_at_rest());

    host.dispatch(&Event::TouchEnd { x: 200.0, y: 404.0, time_ms: 900.0 }).unwrap();
    host.settle().unwrap();

    assert_eq!(host.state().carousel.index(), 0);
    assert!(!host.state().carousel.is_animating());
    assert!(host.scene().panels_at_rest());
    assert_eq!(host.active_timers(), 1);
}

#[test]
fn step_re_renders_under_full_opacity() {
    let mut host = loaded(portfolio());
    host.dispatch(&Event::ArrowClick { direction: Direction::Next }).unwrap();

    host.advance(300).unwrap();
    assert!(close(host.scene().wrapper_opacity, 0.6));
    assert_eq!(host.state().carousel.index(), 0);

    host.advance(300).unwrap();
    assert_eq!(host.state().carousel.index(), 1);
    assert_eq!(host.scene().carousel.as_ref().map(|v| v.index), Some(1));
    assert!(close(host.scene().wrapper_opacity, 1.0));
    assert!(host.scene().panels_at_rest());
    assert!(!host.has_running_tweens());
}

#[test]
fn left_drag_advances_exactly_one_step() {
    let mut host = loaded(portfolio());
    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchMove {
        x: 220.0,
        y: 405.0,
        time_ms: 150.0,
        touches: 1,
    })
    .unwrap();
    host.dispatch(&Event::TouchEnd { x: 220.0, y: 405.0, time_ms: 300.0 }).unwrap();
    host.settle().unwrap();

    assert_eq!(host.state().carousel.index(), 1);
    assert_eq!(host.state().pager.current_index(), 0);
    assert!(host.scene().panels_at_rest());

    // right drag goes back
    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchEnd { x: 380.0, y: 395.0, time_ms: 300.0 }).unwrap();
    host.settle().unwrap();
    assert_eq!(host.state().carousel.index(), 0);
}

#[test]
fn link_click_after_drag_is_suppressed() {
    let mut host = loaded(portfolio());

    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchEnd { x: 301.0, y: 400.0, time_ms: 80.0 }).unwrap();
    host.dispatch(&Event::OverlayLinkClick).unwrap();
    assert_eq!(host.scene().suppressed_clicks, 0);

    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchMove {
        x: 280.0,
        y: 400.0,
        time_ms: 60.0,
        touches: 1,
    })
    .unwrap();
    host.dispatch(&Event::TouchEnd { x: 280.0, y: 400.0, time_ms: 90.0 }).unwrap();
    host.dispatch(&Event::OverlayLinkClick).unwrap();
    assert_eq!(host.scene().suppressed_clicks, 1);
}

#[test]
fn carousel_drag_is_inert_off_home() {
    let mut host = loaded(portfolio());
    go(&mut host, 2);

    host.dispatch(&touch_start(300.0, 400.0)).unwrap();
    host.dispatch(&Event::TouchEnd { x: 200.0, y: 400.0, time_ms: 200.0 }).unwrap();
    host.settle().unwrap();
    assert_eq!(host.state().carousel.index(), 0);
}

#[test]
fn second_finger_abandons_both_gestures() {
    let mut host = loaded(portfolio());
    host.dispatch(&touch_start(300.0, 600.0)).unwrap();
    host.dispatch(&Event::TouchMove {
        x: 200.0,
        y: 600.0,
        time_ms: 50.0,
        touches: 2,
    })
    .unwrap();
    host.dispatch(&Event::TouchEnd { x: 200.0, y: 500.0, time_ms: 200.0 }).unwrap();
    host.settle().unwrap();

    assert_eq!(host.state().carousel.index(), 0);
    assert_eq!(host.state().pager.current_index(), 0);
    assert_eq!(host.active_timers(), 1);
}

#[test]
fn reveals_play_once_per_page_lifetime() {
    let mut host = loaded(portfolio());
    for target in [1, 0, 1, 3, 1, 3] {
        go(&mut host, target);
    }

    assert_eq!(host.scene().reveal_tween_count(RevealKind::About), 4);
    assert_eq!(host.scene().reveal_tween_count(RevealKind::Contact), 2);
    assert!(host.scene().reveal_elements.values().all(|s| close(s.opacity, 1.0) && close(s.y_px, 0.0)));
    assert!(!host.scene().reveal_elements.contains_key("contact/map#0"));
}

#[test]
fn reveal_staggers_sibling_elements() {
    let mut host = loaded(portfolio());
    host.dispatch(&Event::NavClick { index: 1 }).unwrap();
    host.advance(900).unwrap();

    // standard profile: 800 ms tweens started 150 ms apart
    host.advance(800).unwrap();
    let scene = host.scene();
    assert!(close(scene.reveal_elements["about/avatar#0"].opacity, 1.0));
    assert!(close(scene.reveal_elements["about/heading#0"].opacity, 0.0));

    host.settle().unwrap();
    assert!(close(host.scene().reveal_elements["about/paragraph#1"].opacity, 1.0));
}

#[test]
fn resize_while_idle_resnaps_without_reveal() {
    let mut host = loaded(portfolio());
    go(&mut host, 1);
    let about_before = host.scene().reveal_tween_count(RevealKind::About);

    host.dispatch(&Event::Resize { width: 900.0, height: 500.0 }).unwrap();
    assert_eq!(host.state().pager.current_index(), 1);
    assert!(close(host.scene().page_offset_y, -500.0));
    assert!(!host.has_running_tweens());
    assert_eq!(host.scene().reveal_tween_count(RevealKind::About), about_before);
}

#[test]
fn resize_mid_transition_lands_on_new_height() {
    let mut host = loaded(portfolio());
    host.dispatch(&Event::NavClick { index: 2 }).unwrap();
    host.advance(300).unwrap();
    host.dispatch(&Event::Resize { width: 900.0, height: 600.0 }).unwrap();
    host.settle().unwrap();

    assert_eq!(host.state().pager.current_index(), 2);
    assert!(close(host.scene().page_offset_y, -1200.0));
}

#[test]
fn at_most_one_autoplay_timer_ever_runs() {
    let mut host = loaded(portfolio());
    let noise = [
        Event::HoverEnter,
        Event::HoverLeave,
        Event::HoverLeave,
        Event::ArrowClick { direction: Direction::Next },
        touch_start(300.0, 400.0),
        Event::TouchEnd { x: 300.0, y: 400.0, time_ms: 40.0 },
        Event::HoverLeave,
        Event::ArrowClick { direction: Direction::Previous },
    ];
    for event in &noise {
        host.dispatch(event).unwrap();
        host.advance(50).unwrap();
    }
    host.advance(30_000).unwrap();

    assert!(host.active_timers() <= 1);
    assert_eq!(host.scene().max_concurrent_timers, 1);
}

#[test]
fn autoplay_restarts_from_zero_after_hover() {
    let mut host = loaded(portfolio());
    host.advance(4000).unwrap();
    host.dispatch(&Event::HoverEnter).unwrap();
    host.dispatch(&Event::HoverLeave).unwrap();

    // the first 4500 ms deadline passes without a step
    host.advance(4499).unwrap();
    assert!(!host.state().carousel.is_animating());

    host.advance(1).unwrap();
    assert!(host.state().carousel.is_animating());
    host.settle().unwrap();
    assert_eq!(host.state().carousel.index(), 1);
}

#[test]
fn empty_gallery_and_single_section_stay_inert() {
    let mut host = loaded(site(vec![Section::tagged(SectionTag::Home)], 0));
    assert!(host.scene().carousel.is_none());
    assert_eq!(host.active_timers(), 0);

    for event in [
        Event::ArrowClick { direction: Direction::Next },
        Event::Wheel { delta_y: 100.0 },
        touch_start(10.0, 10.0),
        Event::TouchEnd { x: 200.0, y: 10.0, time_ms: 100.0 },
        Event::OverlayLinkClick,
    ] {
        host.dispatch(&event).unwrap();
    }
    host.advance(10_000).unwrap();

    assert_eq!(host.state().pager.current_index(), 0);
    assert_eq!(host.state().carousel.index(), 0);
    assert_eq!(host.active_timers(), 0);
}
