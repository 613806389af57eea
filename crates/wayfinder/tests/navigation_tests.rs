//! Integration tests for the location store and `use_location`
//!
//! Covers:
//! - Push/replace history bookkeeping
//! - Relative target resolution
//! - Leaving the application with absolute URLs
//! - Subscriber fan-out and unsubscription
//! - Back/forward traversal via `pop_state`
//! - Detached contexts

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use url::Url;
use wayfinder::prelude::*;
use wayfinder::{use_location_with, RouterConfig};

struct Harness {
    ctx: RouterContext,
    history: MemoryHistory,
}

#[fixture]
fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();

    let history = MemoryHistory::new("/");
    Harness {
        ctx: RouterContext::new(history.clone()),
        history,
    }
}

#[rstest]
fn test_navigate_pushes_one_entry(harness: Harness) {
    harness.ctx.navigate("/foo", NavigateOptions::default());

    assert_eq!(harness.ctx.location(), "/foo");
    assert_eq!(harness.history.length(), 2);
}

#[rstest]
fn test_replace_keeps_length(harness: Harness) {
    harness.ctx.push("/foo");
    harness.ctx.navigate("/bar", NavigateOptions { replace: true });

    assert_eq!(harness.ctx.location(), "/bar");
    assert_eq!(harness.history.entries(), vec!["/", "/bar"]);
}

#[rstest]
#[case("/docs/guide/intro?v=2#top", "../x")]
#[case("/docs/guide/intro?v=2#top", "./setup")]
#[case("/docs/guide/intro?v=2#top", "sibling")]
#[case("/docs/guide/intro?v=2#top", "?q=1")]
#[case("/docs/guide/intro?v=2#top", "#frag")]
#[case("/docs/guide/", "../../../..")]
#[case("/search", "?q=a%20b&page=2")]
#[case("/", "//localhost/same-origin")]
fn test_relative_targets_match_url_resolution(#[case] start: &str, #[case] to: &str) {
    let history = MemoryHistory::new(start);
    let ctx = RouterContext::new(history);

    ctx.navigate(to, NavigateOptions::default());

    let expected = Url::parse("http://localhost")
        .and_then(|origin| origin.join(start))
        .and_then(|base| base.join(to))
        .unwrap();
    let expected = &expected[url::Position::BeforePath..];
    assert_eq!(ctx.location(), expected);
}

#[rstest]
#[case("https://example.com/elsewhere")]
#[case("mailto:support@example.com")]
fn test_absolute_url_leaves_application(harness: Harness, #[case] url: &str) {
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    let _sub = harness.ctx.subscribe(move |_| counter.set(counter.get() + 1));

    harness.ctx.navigate(url, NavigateOptions::default());

    assert_eq!(harness.history.assigned(), vec![url]);
    assert_eq!(harness.history.length(), 1);
    assert_eq!(harness.ctx.location(), "/");
    assert_eq!(notified.get(), 0);
}

#[rstest]
fn test_cross_origin_relative_target_leaves_application(harness: Harness) {
    harness
        .ctx
        .navigate("//cdn.example.com/asset", NavigateOptions::default());

    assert_eq!(
        harness.history.assigned(),
        vec!["http://cdn.example.com/asset"]
    );
    assert_eq!(harness.history.length(), 1);
}

#[rstest]
fn test_initiator_hook_updates_exactly_once(harness: Harness) {
    let updates = Rc::new(RefCell::new(Vec::new()));

    let initiator_log = Rc::clone(&updates);
    let initiator = use_location_with(&harness.ctx, move |loc| {
        initiator_log.borrow_mut().push(format!("initiator {loc}"));
    });
    let observer_log = Rc::clone(&updates);
    let observer = use_location_with(&harness.ctx, move |loc| {
        observer_log.borrow_mut().push(format!("observer {loc}"));
    });

    initiator.navigate("/next", NavigateOptions::default());

    assert_eq!(
        *updates.borrow(),
        vec!["initiator /next", "observer /next"]
    );
    assert_eq!(initiator.location(), "/next");
    assert_eq!(observer.location(), "/next");
}

#[rstest]
fn test_hook_after_redirect_ends_on_redirected_location(harness: Harness) {
    let redirect_ctx = harness.ctx.clone();
    let _redirect = harness.ctx.subscribe(move |loc| {
        if loc == "/old" {
            redirect_ctx.replace("/new");
        }
    });
    let renders = Rc::new(RefCell::new(Vec::new()));
    let render_log = Rc::clone(&renders);
    let hook = use_location_with(&harness.ctx, move |loc| {
        render_log.borrow_mut().push(loc.to_string());
    });

    harness.ctx.push("/old");

    assert_eq!(harness.ctx.location(), "/new");
    assert_eq!(hook.location(), "/new");
    assert_eq!(*renders.borrow(), vec!["/new"]);
    assert_eq!(harness.history.entries(), vec!["/", "/new"]);
}

#[rstest]
fn test_unsubscribed_listener_not_called_on_pop_state(harness: Harness) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let sub = harness.ctx.subscribe(move |_| counter.set(counter.get() + 1));

    harness.ctx.pop_state();
    assert_eq!(calls.get(), 1);

    sub.unsubscribe();
    harness.ctx.pop_state();
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_back_and_forward_via_pop_state(harness: Harness) {
    let hook = use_location(&harness.ctx);
    harness.ctx.push("/a");
    harness.ctx.push("/b");

    assert!(harness.history.back());
    // The environment moved, but nobody has been told yet
    assert_eq!(hook.location(), "/b");

    harness.ctx.pop_state();
    assert_eq!(hook.location(), "/a");

    assert!(harness.history.forward());
    harness.ctx.pop_state();
    assert_eq!(hook.location(), "/b");
}

#[rstest]
fn test_split_returns_location_and_navigator(harness: Harness) {
    let hook = use_location(&harness.ctx);
    let (location, navigate) = hook.split();
    assert_eq!(location, "/");

    navigate.replace("/replaced");
    assert_eq!(hook.location(), "/replaced");
    assert_eq!(harness.history.length(), 1);
}

#[test]
fn test_detached_navigation_is_noop() {
    let ctx = RouterContext::detached();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let _sub = ctx.subscribe(move |_| counter.set(counter.get() + 1));

    ctx.navigate("/anywhere", NavigateOptions::default());
    ctx.navigate("https://example.com/", NavigateOptions::default());

    assert_eq!(ctx.location(), "/");
    assert_eq!(calls.get(), 0);
    assert!(!ctx.is_attached());
}

#[test]
fn test_context_from_config() {
    let config = RouterConfig::from_toml_str(
        r#"
        [router]
        origin = "https://app.example.com"
        initial_location = "/dashboard?tab=1"
        "#,
    )
    .unwrap();
    let ctx = RouterContext::from_config(&config);

    assert_eq!(ctx.location(), "/dashboard?tab=1");
    ctx.push("settings");
    assert_eq!(ctx.location(), "/settings");
    assert_eq!(
        ctx.history().origin().as_deref(),
        Some("https://app.example.com")
    );
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = RouterConfig {
        origin: "https://app.example.com".to_string(),
        initial_location: "/start".to_string(),
    };
    let text = format!("[router]\n{}", toml::to_string(&config).unwrap());
    assert_eq!(RouterConfig::from_toml_str(&text).unwrap(), config);
}
