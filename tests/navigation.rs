//! Route resolution against the application tables.

mod common;

use std::sync::atomic::Ordering;

use switch_admin_ui::routes::{app_routes, build_router, default_registry};
use switch_admin_ui::routing::{Route, RouteTable, Router, RouterError};
use switch_admin_ui::AppConfig;

use common::{counting_table, named};

#[test]
fn test_auth_resolves_into_nested_table() {
    let router = Router::new(app_routes());

    let res = router.navigate("/auth/forgot-password").unwrap();
    assert_eq!(res.view.name, "forgot-password");
    assert_eq!(res.title.as_deref(), Some("Password Recovery"));
    assert_eq!(res.matched.len(), 2);
    assert_eq!(res.matched[0].path, "auth");
    assert_eq!(res.matched[1].path, "forgot-password");
    assert!(!res.fallback);
}

#[test]
fn test_auth_root_redirects_to_login() {
    let router = Router::new(app_routes());

    let res = router.navigate("/auth").unwrap();
    assert_eq!(res.url, "/auth/login");
    assert_eq!(res.redirects, vec!["/auth".to_string()]);
    assert_eq!(res.view.name, "login");
    assert_eq!(res.title.as_deref(), Some("Login"));

    // Trailing slash and query string make no difference
    let res = router.navigate("/auth/?next=/configs").unwrap();
    assert_eq!(res.url, "/auth/login");
}

#[test]
fn test_unknown_path_hits_catch_all() {
    let router = Router::new(app_routes()).without_fallback();

    let res = router.recognize("/does/not/exist").unwrap();
    assert_eq!(res.url, "/404");
    assert_eq!(res.redirects, vec!["/does/not/exist".to_string()]);
    assert_eq!(res.view.name, "not-found");
    assert_eq!(res.title.as_deref(), Some("Page Not Found"));
    assert!(!res.fallback); // Reached via `**`, not via the navigator fallback
}

#[test]
fn test_unknown_auth_child_falls_through_to_catch_all() {
    let router = Router::new(app_routes());

    let res = router.navigate("/auth/unknown").unwrap();
    assert_eq!(res.url, "/404");
    assert_eq!(res.view.name, "not-found");
}

#[test]
fn test_root_hits_catch_all() {
    let router = Router::new(app_routes());
    assert_eq!(router.navigate("/").unwrap().url, "/404");
}

#[test]
fn test_lazy_table_loaded_once() {
    let (auth, calls) = counting_table(|| {
        vec![
            Route::new("login").load_view(named("login")),
            Route::redirect("", "login").full(),
        ]
    });
    let router = Router::new(RouteTable::new(vec![
        Route::new("auth").lazy_children(auth),
        Route::new("home").load_view(named("home")),
    ]));

    router.navigate("/home").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    router.navigate("/auth").unwrap();
    router.navigate("/auth/login").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_no_catch_all_uses_not_found_path() {
    let router = Router::new(RouteTable::new(vec![
        Route::new("404").load_view(named("not-found")),
    ]));

    let res = router.navigate("/missing").unwrap();
    assert!(res.fallback);
    assert_eq!(res.url, "/404");

    let strict = router.recognize("/missing");
    assert!(matches!(strict, Err(RouterError::NoMatch(url)) if url == "/missing"));
}

#[test]
fn test_missing_not_found_route_is_an_error() {
    let router = Router::new(RouteTable::new(vec![Route::new("home").load_view(named("home"))]));

    assert!(matches!(router.navigate("/missing"), Err(RouterError::NoMatch(url)) if url == "/404"));
}

#[test]
fn test_configured_routes_replace_builtin_table() {
    let config: AppConfig = toml::from_str(
        r#"
        [navigation]
        not_found_path = "/auth/login"

        [[routes]]
        path = "auth"
        load_children = "auth"
        "#,
    )
    .unwrap();

    let router = build_router(&config, &default_registry()).unwrap();
    let res = router.navigate("/nowhere").unwrap();
    assert!(res.fallback);
    assert_eq!(res.view.name, "login");
}
