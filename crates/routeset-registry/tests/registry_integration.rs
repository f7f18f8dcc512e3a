//! Integration tests for the route registry.
//!
//! Tests cover:
//! 1. The registration-then-dispatch flow a caller would drive
//! 2. Name-based lookup and the name-uniqueness invariant
//! 3. Mixed reference and invocable handlers in one registry
//! 4. Concurrent population and lookup through `SharedRouteRegistry`

use std::thread;

use routeset_registry::{Handler, RegistryError, Route, RouteRegistry, SharedRouteRegistry};

// ============================================================================
// 1. Registration-then-dispatch flow
// ============================================================================

#[test]
fn test_setup_then_lookup_flow() {
    let mut routes = RouteRegistry::new();
    routes.add("GET", "/", "HomeController::index", Some("home")).unwrap();
    routes.add("GET", "/about", "PageController::about", Some("about")).unwrap();
    routes.add("POST", "/contact", "ContactController::send", None).unwrap();

    // The dispatch loop would match each incoming (method, path) pair.
    let matched = routes.find("POST", "/contact").unwrap();
    assert_eq!(matched.handler().as_reference(), Some("ContactController::send"));

    // Same path under a different verb is a different route.
    assert!(routes.find("GET", "/contact").is_none());

    // Unknown paths are absent, not an error.
    assert!(routes.find("GET", "/missing").is_none());
}

#[test]
fn test_first_registered_route_wins_on_duplicates() {
    let mut routes = RouteRegistry::new();
    routes.add("GET", "/page", "Old::handler", None).unwrap();
    routes.add("GET", "/page", "New::handler", None).unwrap();

    assert_eq!(routes.len(), 2);
    let matched = routes.find("GET", "/page").unwrap();
    assert_eq!(matched.handler().as_reference(), Some("Old::handler"));
}

// ============================================================================
// 2. Name-based lookup and uniqueness
// ============================================================================

#[test]
fn test_named_route_roundtrip() {
    let mut routes = RouteRegistry::new();
    routes
        .add("GET", "/home", "HomeController::index", Some("Homepage"))
        .unwrap();

    assert!(routes.has_by_name("Homepage"));
    let route = routes.find_by_name("Homepage").unwrap();
    assert_eq!(route.method(), "GET");
    assert_eq!(route.path(), "/home");
    assert_eq!(route.name(), Some("Homepage"));
}

#[test]
fn test_duplicate_name_leaves_registry_unchanged() {
    let mut routes = RouteRegistry::new();
    routes.add("GET", "/home", "H::index", Some("Homepage")).unwrap();

    let err = routes
        .add("GET", "/test", "H::test", Some("Homepage"))
        .unwrap_err();
    assert_eq!(err.route_name(), "Homepage");
    assert!(matches!(err, RegistryError::DuplicateRouteName(_)));

    assert_eq!(routes.len(), 1);
    let paths: Vec<&str> = routes.iter().map(Route::path).collect();
    assert_eq!(paths, vec!["/home"]);
}

#[test]
fn test_unnamed_routes_do_not_collide() {
    let mut routes = RouteRegistry::new();
    routes.add("GET", "/a", "A::a", None).unwrap();
    routes.add("GET", "/b", "B::b", Some("")).unwrap();
    routes.add("GET", "/c", "C::c", None).unwrap();

    assert_eq!(routes.len(), 3);
    assert!(routes.find_by_name("").is_none());
}

// ============================================================================
// 3. Mixed handler kinds
// ============================================================================

#[test]
fn test_mixed_reference_and_invocable_handlers() {
    let mut routes = RouteRegistry::new();
    routes.add("GET", "/by-ref", "UserController::list", None).unwrap();
    routes
        .add("GET", "/direct", Handler::invocable(|| "Hello World!".to_string()), None)
        .unwrap();

    match routes.find("GET", "/by-ref").unwrap().handler() {
        Handler::Reference(r) => assert_eq!(r, "UserController::list"),
        Handler::Invocable(_) => panic!("expected a reference handler"),
    }

    let direct = routes.find("GET", "/direct").unwrap();
    assert_eq!(direct.handler().invoke(), Some("Hello World!".to_string()));
}

// ============================================================================
// 4. Concurrent access through SharedRouteRegistry
// ============================================================================

#[test]
fn test_concurrent_registration_and_lookup() {
    let routes = SharedRouteRegistry::new();

    let writers: Vec<_> = (0..4)
        .map(|i| {
            let routes = routes.clone();
            thread::spawn(move || {
                for j in 0..25 {
                    let path = format!("/worker/{i}/{j}");
                    let name = format!("worker-{i}-{j}");
                    routes.add("GET", path, "Worker::handle", Some(name.as_str())).unwrap();
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(routes.len(), 100);
    assert!(routes.has("GET", "/worker/3/24"));
    let route = routes.find_by_name("worker-0-0").unwrap();
    assert_eq!(route.path(), "/worker/0/0");
}

#[test]
fn test_concurrent_duplicate_name_admits_exactly_one() {
    let routes = SharedRouteRegistry::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let routes = routes.clone();
            thread::spawn(move || {
                routes.add("GET", format!("/candidate/{i}"), "C::go", Some("winner"))
            })
        })
        .collect();

    let successes = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(Result::is_ok)
        .count();

    assert_eq!(successes, 1);
    assert_eq!(routes.len(), 1);
    assert!(routes.has_by_name("winner"));
}
