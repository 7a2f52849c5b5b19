use trie_router_rs::{HttpMethod, Router};

#[test]
fn router_when_static_and_parameter_siblings_then_static_wins() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/a/:x", "param")
        .expect("param route should register");
    router
        .add(HttpMethod::Get, "/a/b", "static")
        .expect("static route should register");

    let found = router
        .find(HttpMethod::Get, "/a/b")
        .expect("static route should match");
    assert_eq!(*found.handler, "static");
    assert!(found.params.is_empty());

    let found = router
        .find(HttpMethod::Get, "/a/c")
        .expect("param route should match");
    assert_eq!(*found.handler, "param");
    assert_eq!(found.params.get("x"), Some("c"));
}

#[test]
fn router_when_static_parameter_and_wildcard_siblings_then_priority_is_fixed() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/docs/*", "wild")
        .expect("wildcard route should register");
    router
        .add(HttpMethod::Get, "/docs/:page", "param")
        .expect("param route should register");
    router
        .add(HttpMethod::Get, "/docs/index", "static")
        .expect("static route should register");

    assert_eq!(router.find(HttpMethod::Get, "/docs/index").map(|m| *m.handler), Some("static"));
    assert_eq!(router.find(HttpMethod::Get, "/docs/intro").map(|m| *m.handler), Some("param"));
    assert_eq!(router.find(HttpMethod::Get, "/docs/a/b").map(|m| *m.handler), Some("wild"));
}

#[test]
fn router_when_static_branch_dead_ends_then_backtracks_into_parameter() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/a/:x", "param")
        .expect("param route should register");
    router
        .add(HttpMethod::Get, "/a/b/deeper", "deep")
        .expect("deeper static route should register");

    // "/a/b" has a static node without a handler; the param branch must answer
    let found = router
        .find(HttpMethod::Get, "/a/b")
        .expect("should backtrack into param route");

    assert_eq!(*found.handler, "param");
    assert_eq!(found.params.get("x"), Some("b"));
}

#[test]
fn router_when_static_branch_lacks_method_then_backtracks_into_parameter() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Post, "/users/me", "update-me")
        .expect("static route should register");
    router
        .add(HttpMethod::Get, "/users/:id", "get-user")
        .expect("param route should register");

    let found = router
        .find(HttpMethod::Get, "/users/me")
        .expect("GET should fall through to the param route");

    assert_eq!(*found.handler, "get-user");
    assert_eq!(found.params.get("id"), Some("me"));
}

#[test]
fn router_when_parameter_branch_fails_then_its_bindings_do_not_leak() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/:a/x", "param-then-static")
        .expect("route should register");
    router
        .add(HttpMethod::Get, "/*rest", "catch-all")
        .expect("catch-all should register");

    let found = router
        .find(HttpMethod::Get, "/one/two")
        .expect("catch-all should match");

    assert_eq!(*found.handler, "catch-all");
    assert_eq!(found.params.len(), 1);
    assert_eq!(found.params.get("rest"), Some("one/two"));
    assert!(!found.params.contains_key("a"));
}

#[test]
fn router_when_nested_static_fails_then_backtracks_across_levels() {
    let mut router: Router<&str> = Router::new(None);
    router
        .add(HttpMethod::Get, "/api/v1/users/list", "static-list")
        .expect("route should register");
    router
        .add(HttpMethod::Get, "/api/:version/users/:id", "versioned")
        .expect("route should register");

    let found = router
        .find(HttpMethod::Get, "/api/v1/users/7")
        .expect("should backtrack two levels up");

    assert_eq!(*found.handler, "versioned");
    assert_eq!(found.params.get("version"), Some("v1"));
    assert_eq!(found.params.get("id"), Some("7"));
}
