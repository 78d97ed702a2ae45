use pathmold::{params, parse_pattern, IntParam, Route, RouteOpts};

#[test]
fn opts_from_partial_json() {
    let opts: RouteOpts =
        serde_json::from_str(r#"{ "prefix": "/api/", "suffix": ".json" }"#).unwrap();

    assert_eq!(opts.delimiter, "/");
    assert_eq!(opts.prefix, "/api/");
    assert_eq!(opts.suffix, ".json");
}

#[test]
fn configured_routes_share_pattern_syntax() {
    let opts: RouteOpts = serde_json::from_str(r#"{ "delimiter": ".", "prefix": "" }"#).unwrap();

    let parsed = parse_pattern("feed.:user.*", opts.clone()).unwrap();
    let built = Route::with_opts(opts)
        .extend(["feed"])
        .unwrap()
        .param("user", IntParam)
        .unwrap()
        .rest(IntParam)
        .unwrap();

    assert_eq!(parsed.pattern(), built.pattern());
    assert_eq!(
        parsed.match_path("feed.9.1.2"),
        Some(params! { "user" => "9", "rest" => vec!["1", "2"] })
    );
    assert_eq!(
        built.match_path("feed.9.1.2"),
        Some(params! { "user" => 9, "rest" => vec![1, 2] })
    );
}

#[test]
fn opts_serialize_back() {
    let json = serde_json::to_value(RouteOpts::default().delimiter("-")).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "delimiter": "-", "prefix": "/", "suffix": "" })
    );
}
