use pathmold::chrono::DateTime;
use pathmold::{
    params, ArrayParam, Closed, DateTimeParam, EncodedParam, FloatParam, IntParam, Params, Route,
    RouteOpts, StrParam,
};
use rstest::rstest;

fn mixed_route() -> Route<Closed> {
    Route::new()
        .extend(["m"])
        .unwrap()
        .param("name", EncodedParam)
        .unwrap()
        .param("ratio", FloatParam)
        .unwrap()
        .opt("at", DateTimeParam)
        .unwrap()
        .rest(ArrayParam::new(IntParam))
        .unwrap()
}

#[rstest]
#[case(params! { "b" => 1, "rest" => Vec::<i64>::new() })]
#[case(params! { "b" => -4, "c" => 0, "rest" => Vec::<i64>::new() })]
#[case(params! { "b" => 1, "c" => 2, "rest" => vec![3, 4, 5] })]
fn render_then_match_reproduces_params(#[case] params: Params) {
    let route = crate::int_tail_route();
    let path = route.render(&params).unwrap();

    assert_eq!(route.match_path(&path), Some(params));
}

#[rstest]
#[case(Route::new().param("q", StrParam).unwrap(), params! { "q" => "" })]
#[case(
    Route::new().param("ids", ArrayParam::new(IntParam)).unwrap(),
    params! { "ids" => Vec::<i64>::new() }
)]
#[case(Route::new().extend([""]).unwrap(), params! {})]
fn render_then_match_reproduces_empty_first_segment(
    #[case] route: Route,
    #[case] params: Params,
) {
    let path = route.render(&params).unwrap();

    assert_eq!(path, "/");
    assert_eq!(route.match_path(&path), Some(params));
}

#[test]
fn round_trip_through_mixed_converters() {
    let route = mixed_route();
    let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
    let params = params! {
        "name" => "hello world/",
        "ratio" => 0.25,
        "at" => at,
        "rest" => vec![vec![1, 2], vec![], vec![3]],
    };

    let path = route.render(&params).unwrap();

    assert_eq!(path, "/m/hello%20world%2F/0.25/1700000000123/1,2//3");
    assert_eq!(route.match_path(&path), Some(params));
}

#[test]
fn skipped_optional_is_not_reemitted() {
    let route = mixed_route();
    let params = params! { "name" => "x", "ratio" => 1.5, "rest" => Vec::<Vec<i64>>::new() };

    let path = route.render(&params).unwrap();

    assert_eq!(path, "/m/x/1.5");
    assert_eq!(route.match_path(&path), Some(params));
}

#[rstest]
#[case("api/users/7.json")]
#[case("/api/users/7")]
#[case("/api/users/7.jso")]
#[case("/users/7.json")]
#[case("")]
fn missing_prefix_or_suffix_never_matches(#[case] path: &str) {
    let route = Route::with_opts(RouteOpts::default().prefix("/api/").suffix(".json"))
        .extend(["users"])
        .unwrap()
        .param("id", StrParam)
        .unwrap();

    assert_eq!(route.match_path(path), None);
    assert!(route.match_path("/api/users/7.json").is_some());
}

#[rstest]
#[case("/x/y", false)]
#[case("/x/y/z", true)]
#[case("/x/y/z/w", false)]
#[case("/x", false)]
#[case("/", false)]
fn exact_length_without_rest(#[case] path: &str, #[case] matches: bool) {
    let route = Route::new()
        .extend(["x"])
        .unwrap()
        .param("p", StrParam)
        .unwrap()
        .param("q", StrParam)
        .unwrap();

    assert_eq!(route.is_match(path), matches);
}

#[rstest]
#[case("/s", params! {})]
#[case("/s/1", params! { "x" => 1 })]
#[case("/s/1/2", params! { "x" => 1, "y" => 2 })]
fn trailing_optionals_may_be_omitted(#[case] path: &str, #[case] expected: Params) {
    let route = Route::new()
        .extend(["s"])
        .unwrap()
        .opt("x", IntParam)
        .unwrap()
        .opt("y", IntParam)
        .unwrap();

    assert_eq!(route.match_path(path), Some(expected));
}

#[rstest]
#[case(Route::new().param("v", IntParam).unwrap(), "/abc")]
#[case(Route::new().param("v", FloatParam).unwrap(), "/abc")]
#[case(Route::new().param("v", FloatParam).unwrap(), "/inf")]
#[case(Route::new().param("v", DateTimeParam).unwrap(), "/today")]
#[case(Route::new().param("v", DateTimeParam).unwrap(), "/")]
fn required_numeric_rejects_garbage(#[case] route: Route, #[case] path: &str) {
    assert_eq!(route.match_path(path), None);
}

#[test]
fn optional_numeric_rejects_garbage() {
    let route = Route::new()
        .param("a", StrParam)
        .unwrap()
        .opt("n", IntParam)
        .unwrap();

    assert_eq!(route.match_path("/x/five"), None);
    assert_eq!(route.match_path("/x"), Some(params! { "a" => "x" }));
}

#[rstest]
#[case(RouteOpts::default(), "/a/7/t")]
#[case(RouteOpts::default().delimiter("."), "/a.7.t")]
#[case(RouteOpts::default().delimiter("::").prefix("").suffix(""), "a::7::t")]
#[case(RouteOpts::default().prefix("").suffix("/"), "a/7/t/")]
#[case(RouteOpts::default().delimiter("-").prefix("#").suffix("!"), "#a-7-t!")]
fn custom_opts_match_and_render(#[case] opts: RouteOpts, #[case] path: &str) {
    let route = Route::starting_at("a", opts)
        .unwrap()
        .param("n", IntParam)
        .unwrap()
        .param("s", StrParam)
        .unwrap();
    let params = params! { "n" => 7, "s" => "t" };

    assert_eq!(route.render(&params).unwrap(), path);
    assert_eq!(route.match_path(path), Some(params));
}

#[test]
fn empty_delimiter_keeps_single_segment() {
    let route = Route::with_opts(RouteOpts::default().delimiter(""))
        .param("all", StrParam)
        .unwrap();

    assert_eq!(route.match_path("/a/b"), Some(params! { "all" => "a/b" }));
}

#[test]
fn builders_leave_predecessors_untouched() {
    let base = Route::new().extend(["v1"]).unwrap();
    let users = base.extend(["users"]).unwrap();
    let posts = base.extend(["posts"]).unwrap().param("id", IntParam).unwrap();

    assert_eq!(base.pattern(), "/v1");
    assert_eq!(users.pattern(), "/v1/users");
    assert_eq!(posts.pattern(), "/v1/posts/:id");
    assert!(base.is_match("/v1"));
}

#[test]
fn shared_between_threads() {
    let route = crate::int_tail_route();

    std::thread::scope(|scope| {
        for n in 0..8_i64 {
            let route = route.clone();
            scope.spawn(move || {
                let params = params! { "b" => n, "c" => n + 1, "rest" => vec![n; n as usize] };
                let path = route.render(&params).unwrap();
                assert_eq!(route.match_path(&path), Some(params));
            });
        }
    });
}
