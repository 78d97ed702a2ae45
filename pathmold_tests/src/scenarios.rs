use pathmold::{params, ArrayParam, IntParam, ParamType, Params, Route, RouteOpts, StrParam};
use rstest::rstest;

#[test]
fn literal_only_template() {
    let route = Route::new().extend(["a", "b", "c"]).unwrap();

    assert_eq!(route.match_path("/a/b/c"), Some(Params::new()));
    assert_eq!(route.match_path("/a/b"), None);
    assert_eq!(route.render(&params! {}).unwrap(), "/a/b/c");
}

#[test]
fn two_required_params() {
    let route = Route::new()
        .extend(["path", "to"])
        .unwrap()
        .param("param1", StrParam)
        .unwrap()
        .param("param2", StrParam)
        .unwrap();

    assert_eq!(
        route.match_path("/path/to/abc/def"),
        Some(params! { "param1" => "abc", "param2" => "def" })
    );
    assert_eq!(route.to_string(), "/path/to/:param1/:param2");
}

#[test]
fn missing_optional_is_left_out() {
    let route = Route::new()
        .extend(["path", "to"])
        .unwrap()
        .param("param1", StrParam)
        .unwrap()
        .opt("param2", StrParam)
        .unwrap();

    let params = route.match_path("/path/to/abc").unwrap();

    assert_eq!(params, params! { "param1" => "abc" });
    assert!(!params.contains("param2"));
}

#[rstest]
#[case("/a/1/2/3/4/5", Some(params! { "b" => 1, "c" => 2, "rest" => vec![3, 4, 5] }))]
#[case("/a/b/2/3/4/5", None)]
fn typed_params_and_rest(#[case] path: &str, #[case] expected: Option<Params>) {
    assert_eq!(crate::int_tail_route().match_path(path), expected);
}

#[rstest]
#[case("1,2,3", Some(vec![1, 2, 3]))]
#[case("", Some(vec![]))]
#[case("1,b,3", None)]
fn int_array(#[case] raw: &str, #[case] expected: Option<Vec<i64>>) {
    assert_eq!(ArrayParam::with_delimiter(IntParam, ",").parse(raw), expected);
}

#[test]
fn dot_delimiter() {
    let route = Route::with_opts(RouteOpts::default().delimiter("."))
        .extend(["a"])
        .unwrap()
        .param("b", StrParam)
        .unwrap()
        .rest(IntParam)
        .unwrap();

    assert_eq!(
        route.match_path("/a.c.1.2.3"),
        Some(params! { "b" => "c", "rest" => vec![1, 2, 3] })
    );
}
