use pathmold::{IntParam, Optional, Route, SerializeError, StrParam};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Page {
    section: String,
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tab: Option<String>,
}

fn page_route() -> Route<Optional> {
    Route::new()
        .extend(["docs"])
        .unwrap()
        .param("section", StrParam)
        .unwrap()
        .param("id", IntParam)
        .unwrap()
        .opt("tab", StrParam)
        .unwrap()
}

#[test]
fn struct_round_trip() {
    let route = page_route();
    let page = Page {
        section: "guide".into(),
        id: 12,
        tab: Some("intro".into()),
    };

    let path = route.render_serialize(&page).unwrap();

    assert_eq!(path, "/docs/guide/12/intro");
    assert_eq!(route.match_into::<Page>(&path).unwrap(), Some(page));
}

#[test]
fn none_fields_are_skipped() {
    let route = page_route();
    let page = Page {
        section: "api".into(),
        id: 3,
        tab: None,
    };

    assert_eq!(route.render_serialize(&page).unwrap(), "/docs/api/3");
    assert_eq!(route.match_into::<Page>("/docs/api/3").unwrap(), Some(page));
}

#[test]
fn tuples_fill_params_by_position() {
    let route = page_route();

    assert_eq!(
        route.render_serialize(&("blog", 5, "comments")).unwrap(),
        "/docs/blog/5/comments"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    #[derive(Serialize)]
    struct Stray {
        section: &'static str,
        id: i64,
        lang: &'static str,
    }

    let stray = Stray {
        section: "a",
        id: 1,
        lang: "en",
    };

    assert!(matches!(
        page_route().render_serialize(&stray),
        Err(SerializeError::UnknownParam(_))
    ));
}

#[test]
fn missing_required_field_fails_rendering() {
    let route = page_route();

    assert!(matches!(
        route.render_serialize(&serde_json::json!({ "section": "a" })),
        Err(SerializeError::Render(_))
    ));
}

#[test]
fn no_match_is_not_an_error() {
    assert_eq!(page_route().match_into::<Page>("/blog/a/1").unwrap(), None);
    assert!(page_route().match_into::<Page>("/docs/a/x").unwrap().is_none());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Section {
    Guide,
    Reference,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Chapter {
    section: Section,
    id: i64,
}

#[test]
fn enum_fields_round_trip() {
    let route = page_route();
    let chapter = Chapter {
        section: Section::Reference,
        id: 4,
    };

    let path = route.render_serialize(&chapter).unwrap();

    assert_eq!(path, "/docs/Reference/4");
    assert_eq!(route.match_into::<Chapter>(&path).unwrap(), Some(chapter));
    assert_eq!(
        route.match_into::<Chapter>("/docs/Guide/1").unwrap(),
        Some(Chapter {
            section: Section::Guide,
            id: 1
        })
    );
}
