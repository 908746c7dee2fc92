// tests/test_item_normalization.rs
//! Normalization of recorded REST collection responses into documents.

use pretty_assertions::assert_eq;
use wp2docs::{
    normalize_items, ContentType, Document, DocumentMetadata, HtmlTextExtractor, ItemId,
    MalformedItemError, RawItem, TextExtractor,
};

fn load_fixture(json: &str) -> Vec<RawItem> {
    serde_json::from_str(json).expect("fixture should be a JSON array")
}

fn normalize(content_type: &ContentType, items: &[RawItem]) -> Vec<Document> {
    normalize_items(items.iter().map(|item| (content_type, item)), &HtmlTextExtractor)
        .expect("fixture items should normalize")
}

#[test]
fn pages_fixture_normalizes_to_plain_text() {
    let pages = ContentType::pages();
    let items = load_fixture(include_str!("fixtures/wp_responses/pages_single.json"));

    let docs = normalize(&pages, &items);

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].text, "We write about Rust & the web.\n");
    assert_eq!(
        docs[0].extra_info,
        DocumentMetadata {
            id: ItemId::Number(2),
            title: "About &#8211; Us".to_string(),
            url: "https://blog.example.com/about/".to_string(),
            updated_at: "2024-01-10T12:00:00".to_string(),
        }
    );
    assert_eq!(docs[1].text, "Reach outmail@example.com");
    assert_eq!(docs[1].extra_info.title, "Contact");
}

#[test]
fn posts_fixture_handles_both_field_shapes() {
    let posts = ContentType::posts();
    let items = load_fixture(include_str!("fixtures/wp_responses/posts_mixed.json"));

    let docs = normalize(&posts, &items);
    let ids: Vec<String> = docs.iter().map(|d| d.extra_info.id.to_string()).collect();

    assert_eq!(ids, vec!["101", "legacy-9", "103"]);
    assert_eq!(docs[0].text, "First post.");
    assert_eq!(docs[0].extra_info.title, "Hello world");

    // Flat `title` / `content` strings
    assert_eq!(docs[1].text, "Plain body");
    assert_eq!(docs[1].extra_info.title, "Plain title");
    assert_eq!(docs[1].extra_info.id, ItemId::Text("legacy-9".to_string()));

    // Missing content and a null rendered title
    assert_eq!(docs[2].text, "");
    assert_eq!(docs[2].extra_info.title, "");
}

#[test]
fn documents_preserve_item_order_across_collections() {
    let pages = ContentType::pages();
    let posts = ContentType::posts();
    let page_items = load_fixture(include_str!("fixtures/wp_responses/pages_single.json"));
    let post_items = load_fixture(include_str!("fixtures/wp_responses/posts_mixed.json"));

    let combined = page_items
        .iter()
        .map(|item| (&pages, item))
        .chain(post_items.iter().map(|item| (&posts, item)));
    let docs = normalize_items(combined, &HtmlTextExtractor).unwrap();

    let urls: Vec<&str> = docs.iter().map(|d| d.extra_info.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "https://blog.example.com/about/",
            "https://blog.example.com/contact/",
            "https://blog.example.com/2024/02/hello-world/",
            "https://blog.example.com/?p=9",
            "https://blog.example.com/2024/02/no-body/",
        ]
    );
}

#[test]
fn malformed_item_reports_its_position() {
    let posts = ContentType::posts();
    let mut items = load_fixture(include_str!("fixtures/wp_responses/posts_mixed.json"));
    items.push(RawItem::new(serde_json::json!({
        "id": 104,
        "modified": "2024-02-04T00:00:00",
        "title": "No link"
    })));

    let err = normalize_items(items.iter().map(|item| (&posts, item)), &HtmlTextExtractor)
        .unwrap_err();

    assert_eq!(
        err,
        MalformedItemError::MissingField {
            position: 3,
            content_type: "posts".to_string(),
            field: "link",
        }
    );
}

#[test]
fn documents_serialize_with_extra_info_shape() {
    let pages = ContentType::pages();
    let items = load_fixture(include_str!("fixtures/wp_responses/pages_single.json"));
    let docs = normalize(&pages, &items[1..]);

    let value = serde_json::to_value(&docs[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "text": "Reach outmail@example.com",
            "extra_info": {
                "id": 7,
                "title": "Contact",
                "url": "https://blog.example.com/contact/",
                "updated_at": "2023-12-01T08:30:00"
            }
        })
    );
}

#[test]
fn custom_extractor_sees_resolved_body() {
    struct Uppercase;
    impl TextExtractor for Uppercase {
        fn extract_text(&self, html: &str) -> String {
            html.to_uppercase()
        }
    }

    let posts = ContentType::posts();
    let items = load_fixture(include_str!("fixtures/wp_responses/posts_mixed.json"));
    let docs = normalize_items(items.iter().map(|item| (&posts, item)), &Uppercase).unwrap();

    assert_eq!(docs[0].text, "<P>FIRST POST.</P>");
    assert_eq!(docs[1].text, "PLAIN BODY");
}

#[test]
fn present_but_unusual_required_fields_do_not_abort_the_batch() {
    let posts = ContentType::posts();
    let items = vec![
        RawItem::new(serde_json::json!({
            "id": null,
            "link": "https://x/?p=1",
            "modified": "2024-01-01T00:00:00"
        })),
        RawItem::new(serde_json::json!({
            "id": 1,
            "link": 42,
            "modified": "2024-01-02T00:00:00"
        })),
    ];

    let docs = normalize_items(items.iter().map(|item| (&posts, item)), &HtmlTextExtractor)
        .expect("present keys are taken as sent");

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].extra_info.id, ItemId::Other(serde_json::Value::Null));
    assert_eq!(docs[1].extra_info.url, "42");
}
