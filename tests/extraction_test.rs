#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use news_extract::{
    extract, extract_fields, extract_strict, extract_with_mode, ExtractionMiss, Mode, Options,
    RawDocument,
};

const ENGLISH_BODY: &str = "The city council voted on Tuesday to expand the bus network, \
    adding four new routes that will connect the northern suburbs with the hospital district. \
    Officials said the first buses would begin running in the spring, once drivers have been \
    hired and trained. Residents who spoke at the meeting welcomed the plan but asked for \
    later evening services.";

fn doc(html: &str) -> RawDocument {
    RawDocument::new("https://news.example.com/story", html)
}

#[test]
fn longer_h2_beats_short_h1() {
    let html = format!(
        "<html><body><h1>Short</h1><h2>A Much Longer Secondary Heading Text</h2>\
         <article><p>{ENGLISH_BODY}</p></article></body></html>"
    );
    let article = extract(&doc(&html), &Options::default()).expect("article");
    assert_eq!(article.headline.as_deref(), Some("A Much Longer Secondary Heading Text"));
}

#[test]
fn title_element_competes_with_headings() {
    let html = format!(
        "<html><head><title>Council expands bus network | Example News</title></head>\
         <body><h1>Council expands bus network</h1><article><p>{ENGLISH_BODY}</p></article></body></html>"
    );
    let article = extract(&doc(&html), &Options::default()).expect("article");
    assert_eq!(
        article.headline.as_deref(),
        Some("Council expands bus network | Example News")
    );
}

#[test]
fn article_body_ignores_surrounding_chrome() {
    let html = format!(
        "<html><body><nav>Home World Sport</nav><h1>Council expands bus network</h1>\
         <article><p>{ENGLISH_BODY}</p></article><footer>Copyright</footer></body></html>"
    );
    let article = extract(&doc(&html), &Options::default()).expect("article");
    let body = article.body.expect("body");
    assert!(body.starts_with("The city council voted"));
    assert!(!body.contains("Home World Sport"));
    assert!(!body.contains("Copyright"));
}

#[test]
fn loose_long_paragraphs_are_joined() {
    let html = "<html><body><h1>Council expands bus network</h1>\
        <p>The city council voted on Tuesday to expand the bus network across the north.</p>\
        <p>Share this</p>\
        <p>Officials said the first buses would begin running in the spring next year.</p>\
        </body></html>";
    let article = extract(&doc(html), &Options::default()).expect("article");
    assert_eq!(
        article.body.as_deref(),
        Some(
            "The city council voted on Tuesday to expand the bus network across the north. \
             Officials said the first buses would begin running in the spring next year."
        )
    );
}

#[test]
fn meta_description_is_last_resort_body() {
    let html = r#"<html><head><meta name="description" content="Four new routes are planned."></head>
        <body><h1>Council expands bus network</h1></body></html>"#;
    let article = extract(&doc(html), &Options::default()).expect("article");
    assert_eq!(article.body.as_deref(), Some("Four new routes are planned."));
}

#[test]
fn dates_are_rendered_uniformly() {
    let cases = [
        ("<time>May 1, 2023</time>", Some("2023-05-01 00:00:00")),
        (
            r#"<meta property="article:published_time" content="2024-03-14T09:30:00+02:00">"#,
            Some("2024-03-14 09:30:00"),
        ),
        ("<p>Posted 14/03/2024 by staff</p>", Some("2024-03-14 00:00:00")),
        ("<p>No date anywhere</p>", None),
    ];
    for (snippet, expected) in cases {
        let html = format!("<html><body>{snippet}<h1>Headline</h1></body></html>");
        let article = extract_fields(&doc(&html), &Options::default());
        assert_eq!(article.publication_date.as_deref(), expected, "snippet: {snippet}");
    }
}

#[test]
fn english_body_is_detected() {
    let html = format!(
        "<html><body><h1>Council expands bus network</h1><article><p>{ENGLISH_BODY}</p></article></body></html>"
    );
    let article = extract(&doc(&html), &Options::default()).expect("article");
    assert_eq!(article.language, "en");
}

#[test]
fn strict_mode_rejects_short_bodies() {
    let html = format!(
        "<html><body><h1>Council expands bus network</h1><article><p>{ENGLISH_BODY}</p></article></body></html>"
    );
    // The body has 58 words.
    let raw = doc(&html);
    assert!(extract_strict(&raw, &Options::default()).is_some());

    let demanding = Options {
        min_body_words: 200,
        ..Options::default()
    };
    assert_eq!(
        extract_with_mode(&raw, &demanding, Mode::Strict),
        Err(ExtractionMiss::BodyTooShort { words: 58, minimum: 200 })
    );
}

#[test]
fn metadata_passes_through() {
    let raw = RawDocument {
        source: Some("Example News".to_string()),
        doc_type: "testing".to_string(),
        ..doc(&format!("<h1>Council expands bus network</h1><article>{ENGLISH_BODY}</article>"))
    };
    let article = extract(&raw, &Options::default()).expect("article");
    assert_eq!(article.url, "https://news.example.com/story");
    assert_eq!(article.source, "Example News");
    assert_eq!(article.doc_type, "testing");
}

#[test]
fn extraction_is_deterministic() {
    let html = format!(
        "<html><head><meta property=\"og:title\" content=\"Council expands bus network\"></head>\
         <body><h2>Transport</h2><div><p>{ENGLISH_BODY}</p></div><time>1 May 2023</time></body></html>"
    );
    let raw = doc(&html);
    let first = extract_fields(&raw, &Options::default());
    for _ in 0..5 {
        assert_eq!(extract_fields(&raw, &Options::default()), first);
    }
}
