#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use news_extract::boilerplate::strip;
use news_extract::{preprocess, Error, Options, RawDocument};

#[test]
fn cleaned_text_excludes_chrome_and_ads() {
    let html = r#"
        <html>
          <head><title>Rates</title><script>track()</script></head>
          <body>
            <header>SITE_HEADER</header>
            <nav>MENU_TEXT</nav>
            <div class="ad-slot">BUY_NOW</div>
            <article>
              <h1>Central bank holds rates</h1>
              <p>The central bank left rates unchanged.</p>
              <aside class="related">RELATED_TEXT</aside>
            </article>
            <footer>FOOTER_TEXT</footer>
          </body>
        </html>
    "#;

    let cleaned = preprocess(
        &RawDocument::new("https://news.example.com/rates", html),
        &Options::default(),
    )
    .expect("cleaned");

    assert_eq!(
        cleaned.clean_text,
        "Rates Central bank holds rates The central bank left rates unchanged."
    );
    assert_eq!(cleaned.html, html);
}

#[test]
fn structural_tag_list_is_configurable() {
    let html = "<nav>MENU_TEXT</nav><footer>FOOTER_TEXT</footer><p>BODY_TEXT</p>";
    let options = Options {
        boilerplate_tags: vec!["nav".to_string()],
        ..Options::default()
    };
    assert_eq!(strip(html, &options), "FOOTER_TEXT BODY_TEXT");
}

#[test]
fn disabling_ad_patterns_keeps_flagged_elements() {
    let html = r#"<div class="promo">PROMO_TEXT</div><p>BODY_TEXT</p>"#;
    let options = Options {
        ad_patterns: Vec::new(),
        ..Options::default()
    };
    assert_eq!(strip(html, &options), "PROMO_TEXT BODY_TEXT");
}

#[test]
fn blank_document_is_malformed() {
    let err = preprocess(
        &RawDocument::new("https://news.example.com/blank", " \n\t "),
        &Options::default(),
    )
    .expect_err("blank html");
    assert!(matches!(err, Error::MalformedInput { .. }));
}

#[test]
fn non_ascii_text_survives_cleaning() {
    let html = "<p>Ｒａｔｅｓ rise in São Paulo</p>";
    let cleaned = preprocess(
        &RawDocument::new("https://news.example.com/sp", html),
        &Options::default(),
    )
    .expect("cleaned");
    assert_eq!(cleaned.clean_text, "Rates rise in São Paulo");
}
