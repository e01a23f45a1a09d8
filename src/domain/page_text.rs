use std::sync::LazyLock;

use itertools::Itertools;
use scraper::{ElementRef, Html, Selector};

static TEXT_TAGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p, h2, h3").expect("text tag selector is valid"));
static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("meta selector is valid")
});
static OG_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("og selector is valid")
});

/// Text of a statically fetched page: the meta description (or its OpenGraph
/// twin) followed by every paragraph and sub-heading.
pub fn extract_page_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut parts = vec![];
    if let Some(description) = meta_description(&document) {
        parts.push(description);
    }
    parts.push(text_blocks(&document));

    parts.join(" ")
}

/// Text of a browser rendered page. Meta tags are ignored here.
pub fn extract_rendered_text(html: &str) -> String {
    text_blocks(&Html::parse_document(html))
}

pub fn meta_description(document: &Html) -> Option<String> {
    [&*META_DESCRIPTION, &*OG_DESCRIPTION]
        .into_iter()
        .find_map(|selector| {
            document
                .select(selector)
                .find_map(|meta| meta.value().attr("content"))
        })
        .map(|content| content.trim().to_string())
}

pub fn text_blocks(document: &Html) -> String {
    document.select(&TEXT_TAGS).map(element_text).join(" ")
}

fn element_text(element: ElementRef) -> String {
    element.text().join(" ").trim().to_string()
}
