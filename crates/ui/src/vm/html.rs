use std::collections::HashSet;

/// Clean question or answer markup for `dangerous_inner_html`.
///
/// Keeps a small set of inline tags and no attributes. Entities such as
/// `&quot;` come out decoded.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = ["b", "strong", "i", "em", "u", "sub", "sup", "br", "span", "code"]
        .into_iter()
        .collect();

    ammonia::Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .clean(html)
        .to_string()
}
