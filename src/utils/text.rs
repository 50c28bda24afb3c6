use scraper::Html;

/// Strips the highlight markup the search service wraps around matched
/// terms (e.g. `<em>Sushi</em> Nakazawa`) and decodes HTML entities,
/// leaving plain text.
pub fn strip_markup(raw: &str) -> String {
    let fragment = Html::parse_fragment(raw);
    fragment
        .root_element()
        .text()
        .collect::<String>()
        .trim()
        .to_string()
}
