use std::collections::BTreeSet;

use super::catalog::CatalogProduct;

pub const MAX_RECOMMENDATIONS: usize = 6;

/// Terms searched for in addition to the diagnosis topic tags.
pub const EXTRA_KEYWORDS: [&str; 10] = [
    "strength",
    "strengthening",
    "cuticle",
    "oil",
    "moisturiz",
    "hydrat",
    "treatment",
    "growth",
    "base",
    "care",
];

/// Topic tags plus the fixed extra keywords, lowercased.
pub fn keyword_set<'a, I>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    tags.into_iter()
        .map(|tag| tag.to_ascii_lowercase())
        .chain(EXTRA_KEYWORDS.iter().map(|keyword| keyword.to_string()))
        .collect()
}

/// Substring test over name, description and category; `keywords` must be lowercase.
fn product_matches(product: &CatalogProduct, keywords: &BTreeSet<String>) -> bool {
    let fields: Vec<String> = [
        Some(product.name.as_str()),
        product.description.as_deref(),
        product.category_name(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_ascii_lowercase)
    .collect();

    keywords
        .iter()
        .any(|keyword| fields.iter().any(|field| field.contains(keyword.as_str())))
}

/// Select up to six products for the given topic tags.
///
/// Products are kept in catalog order. When nothing matches, the first featured
/// products are returned instead, which may be an empty list.
pub fn match_products(tags: &BTreeSet<String>, catalog: &[CatalogProduct]) -> Vec<CatalogProduct> {
    let keywords = keyword_set(tags);

    let matched: Vec<CatalogProduct> = catalog
        .iter()
        .filter(|product| product_matches(product, &keywords))
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect();

    if !matched.is_empty() {
        return matched;
    }

    catalog
        .iter()
        .filter(|product| product.featured)
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect()
}
