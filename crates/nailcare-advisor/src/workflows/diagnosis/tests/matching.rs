use std::collections::BTreeSet;

use super::common::*;
use crate::workflows::diagnosis::{match_products, CatalogProduct, MAX_RECOMMENDATIONS};

fn tag_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn ids(products: &[CatalogProduct]) -> Vec<&str> {
    products.iter().map(|product| product.id.as_str()).collect()
}

#[test]
fn matches_name_description_and_category_in_catalog_order() {
    let matched = match_products(&tag_set(&["moisturizing"]), &care_catalog());

    assert_eq!(ids(&matched), vec!["p-2", "p-3", "p-4"]);
}

#[test]
fn keyword_matching_ignores_case() {
    let catalog = vec![product("oil", "Cuticle OIL Treatment")];
    let matched = match_products(&tag_set(&[]), &catalog);
    assert_eq!(ids(&matched), vec!["oil"]);
}

#[test]
fn topic_tags_extend_the_keyword_set() {
    let catalog = vec![
        product("p-1", "Preventive Shield Serum"),
        product("p-2", "Neon Lacquer"),
    ];

    assert_eq!(
        ids(&match_products(&tag_set(&["preventive"]), &catalog)),
        vec!["p-1"]
    );
}

#[test]
fn substring_matches_inside_unrelated_words() {
    let catalog = vec![product("p-1", "Careful Red")];
    assert_eq!(ids(&match_products(&tag_set(&[]), &catalog)), vec!["p-1"]);
}

#[test]
fn never_returns_more_than_six_products() {
    let catalog: Vec<_> = (0..20)
        .map(|index| product(&format!("p-{index}"), "Strengthening Base"))
        .collect();

    let matched = match_products(&tag_set(&["treatment"]), &catalog);

    assert_eq!(matched.len(), MAX_RECOMMENDATIONS);
    assert_eq!(ids(&matched), vec!["p-0", "p-1", "p-2", "p-3", "p-4", "p-5"]);
}

#[test]
fn falls_back_to_featured_products_when_nothing_matches() {
    let catalog = vec![
        product("p-1", "Cherry Red Lacquer"),
        featured("p-2", "Glitter Top Coat"),
        product("p-3", "Nail File"),
        featured("p-4", "Matte Finish"),
    ];

    let matched = match_products(&tag_set(&["growth"]), &catalog);

    assert_eq!(ids(&matched), vec!["p-2", "p-4"]);
    assert!(matched.iter().all(|product| product.featured));
}

#[test]
fn featured_fallback_is_capped_at_six() {
    let catalog: Vec<_> = (0..9)
        .map(|index| featured(&format!("f-{index}"), "Glitter Top Coat"))
        .collect();

    let matched = match_products(&tag_set(&["growth"]), &catalog);

    assert_eq!(ids(&matched), vec!["f-0", "f-1", "f-2", "f-3", "f-4", "f-5"]);
}

#[test]
fn no_matches_and_no_featured_products_is_empty() {
    let catalog = vec![product("p-1", "Cherry Red Lacquer")];
    assert!(match_products(&tag_set(&["growth"]), &catalog).is_empty());
}

#[test]
fn empty_catalog_yields_empty_recommendations() {
    assert!(match_products(&tag_set(&["cuticle-care"]), &[]).is_empty());
}
