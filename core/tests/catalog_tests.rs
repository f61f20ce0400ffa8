// tests/catalog_tests.rs
mod common;

use common::*;
use shopcart::Product;

#[test]
fn test_find_by_id_returns_every_product() {
  setup_tracing();
  let catalog = demo_catalog();
  for product in catalog.products() {
    assert_eq!(catalog.find_by_id(product.id), Some(product));
  }
}

#[test]
fn test_find_by_id_miss_is_none() {
  setup_tracing();
  assert!(demo_catalog().find_by_id(999).is_none());
}

#[test]
fn test_empty_query_returns_whole_catalog_in_order() {
  setup_tracing();
  let catalog = demo_catalog();
  let ids: Vec<u64> = catalog.search("").iter().map(|p| p.id).collect();
  assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn test_search_is_case_insensitive() {
  setup_tracing();
  let catalog = demo_catalog();
  let upper = catalog.search("LAPTOP");
  let lower = catalog.search("laptop");
  assert_eq!(upper, lower);
  assert_eq!(upper.len(), 1);
  assert_eq!(upper[0].name, "Laptop");
}

#[test]
fn test_search_matches_substrings_in_catalog_order() {
  setup_tracing();
  let catalog = demo_catalog();
  let names: Vec<&str> = catalog.search("phone").iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, vec!["Smartphone", "Headphones"]);
}

#[test]
fn test_search_without_match_is_empty() {
  setup_tracing();
  assert!(demo_catalog().search("toaster").is_empty());
}

#[test]
fn test_default_seed_prices_and_stock() {
  setup_tracing();
  let catalog = demo_catalog();
  let expected = [
    Product::new(1, "Laptop", price(99999), 10),
    Product::new(2, "Smartphone", price(49999), 15),
    Product::new(3, "Headphones", price(9999), 20),
    Product::new(4, "Tablet", price(29999), 8),
  ];
  assert_eq!(catalog.products(), &expected[..]);
}

#[test]
fn test_catalog_loads_from_json_file() {
  setup_tracing();
  let path = std::env::temp_dir().join(format!("shopcart-catalog-{}.json", std::process::id()));
  std::fs::write(
    &path,
    r#"[
      {"id": 10, "name": "Keyboard", "price": 49.9, "stock": 4},
      {"id": 11, "name": "Monitor", "price": 189.0, "stock": 2}
    ]"#,
  )
  .unwrap();

  let catalog = shopcart::Catalog::from_json_file(&path).unwrap();
  std::fs::remove_file(&path).ok();

  assert_eq!(catalog.len(), 2);
  assert_eq!(catalog.find_by_id(11).unwrap().price, price(18900));
  assert_eq!(catalog.search("KEY").len(), 1);
}
