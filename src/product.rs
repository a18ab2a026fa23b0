use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A named, priced product. Fields are read-only once built:
///
/// ```compile_fail
/// let mut product = snippets::Product::new("Pen", 10.0);
/// product.price = 0.0;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Product {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

lazy_static! {
    /// Fixed sample catalogue.
    pub static ref SAMPLE_PRODUCTS: Vec<Product> = vec![
        Product::new("Pen", 10.0),
        Product::new("Notebook", 25.0),
        Product::new("Bag", 50.0),
    ];
}

/// Owned copy of [`SAMPLE_PRODUCTS`].
pub fn sample_products() -> Vec<Product> {
    SAMPLE_PRODUCTS.clone()
}

/// Returns the product with the highest price, or `None` for an empty slice.
///
/// Only a strictly greater price replaces the current best, so the first of
/// several equally priced products wins.
pub fn get_most_expensive_product(products: &[Product]) -> Option<&Product> {
    let (first, rest) = products.split_first()?;
    Some(rest.iter().fold(first, |best, product| {
        if product.price() > best.price() {
            trace!(from = best.name(), to = product.name(), "new most expensive product");
            product
        } else {
            best
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_is_none() {
        assert_eq!(get_most_expensive_product(&[]), None);
    }

    #[test]
    fn test_sample_products() {
        let best = get_most_expensive_product(&SAMPLE_PRODUCTS).unwrap();
        assert_eq!(best, &Product::new("Bag", 50.0));
    }

    #[test]
    fn test_sample_products_fixed() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name(), "Pen");
        assert_eq!(products[1].name(), "Notebook");
        assert_eq!(products[2].name(), "Bag");
    }

    #[test]
    fn test_tie_keeps_first() {
        let products = vec![
            Product::new("Cheap", 1.0),
            Product::new("First", 9.0),
            Product::new("Second", 9.0),
        ];
        assert_eq!(get_most_expensive_product(&products).unwrap().name(), "First");
    }

    #[test]
    fn test_accessors() {
        let product = Product::new("Bag", 50.0);
        assert_eq!(product.name(), "Bag");
        assert_eq!(product.price(), 50.0);
    }

    #[test]
    fn test_single_product() {
        let products = vec![Product::new("Only", 3.0)];
        assert_eq!(get_most_expensive_product(&products), Some(&products[0]));
    }

    #[test]
    fn test_products_from_json() {
        let json = r#"[{"name":"A","price":2},{"name":"B","price":7.5}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(get_most_expensive_product(&products).unwrap().name(), "B");
    }

    proptest! {
        #[test]
        fn test_result_is_first_maximum(prices in prop::collection::vec(0u32..100, 1..20)) {
            let products: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, p)| Product::new(format!("p{}", i), f64::from(*p)))
                .collect();
            let best = get_most_expensive_product(&products).unwrap();

            prop_assert!(products.iter().all(|p| p.price() <= best.price()));
            let first_max = products.iter().position(|p| p.price() == best.price()).unwrap();
            prop_assert_eq!(products[first_max].name(), best.name());
        }
    }
}
