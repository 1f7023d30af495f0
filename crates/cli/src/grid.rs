//! Product grid shown on the buyer and artisan dashboards.
//!
//! The grid is page markup in the browser; here it is read from a YAML file
//! (`HANDLOOM_GRID_PATH`) or taken from the built-in handloom collection.
//!
//! ```yaml
//! - id: ikat-shawl
//!   name: Ikat Cotton Shawl
//!   price: 24
//!   image: /images/ikat-shawl.jpg
//! ```

use std::path::Path;

use handloom_core::{Price, ProductId};
use handloom_storefront::ProductCard;
use serde::Deserialize;

use crate::config::ConfigError;

/// Price attribute as written in the grid file: either a number or text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Number(f64),
    Text(String),
}

impl RawPrice {
    fn into_attribute(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: String,
    name: String,
    price: RawPrice,
    #[serde(default)]
    image: String,
}

/// One product card on the grid, with its raw attribute values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridProduct {
    pub id: ProductId,
    pub name: String,
    /// The `data-product-price` attribute, uncoerced.
    pub price: String,
    pub image: String,
}

impl GridProduct {
    fn new(id: &str, name: &str, price: &str, image: &str) -> Result<Self, ConfigError> {
        let id = ProductId::parse(id).map_err(|e| ConfigError::Grid(e.to_string()))?;
        Ok(Self {
            id,
            name: name.to_owned(),
            price: price.to_owned(),
            image: image.to_owned(),
        })
    }

    /// The card's data attributes as the cart reads them.
    #[must_use]
    pub fn card(&self) -> ProductCard {
        ProductCard::from_attributes(self.id.clone(), &self.name, &self.price)
    }

    /// Price text as the card displays it.
    #[must_use]
    pub fn price_text(&self) -> String {
        Price::coerce(&self.price).display()
    }
}

/// Load the grid from `path`, or the built-in grid when no path is set.
///
/// # Errors
///
/// Returns `ConfigError::Grid` if the file cannot be read or parsed, or a
/// product has a blank ID.
pub fn load(path: Option<&Path>) -> Result<Vec<GridProduct>, ConfigError> {
    let Some(path) = path else {
        return builtin();
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Grid(format!("{}: {e}", path.display())))?;
    parse(&content)
}

fn parse(content: &str) -> Result<Vec<GridProduct>, ConfigError> {
    let raw: Vec<RawProduct> =
        serde_yaml::from_str(content).map_err(|e| ConfigError::Grid(e.to_string()))?;

    raw.into_iter()
        .map(|p| GridProduct::new(&p.id, &p.name, &p.price.into_attribute(), &p.image))
        .collect()
}

fn builtin() -> Result<Vec<GridProduct>, ConfigError> {
    [
        ("ikat-shawl", "Ikat Cotton Shawl", "24", "/images/ikat-shawl.jpg"),
        ("banarasi-saree", "Banarasi Silk Saree", "129.99", "/images/banarasi-saree.jpg"),
        ("pashmina-stole", "Pashmina Stole", "58.50", "/images/pashmina-stole.jpg"),
    ]
    .into_iter()
    .map(|(id, name, price, image)| GridProduct::new(id, name, price, image))
    .collect()
}

/// Find a product on the grid by raw ID.
#[must_use]
pub fn find<'a>(grid: &'a [GridProduct], id: &ProductId) -> Option<&'a GridProduct> {
    grid.iter().find(|product| &product.id == id)
}
