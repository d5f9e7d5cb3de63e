use log::warn;
use serde::Deserialize;

use crate::config;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    #[serde(default)]
    pub promo: String,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
    #[serde(default)]
    pub contact: Contact,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Category {
    pub tag: String,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub image: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Stat {
    pub target: u64,
    pub label: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Contact {
    pub address: String,
    pub hours: String,
    pub phone: String,
}

impl Catalog {
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The catalog compiled into the binary. A broken file renders an empty page
    /// instead of failing the whole app.
    pub fn embedded() -> Self {
        Self::parse(config::CATALOG_JSON).unwrap_or_else(|err| {
            warn!("Failed to parse embedded catalog: {}", err);
            Self::default()
        })
    }
}
