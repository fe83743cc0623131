//! Pizza Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum PizzaCategory {
    #[default]
    Classic,
    Gourmet,
    Vegan,
    Special,
}

impl PizzaCategory {
    /// Wire name, as stored and as accepted in the `category` query filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Gourmet => "gourmet",
            Self::Vegan => "vegan",
            Self::Special => "special",
        }
    }
}

/// Pizza entity (collection `pizza`)
///
/// The identifier is assigned by the store and never part of this payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Pizza {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: PizzaCategory,
    /// Price of the smallest size
    #[validate(range(min = 0.0))]
    pub base_price: f64,
    /// Size labels only, no per-size pricing
    #[serde(default = "default_sizes")]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub toppings: Vec<String>,
    /// Shown as featured on the landing page
    #[serde(default)]
    pub is_popular: bool,
}

fn default_sizes() -> Vec<String> {
    ["Small", "Medium", "Large"].map(String::from).to_vec()
}

impl Pizza {
    pub fn new(name: impl Into<String>, base_price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            image: None,
            category: PizzaCategory::default(),
            base_price,
            sizes: default_sizes(),
            toppings: Vec::new(),
            is_popular: false,
        }
    }
}
