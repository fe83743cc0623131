//! Sample menu
//!
//! Inserted on startup when the pizza collection is empty.

use validator::Validate;

use super::repository::{PizzaRepository, RepoError, RepoResult};
use shared::models::{Pizza, PizzaCategory};

fn pizza(
    name: &str,
    description: &str,
    image: &str,
    category: PizzaCategory,
    base_price: f64,
    toppings: &[&str],
    is_popular: bool,
) -> Pizza {
    Pizza {
        description: Some(description.to_string()),
        image: Some(image.to_string()),
        category,
        toppings: toppings.iter().map(|t| t.to_string()).collect(),
        is_popular,
        ..Pizza::new(name, base_price)
    }
}

pub fn sample_pizzas() -> Vec<Pizza> {
    vec![
        pizza(
            "Margherita",
            "Fresh mozzarella, basil, San Marzano tomatoes.",
            "https://images.unsplash.com/photo-1548365328-9f547fb095de?w=800&q=80",
            PizzaCategory::Classic,
            8.99,
            &["Mozzarella", "Basil", "Tomato"],
            true,
        ),
        pizza(
            "Pepperoni",
            "Crispy pepperoni, premium mozzarella.",
            "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?w=800&q=80",
            PizzaCategory::Classic,
            9.99,
            &["Pepperoni", "Mozzarella"],
            true,
        ),
        pizza(
            "Veggie Garden",
            "Mushrooms, peppers, olives, onions.",
            "https://images.unsplash.com/photo-1600028068383-ea11a7a101f9?w=800&q=80",
            PizzaCategory::Vegan,
            10.49,
            &["Mushroom", "Bell Pepper", "Olives", "Onion"],
            false,
        ),
    ]
}

/// Insert [`sample_pizzas`] unless the menu already has entries
///
/// Returns the number of pizzas inserted. A degraded store is left alone.
pub async fn seed_pizzas(repo: &PizzaRepository) -> RepoResult<usize> {
    if !repo.store().is_connected() {
        tracing::warn!("Store unavailable, skipping menu seed");
        return Ok(0);
    }
    if repo.count().await? > 0 {
        tracing::debug!("Menu already populated, skipping seed");
        return Ok(0);
    }

    let pizzas = sample_pizzas();
    for pizza in &pizzas {
        pizza
            .validate()
            .map_err(|e| RepoError::Validation(format!("{}: {e}", pizza.name)))?;
        repo.create(pizza).await?;
    }
    tracing::info!(count = pizzas.len(), "Seeded sample menu");
    Ok(pizzas.len())
}
