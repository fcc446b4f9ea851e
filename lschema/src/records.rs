//! Structured record types the agent is allowed to return.
//!
//! ```rust
//! use lschema::Recipe;
//!
//! let recipe = Recipe::new("Cream Cheese Biscuits", ["4 oz cream cheese"], "Baking", 4.0);
//! assert_eq!(recipe.cooking_style, "Baking");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub cooking_style: String,
    pub glycemic_load: f64,
}

impl Recipe {
    pub fn new<I, S>(
        recipe_name: impl Into<String>,
        ingredients: I,
        cooking_style: impl Into<String>,
        glycemic_load: f64,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            recipe_name: recipe_name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            cooking_style: cooking_style.into(),
            glycemic_load,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeList {
    pub recipes: Vec<Recipe>,
}

impl RecipeList {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

/// Generic named action with free-form parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentAction {
    pub name: String,
    pub parameters: Map<String, Value>,
}

impl AgentAction {
    pub fn new(name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_constructor_collects_ingredients_in_order() {
        let recipe = Recipe::new(
            "Coconut Flour Drop Biscuits",
            ["1/2 cup coconut flour", "3 large eggs"],
            "Baking",
            6.0,
        );

        assert_eq!(
            recipe.ingredients,
            vec!["1/2 cup coconut flour", "3 large eggs"]
        );
        assert_eq!(recipe.glycemic_load, 6.0);
    }

    #[test]
    fn recipe_list_reports_len_and_emptiness() {
        assert!(RecipeList::empty().is_empty());

        let list = RecipeList::new(vec![Recipe::new("X", ["a"], "Baking", 5.0)]);
        assert_eq!(list.len(), 1);
        assert!(!list.is_empty());
    }
}
