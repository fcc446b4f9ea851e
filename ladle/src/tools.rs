//! Built-in recipe tools and registry assemblies for the two stock flows.
//!
//! ```rust
//! use ladle::tools::recipe_list_tools;
//!
//! let registry = recipe_list_tools();
//! assert!(registry.contains("get_recipes"));
//! ```

use serde_json::{Value, json};

use crate::{ArgBinding, ToolDefinition, ToolError, ToolRegistry};

/// The catalog behind `get_recipes`. A real deployment would query a
/// database or search API here.
pub fn recipe_catalog() -> Value {
    json!([
        {
            "recipe_name": "Almond Flour Cheddar Biscuits",
            "ingredients": [
                "2 cups almond flour",
                "1 tbsp baking powder",
                "1/2 tsp salt",
                "1/4 cup cold butter, cubed",
                "1 cup shredded sharp cheddar cheese",
                "1/2 cup unsweetened almond milk",
                "1 large egg"
            ],
            "cooking_style": "Baking",
            "glycemic_load": 5.0
        },
        {
            "recipe_name": "Coconut Flour Drop Biscuits",
            "ingredients": [
                "1/2 cup coconut flour",
                "1/4 cup psyllium husk powder",
                "1 tbsp baking powder",
                "1/2 tsp salt",
                "1/4 cup melted butter or coconut oil",
                "3 large eggs",
                "1/2 cup unsweetened almond milk"
            ],
            "cooking_style": "Baking",
            "glycemic_load": 6.0
        },
        {
            "recipe_name": "Cream Cheese Biscuits",
            "ingredients": [
                "4 oz cream cheese, softened",
                "1/2 cup unsalted butter, softened",
                "2 large eggs",
                "1 1/2 cups almond flour",
                "1 tbsp baking powder",
                "1/2 tsp salt"
            ],
            "cooking_style": "Baking",
            "glycemic_load": 4.0
        }
    ])
}

/// Registry for the list flow: a single positional tool that looks up
/// recipes by dish name.
pub fn recipe_list_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register_fn(
        ToolDefinition::new(
            "get_recipes",
            "Fetches a list of recipes for a given dish",
            ArgBinding::Positional,
        ),
        |args| {
            let args = args.as_positional()?;
            if args.first().map(String::as_str).unwrap_or("").is_empty() {
                return Err(ToolError::invalid_arguments(
                    "get_recipes requires a dish name",
                ));
            }

            Ok(recipe_catalog())
        },
    );

    registry
}

/// Registry for the detail flow: recipe-bound tools that read fields off
/// the record the flow supplies.
pub fn recipe_detail_tools() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register_fn(
        ToolDefinition::new(
            "get_ingredients",
            "Returns the ingredient list of a recipe",
            ArgBinding::Recipe,
        ),
        |args| Ok(json!(args.as_recipe()?.ingredients)),
    );
    registry.register_fn(
        ToolDefinition::new(
            "calculate_glycemic_load",
            "Returns the glycemic load of a recipe",
            ArgBinding::Recipe,
        ),
        |args| Ok(json!(args.as_recipe()?.glycemic_load)),
    );

    registry
}

#[cfg(test)]
mod tests {
    use crate::{Recipe, ToolArgs};

    use super::{recipe_catalog, recipe_detail_tools, recipe_list_tools};

    #[test]
    fn catalog_entries_validate_as_recipes() {
        let catalog = recipe_catalog();
        let entries = catalog.as_array().expect("catalog is an array");
        assert_eq!(entries.len(), 3);

        for entry in entries {
            lschema::validate_recipe(entry).expect("catalog entry conforms");
        }
    }

    #[test]
    fn get_recipes_requires_a_dish_name() {
        let registry = recipe_list_tools();

        let result = registry.invoke(
            "get_recipes",
            &ToolArgs::positional(["sugar-free biscuits"]),
        );
        assert!(result.is_ok());

        let result = registry.invoke("get_recipes", &ToolArgs::positional(Vec::<String>::new()));
        assert!(result.is_err());
    }

    #[test]
    fn detail_tools_read_fields_off_the_bound_recipe() {
        let registry = recipe_detail_tools();
        let recipe = Recipe::new(
            "Sugar free cookies",
            ["almond flour", "butter"],
            "Baking",
            3.0,
        );
        let args = ToolArgs::recipe(recipe);

        let ingredients = registry
            .invoke("get_ingredients", &args)
            .expect("ingredients read");
        assert_eq!(ingredients, serde_json::json!(["almond flour", "butter"]));

        let load = registry
            .invoke("calculate_glycemic_load", &args)
            .expect("load read");
        assert_eq!(load, serde_json::json!(3.0));
    }
}
