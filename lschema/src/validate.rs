//! Shape-driven structural validation over decoded JSON values.

use serde_json::{Map, Value};

use crate::{AgentAction, Recipe, RecipeList, SchemaError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordShape {
    Recipe,
    RecipeList,
    AgentAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidatedRecord {
    Recipe(Recipe),
    RecipeList(RecipeList),
    AgentAction(AgentAction),
}

pub fn validate(value: &Value, shape: RecordShape) -> Result<ValidatedRecord, SchemaError> {
    match shape {
        RecordShape::Recipe => validate_recipe(value).map(ValidatedRecord::Recipe),
        RecordShape::RecipeList => validate_recipe_list(value).map(ValidatedRecord::RecipeList),
        RecordShape::AgentAction => validate_agent_action(value).map(ValidatedRecord::AgentAction),
    }
}

pub fn validate_recipe(value: &Value) -> Result<Recipe, SchemaError> {
    validate_recipe_at(value, "")
}

pub fn validate_recipe_list(value: &Value) -> Result<RecipeList, SchemaError> {
    let object = required_object(value, "recipes")?;
    let entries = required_field(object, "recipes", "")?
        .as_array()
        .ok_or_else(|| SchemaError::wrong_type("recipes", "a sequence of recipes"))?;

    let mut recipes = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        recipes.push(validate_recipe_at(entry, &format!("recipes[{index}]."))?);
    }

    Ok(RecipeList::new(recipes))
}

pub fn validate_agent_action(value: &Value) -> Result<AgentAction, SchemaError> {
    let object = required_object(value, "name")?;
    let name = required_string(object, "name", "")?;

    let parameters = required_field(object, "parameters", "")?
        .as_object()
        .cloned()
        .ok_or_else(|| SchemaError::wrong_type("parameters", "an object"))?;

    Ok(AgentAction::new(name, parameters))
}

fn validate_recipe_at(value: &Value, prefix: &str) -> Result<Recipe, SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type(trim_path(prefix), "an object"))?;

    let recipe_name = required_string(object, "recipe_name", prefix)?;
    let ingredients = required_string_seq(object, "ingredients", prefix)?;
    let cooking_style = required_string(object, "cooking_style", prefix)?;
    let glycemic_load = required_number(object, "glycemic_load", prefix)?;

    if glycemic_load < 0.0 {
        return Err(SchemaError::invalid(
            format!("{prefix}glycemic_load"),
            "must not be negative",
        ));
    }

    Ok(Recipe {
        recipe_name,
        ingredients,
        cooking_style,
        glycemic_load,
    })
}

fn required_object<'a>(
    value: &'a Value,
    first_field: &str,
) -> Result<&'a Map<String, Value>, SchemaError> {
    value
        .as_object()
        .ok_or_else(|| SchemaError::wrong_type(first_field, "an object payload"))
}

fn required_field<'a>(
    object: &'a Map<String, Value>,
    field: &str,
    prefix: &str,
) -> Result<&'a Value, SchemaError> {
    object
        .get(field)
        .ok_or_else(|| SchemaError::missing(format!("{prefix}{field}")))
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    prefix: &str,
) -> Result<String, SchemaError> {
    required_field(object, field, prefix)?
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| SchemaError::wrong_type(format!("{prefix}{field}"), "a string"))
}

fn required_string_seq(
    object: &Map<String, Value>,
    field: &str,
    prefix: &str,
) -> Result<Vec<String>, SchemaError> {
    let entries = required_field(object, field, prefix)?
        .as_array()
        .ok_or_else(|| {
            SchemaError::wrong_type(format!("{prefix}{field}"), "a sequence of strings")
        })?;

    let mut values = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let text = entry.as_str().ok_or_else(|| {
            SchemaError::wrong_type(format!("{prefix}{field}[{index}]"), "a string")
        })?;
        values.push(text.to_string());
    }

    Ok(values)
}

// No coercion: "5.0" as a JSON string is rejected, not parsed.
fn required_number(
    object: &Map<String, Value>,
    field: &str,
    prefix: &str,
) -> Result<f64, SchemaError> {
    required_field(object, field, prefix)?
        .as_f64()
        .ok_or_else(|| SchemaError::wrong_type(format!("{prefix}{field}"), "a number"))
}

// Path label for a record that is not an object at all; "$" marks the root.
fn trim_path(prefix: &str) -> &str {
    let trimmed = prefix.trim_end_matches('.');
    if trimmed.is_empty() { "$" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn biscuit() -> Value {
        json!({
            "recipe_name": "Almond Flour Cheddar Biscuits",
            "ingredients": ["2 cups almond flour"],
            "cooking_style": "Baking",
            "glycemic_load": 5.0
        })
    }

    #[test]
    fn accepts_a_conforming_recipe() {
        let recipe = validate_recipe(&biscuit()).expect("recipe conforms");
        assert_eq!(recipe.recipe_name, "Almond Flour Cheddar Biscuits");
        assert_eq!(recipe.ingredients, vec!["2 cups almond flour"]);
        assert_eq!(recipe.glycemic_load, 5.0);
    }

    #[test]
    fn missing_glycemic_load_names_the_field() {
        let mut value = biscuit();
        value.as_object_mut().unwrap().remove("glycemic_load");

        let err = validate_recipe(&value).expect_err("missing field must fail");
        assert_eq!(err.field, "glycemic_load");
    }

    #[test]
    fn numeric_strings_are_not_coerced() {
        let mut value = biscuit();
        value["glycemic_load"] = json!("5.0");

        let err = validate_recipe(&value).expect_err("string must not pass as number");
        assert_eq!(err.field, "glycemic_load");
        assert!(err.reason.contains("number"));
    }

    #[test]
    fn negative_glycemic_load_is_rejected() {
        let mut value = biscuit();
        value["glycemic_load"] = json!(-1.0);

        let err = validate_recipe(&value).expect_err("negative load must fail");
        assert_eq!(err.field, "glycemic_load");
    }

    #[test]
    fn non_string_ingredient_names_the_element() {
        let mut value = biscuit();
        value["ingredients"] = json!(["flour", 7]);

        let err = validate_recipe(&value).expect_err("mixed sequence must fail");
        assert_eq!(err.field, "ingredients[1]");
    }

    #[test]
    fn recipe_list_validates_each_entry_with_its_path() {
        let ok = json!({ "recipes": [biscuit()] });
        let list = validate_recipe_list(&ok).expect("list conforms");
        assert_eq!(list.len(), 1);

        let empty = json!({ "recipes": [] });
        assert!(validate_recipe_list(&empty).expect("empty list is legal").is_empty());

        let mut broken_entry = biscuit();
        broken_entry.as_object_mut().unwrap().remove("cooking_style");
        let bad = json!({ "recipes": [biscuit(), broken_entry] });

        let err = validate_recipe_list(&bad).expect_err("broken entry must fail");
        assert_eq!(err.field, "recipes[1].cooking_style");
    }

    #[test]
    fn recipe_list_requires_the_recipes_key() {
        let err = validate_recipe_list(&json!({})).expect_err("missing key must fail");
        assert_eq!(err.field, "recipes");
    }

    #[test]
    fn agent_action_requires_name_and_parameter_object() {
        let ok = json!({ "name": "get_ingredients", "parameters": { "dish": "biscuits" } });
        let action = validate_agent_action(&ok).expect("action conforms");
        assert_eq!(action.name, "get_ingredients");

        let err = validate_agent_action(&json!({ "name": "x", "parameters": [] }))
            .expect_err("non-object parameters must fail");
        assert_eq!(err.field, "parameters");
    }

    #[test]
    fn validate_dispatches_on_shape() {
        let recipe = validate(&biscuit(), RecordShape::Recipe).expect("recipe shape");
        assert!(matches!(recipe, ValidatedRecord::Recipe(_)));

        let list = validate(&json!({ "recipes": [] }), RecordShape::RecipeList)
            .expect("recipe list shape");
        assert!(matches!(list, ValidatedRecord::RecipeList(_)));

        let err = validate(&json!("not an object"), RecordShape::Recipe)
            .expect_err("non-object must fail");
        assert!(!err.reason.is_empty());
    }
}
