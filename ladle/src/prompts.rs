//! System prompts and user query templates for the two stock flows.
//!
//! The wording is load-bearing: it teaches the model the wire grammar
//! the response parser accepts, so edits here must stay in step with
//! the parser.

/// System prompt for the list flow.
pub const RECIPE_LIST_SYSTEM_PROMPT: &str = r#"You are a recipe agent. Given a dish name, your goal is to provide a list of recipes.
The final output should be a JSON object with a "recipes" key, which contains a list of recipe objects.
You have one tool available:
- get_recipes(dish_name: str): Fetches a list of recipes.

Your response should be one of two things:
1. A function call to the available tool, formatted as:
FUNCTION_CALL: <tool_name>|<parameter>

2. The final answer in JSON format, prefixed with "FINAL_ANSWER:", like this:
FINAL_ANSWER: {"recipes": [...]}"#;

/// System prompt for the detail flow.
pub const RECIPE_DETAIL_SYSTEM_PROMPT: &str = r#"You are a recipe agent. Given a dish name, fetch recipe details (recipe_name, ingredients, cooking_style, glycemic_load) in JSON. Use tools when needed:
- get_ingredients(recipe)
- calculate_glycemic_load(recipe)
Respond with either:
FUNCTION_CALL: <tool_name>|<param1>|...
or
FINAL_ANSWER: <JSON>"#;

pub fn recipe_list_query(dish: &str) -> String {
    format!("Fetch recipes for '{dish}'.")
}

pub fn recipe_detail_query(dish: &str) -> String {
    format!("Fetch recipe for '{dish}' and output JSON or call tools accordingly.")
}
