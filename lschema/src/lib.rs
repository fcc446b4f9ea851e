//! Record shapes and structural validation for final agent payloads.
//!
//! Validation is total and deliberately coercion-free: a decoded payload
//! either conforms to the requested shape or fails with the offending
//! field named. A numeric string is not a number.
//!
//! ```rust
//! use lschema::{RecordShape, ValidatedRecord, validate};
//!
//! let payload = serde_json::json!({
//!     "recipe_name": "Cream Cheese Biscuits",
//!     "ingredients": ["4 oz cream cheese, softened"],
//!     "cooking_style": "Baking",
//!     "glycemic_load": 4.0
//! });
//!
//! let validated = validate(&payload, RecordShape::Recipe).expect("payload conforms");
//! assert!(matches!(validated, ValidatedRecord::Recipe(_)));
//! ```

mod error;
mod records;
mod validate;

pub mod prelude {
    pub use crate::{
        AgentAction, Recipe, RecipeList, RecordShape, SchemaError, ValidatedRecord, validate,
        validate_agent_action, validate_recipe, validate_recipe_list,
    };
}

pub use error::SchemaError;
pub use records::{AgentAction, Recipe, RecipeList};
pub use validate::{
    RecordShape, ValidatedRecord, validate, validate_agent_action, validate_recipe,
    validate_recipe_list,
};
