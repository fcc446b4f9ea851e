//! Tool descriptors and the declared argument shapes handlers accept.
//!
//! A tool states up front which adaptation it expects: raw positional
//! strings straight from the wire grammar, or a decoded [`Recipe`]
//! record. The controller performs the adaptation; handlers never guess.
//!
//! ```rust
//! use ltooling::{ArgBinding, ToolArgs, ToolDefinition};
//!
//! let definition = ToolDefinition::new(
//!     "get_recipes",
//!     "Fetches a list of recipes for a dish",
//!     ArgBinding::Positional,
//! );
//!
//! let args = ToolArgs::positional(["sugar-free biscuits"]);
//! assert_eq!(definition.binding, ArgBinding::Positional);
//! assert_eq!(args.as_positional().unwrap().len(), 1);
//! ```

use lschema::Recipe;

use crate::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgBinding {
    /// Positional string arguments, order preserved from the wire form.
    Positional,
    /// A single decoded recipe record.
    Recipe,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub binding: ArgBinding,
}

impl ToolDefinition {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        binding: ArgBinding,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            binding,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    Positional(Vec<String>),
    Recipe(Recipe),
}

impl ToolArgs {
    pub fn positional<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Positional(args.into_iter().map(Into::into).collect())
    }

    pub fn recipe(recipe: Recipe) -> Self {
        Self::Recipe(recipe)
    }

    pub fn binding(&self) -> ArgBinding {
        match self {
            Self::Positional(_) => ArgBinding::Positional,
            Self::Recipe(_) => ArgBinding::Recipe,
        }
    }

    pub fn as_positional(&self) -> Result<&[String], ToolError> {
        match self {
            Self::Positional(args) => Ok(args),
            Self::Recipe(_) => Err(ToolError::invalid_arguments(
                "handler expected positional string arguments",
            )),
        }
    }

    pub fn as_recipe(&self) -> Result<&Recipe, ToolError> {
        match self {
            Self::Recipe(recipe) => Ok(recipe),
            Self::Positional(_) => Err(ToolError::invalid_arguments(
                "handler expected a decoded recipe record",
            )),
        }
    }
}
