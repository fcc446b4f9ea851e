//! Runtime wiring helpers for the stock recipe flows.

use std::sync::Arc;

use crate::tools::{recipe_detail_tools, recipe_list_tools};
use crate::{
    AgentFlow, AgentRunHooks, AgentService, ModelProvider, Recipe, SafeRunHooks, ToolRegistry,
    TracingRunHooks,
};

/// Tracing hooks wrapped so a logging panic can never abort a run.
pub fn default_hooks() -> Arc<dyn AgentRunHooks> {
    Arc::new(SafeRunHooks::new(TracingRunHooks))
}

/// Placeholder record handed to recipe-bound tools before a real recipe
/// exists. Only the name is meaningful.
pub fn detail_stub(dish: impl Into<String>) -> Recipe {
    Recipe::new(dish, ["..."], "...", 0.0)
}

/// List flow agent: `get_recipes` plus a `RecipeList` final shape.
pub fn recipe_list_agent(provider: Arc<dyn ModelProvider>) -> AgentService {
    agent_with(
        provider,
        Arc::new(recipe_list_tools()),
        AgentFlow::recipe_list(),
    )
}

/// Detail flow agent: recipe-bound tools fed a stub named after the
/// dish, plus a single `Recipe` final shape.
pub fn recipe_detail_agent(
    provider: Arc<dyn ModelProvider>,
    dish: impl Into<String>,
) -> AgentService {
    agent_with(
        provider,
        Arc::new(recipe_detail_tools()),
        AgentFlow::recipe_detail(detail_stub(dish)),
    )
}

pub fn agent_with(
    provider: Arc<dyn ModelProvider>,
    registry: Arc<ToolRegistry>,
    flow: AgentFlow,
) -> AgentService {
    AgentService::builder(provider)
        .registry(registry)
        .flow(flow)
        .hooks(default_hooks())
        .build()
}
