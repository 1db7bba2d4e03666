//! Command handlers - extracted from main.rs for testability

pub mod config;
pub mod render;

pub use config::execute_config;
pub use render::{
    execute_detailed, execute_plan, execute_summary, load_summary, render_markdown, Destination,
    RenderPlan,
};
