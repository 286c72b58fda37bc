//! Effects the player can trigger with tools found in boxes.
mod tool;

pub use tool::{SpecialTool, ToolTarget};
