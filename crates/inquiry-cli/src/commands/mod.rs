//! Command implementations.

pub mod ask;
pub mod legend;
pub mod render;
pub mod suggestions;

pub use self::ask::execute_ask;
pub use self::legend::execute_legend;
pub use self::render::execute_render;
pub use self::suggestions::{execute_suggestions, SUGGESTIONS};
