pub mod downgrade;
pub mod render;

pub use downgrade::markdown_to_text;
pub use render::{Rendered, html_to_markdown};
