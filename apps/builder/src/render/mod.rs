// Rendering: layout config → style block, profile sections → region fragments,
// everything → one HTML page. Pure functions only; nothing here returns Result.

pub mod main_content;
pub mod page;
pub mod sections;
pub mod sidebar;
pub mod style;

pub use page::generate_html;
