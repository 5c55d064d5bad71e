pub mod layout;
pub mod lenient;
pub mod profile;

pub use layout::LayoutConfig;
pub use profile::Profile;
