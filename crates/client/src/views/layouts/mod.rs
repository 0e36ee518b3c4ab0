pub mod base_layout;

pub use base_layout::BaseLayout;
