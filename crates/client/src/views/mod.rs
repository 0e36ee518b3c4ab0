//! View components for the application.

pub mod board;
pub mod home;
pub mod layouts;
pub mod login;

pub use board::Board;
pub use home::Home;
pub use layouts::BaseLayout;
pub use login::Login;
