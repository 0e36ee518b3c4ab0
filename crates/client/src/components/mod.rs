//! Shared UI components.

pub mod toast_host;

pub use toast_host::ToastHost;
