//! Application state stores, provided as context objects.

pub mod toast;
pub mod user;

pub use toast::{
    expire_after, schedule_toast, Toast, ToastContext, ToastId, ToastKind, ToastProvider,
    ToastQueue, ToastStore, DEFAULT_TOAST_DURATION,
};
pub use user::{UserContext, UserProvider, UserStore};
