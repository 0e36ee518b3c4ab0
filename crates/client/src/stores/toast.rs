//! Toast notification store.
//!
//! Every toast removes itself after its duration. A manual `remove` does
//! not cancel the pending expiry; when it fires the removal is a no-op.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Toast key. Allocated from a per-queue counter, so two toasts never share
/// an id no matter how close together they are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

/// Ordered list of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Drop the toast with `id`; no-op if it is already gone.
    pub fn remove(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Wait out `duration`, then run `remove`.
pub async fn expire_after(duration: Duration, remove: impl FnOnce()) {
    crate::timer::sleep(duration).await;
    remove();
}

/// Shared handle to a toast queue.
pub trait ToastStore: Clone + 'static {
    fn update<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R;
}

impl ToastStore for Signal<ToastQueue> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ToastQueue) -> R) -> R {
        let mut queue = self.write();
        f(&mut queue)
    }
}

/// Push a toast into `store`. Returns its id and the future that removes it
/// once `duration` has passed; the caller decides where that future runs.
pub fn schedule_toast<S: ToastStore>(
    store: &S,
    message: String,
    duration: Duration,
    kind: ToastKind,
) -> (ToastId, impl Future<Output = ()> + 'static) {
    let mut store = store.clone();
    let id = store.update(|queue| queue.push(message, kind));
    let expiry = expire_after(duration, move || store.update(|queue| queue.remove(id)));
    (id, expiry)
}

/// Toast context provided to the app
#[derive(Clone, Copy, Debug)]
pub struct ToastContext {
    pub toasts: Signal<ToastQueue>,
}

impl ToastContext {
    /// Show `message` for `duration`.
    pub fn add(&self, message: impl Into<String>, duration: Duration, kind: ToastKind) -> ToastId {
        let (id, expiry) = schedule_toast(&self.toasts, message.into(), duration, kind);
        // Root scope: the expiry must outlive whichever view raised the toast
        spawn_forever(expiry);
        id
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.add(message, DEFAULT_TOAST_DURATION, ToastKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.add(message, DEFAULT_TOAST_DURATION, ToastKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.add(message, DEFAULT_TOAST_DURATION, ToastKind::Error)
    }

    pub fn remove(&self, id: ToastId) {
        let mut toasts = self.toasts;
        toasts.write().remove(id);
    }

    pub fn list(&self) -> Vec<Toast> {
        self.toasts.read().toasts().to_vec()
    }
}

/// Provider component for the toast context
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(ToastQueue::default);
    use_context_provider(|| ToastContext { toasts });
    children
}

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;
