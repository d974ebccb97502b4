//! Transient UI chrome state: toast notifications.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state so pages report outcomes
//! without knowing how they are rendered or dismissed.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single toast notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id used for dismissal.
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Append a toast and return its id.
    pub fn push_toast(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
