use super::*;

#[test]
fn push_toast_assigns_increasing_ids() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastKind::Success, "saved");
    let second = ui.push_toast(ToastKind::Error, "failed");
    assert!(second > first);
    assert_eq!(ui.toasts.len(), 2);
}

#[test]
fn dismiss_toast_removes_only_the_target() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastKind::Success, "one");
    let second = ui.push_toast(ToastKind::Success, "two");
    ui.dismiss_toast(first);
    assert_eq!(ui.toasts.len(), 1);
    assert_eq!(ui.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut ui = UiState::default();
    ui.push_toast(ToastKind::Error, "kept");
    ui.dismiss_toast(99);
    assert_eq!(ui.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut ui = UiState::default();
    let first = ui.push_toast(ToastKind::Success, "one");
    ui.dismiss_toast(first);
    let second = ui.push_toast(ToastKind::Success, "two");
    assert!(second > first);
}
