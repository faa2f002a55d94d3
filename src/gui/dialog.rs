//! Blocking message boxes for notices.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

use crate::{core::Record, presentation::Notice};

const DELETE_LABEL: &str = "Delete";
const CANCEL_LABEL: &str = "Cancel";

fn level(notice: &Notice) -> MessageLevel {
    match notice {
        Notice::Invalid(_) => MessageLevel::Error,
        Notice::ConfirmDelete => MessageLevel::Warning,
        Notice::Added | Notice::Updated | Notice::Deleted => MessageLevel::Info,
    }
}

/// Shows `notice` as a modal message box. Confirmation notices get
/// Delete/Cancel buttons; the result is true only when Delete was chosen.
pub async fn present<R: Record>(notice: Notice) -> bool {
    let buttons = if notice.is_confirmation() {
        MessageButtons::OkCancelCustom(DELETE_LABEL.to_string(), CANCEL_LABEL.to_string())
    } else {
        MessageButtons::Ok
    };
    let result = AsyncMessageDialog::new()
        .set_level(level(&notice))
        .set_title(notice.title())
        .set_description(notice.message::<R>())
        .set_buttons(buttons)
        .show()
        .await;
    if !notice.is_confirmation() {
        return false;
    }
    match result {
        MessageDialogResult::Ok | MessageDialogResult::Yes => true,
        MessageDialogResult::Custom(label) => label == DELETE_LABEL,
        _ => false,
    }
}
