use dioxus::prelude::*;

use crate::components::alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

pub fn delete_title(item: &str) -> String {
    format!("Delete {item}")
}

pub fn delete_description(item: &str) -> String {
    format!("Are you sure you want to delete {item}? This action cannot be undone.")
}

/// Label of the confirm button; switches while the delete request runs.
pub fn confirm_label(pending: bool) -> &'static str {
    if pending {
        "Deleting..."
    } else {
        "Delete"
    }
}

/// Modal asking the user to confirm a destructive delete.
///
/// `open` is owned by the caller, which flips it back through
/// `on_open_change` when the dialog is dismissed.
#[component]
pub fn DeleteConfirmation(
    open: bool,
    item: String,
    #[props(default = false)] pending: bool,
    on_confirm: EventHandler<()>,
    on_open_change: EventHandler<bool>,
) -> Element {
    let title = delete_title(&item);
    let description = delete_description(&item);
    let label = confirm_label(pending);

    rsx! {
        AlertDialogRoot {
            open,
            on_open_change: move |value| on_open_change.call(value),
            AlertDialogContent {
                AlertDialogTitle { "{title}" }
                AlertDialogDescription { "{description}" }
                AlertDialogActions {
                    AlertDialogCancel { "Cancel" }
                    AlertDialogAction {
                        on_click: move |_| {
                            if !pending {
                                on_confirm.call(());
                            }
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
