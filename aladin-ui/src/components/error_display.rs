//! Blocking notice for errors that end the session.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Full-screen notice; nothing behind it stays interactive.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0,0,0,0.7); z-index: 100;",
            div {
                role: "alertdialog",
                style: "padding: 16px 20px; max-width: 320px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; text-align: center;",
                "{props.message}"
            }
        }
    }
}
