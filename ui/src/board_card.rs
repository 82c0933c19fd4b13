use api::BoardInfo;
use dioxus::prelude::*;

/// Card for one board on the dashboard. Clicking the body opens the board;
/// the edit and delete buttons stop propagation so they do not navigate.
#[component]
pub fn BoardCard(
    board: BoardInfo,
    on_open: EventHandler<String>,
    on_edit: EventHandler<BoardInfo>,
    on_delete: EventHandler<String>,
) -> Element {
    let created = board.created_at.format("%b %d, %Y").to_string();

    rsx! {
        div {
            class: "board-card",
            style: "border-top: 4px solid {board.color_tag};",

            div {
                class: "board-card-body",
                onclick: {
                    let id = board.id.clone();
                    move |_| on_open.call(id.clone())
                },
                h3 { class: "board-card-title", "{board.title}" }
                if !board.description.is_empty() {
                    p { class: "board-card-description", "{board.description}" }
                }
                span { class: "board-card-date", "Created {created}" }
            }

            div {
                class: "board-card-actions",
                button {
                    class: "button-ghost",
                    onclick: {
                        let b = board.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_edit.call(b.clone());
                        }
                    },
                    "Edit"
                }
                button {
                    class: "button-ghost button-danger",
                    onclick: {
                        let id = board.id.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_delete.call(id.clone());
                        }
                    },
                    "Delete"
                }
            }
        }
    }
}
