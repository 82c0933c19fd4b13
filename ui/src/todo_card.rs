use api::{TodoInfo, TodoStatus};
use dioxus::prelude::*;

/// Card for one todo on the board detail view, with inline status controls.
#[component]
pub fn TodoCard(
    todo: TodoInfo,
    on_status: EventHandler<(String, TodoStatus)>,
    on_edit: EventHandler<TodoInfo>,
    on_delete: EventHandler<String>,
) -> Element {
    let card_class = if todo.status == TodoStatus::Done {
        "todo-card todo-card-done"
    } else {
        "todo-card"
    };
    let due = todo.due_date.map(|d| d.format("%b %d, %Y").to_string());

    rsx! {
        div {
            class: "{card_class}",

            div {
                class: "todo-card-header",
                h4 { class: "todo-card-title", "{todo.title}" }
                span { class: "priority-chip priority-{todo.priority}", "{todo.priority}" }
            }

            if !todo.description.is_empty() {
                p { class: "todo-card-description", "{todo.description}" }
            }
            if let Some(due) = due {
                span { class: "todo-card-due", "Due {due}" }
            }

            div {
                class: "todo-card-footer",
                div {
                    class: "status-switch",
                    for status in TodoStatus::ALL {
                        button {
                            key: "{status}",
                            class: if status == todo.status { "status-option status-active" } else { "status-option" },
                            disabled: status == todo.status,
                            onclick: {
                                let id = todo.id.clone();
                                move |_| on_status.call((id.clone(), status))
                            },
                            {status.label()}
                        }
                    }
                }
                div {
                    class: "todo-card-actions",
                    button {
                        class: "button-ghost",
                        onclick: {
                            let t = todo.clone();
                            move |_| on_edit.call(t.clone())
                        },
                        "Edit"
                    }
                    button {
                        class: "button-ghost button-danger",
                        onclick: {
                            let id = todo.id.clone();
                            move |_| on_delete.call(id.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}
