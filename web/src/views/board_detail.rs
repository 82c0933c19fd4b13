//! Single-board view: the board header, per-status counts, and its todos.

use api::{BoardInfo, TodoInfo, TodoPayload, TodoStatus};
use dioxus::prelude::*;
use ui::{use_auth, TodoCard, TodoDialog};

use crate::Route;

/// Board detail component.
#[component]
pub fn BoardDetail(board_id: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut board = use_signal(|| Option::<BoardInfo>::None);
    let mut todos = use_signal(Vec::<TodoInfo>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<TodoInfo>::None);

    // Not signed in: back to login
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    // Load the board and its todos once the session is established.
    let id_for_load = board_id.clone();
    let _ = use_resource(move || {
        let id = id_for_load.clone();
        async move {
            let state = auth();
            if state.loading || state.token.is_none() {
                return;
            }
            let api = ui::client(&state);
            match api.board(&id).await {
                Ok(b) => board.set(Some(b)),
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                    return;
                }
            }
            match api.todos_for_board(&id).await {
                Ok(list) => {
                    todos.set(list);
                    loading.set(false);
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        }
    });

    let handle_save = move |payload: TodoPayload| {
        let current = editing();
        spawn(async move {
            error.set(None);
            let api = ui::client(&auth());
            let result = match &current {
                Some(todo) => api.update_todo(&todo.id, &payload).await,
                None => api.create_todo(&payload).await,
            };
            match result {
                Ok(todo) => {
                    todos.with_mut(|list| {
                        match list.iter().position(|t| t.id == todo.id) {
                            Some(idx) => list[idx] = todo,
                            None => list.insert(0, todo),
                        }
                    });
                    editing.set(None);
                    show_dialog.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let handle_status = move |(id, status): (String, TodoStatus)| {
        spawn(async move {
            match ui::client(&auth())
                .update_todo_status(&id, status.as_str())
                .await
            {
                Ok(updated) => todos.with_mut(|list| {
                    if let Some(idx) = list.iter().position(|t| t.id == updated.id) {
                        list[idx] = updated;
                    }
                }),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match ui::client(&auth()).delete_todo(&id).await {
                Ok(_) => todos.with_mut(|list| list.retain(|t| t.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let list = todos();
    let open = list.iter().filter(|t| t.status == TodoStatus::Todo).count();
    let in_progress = list
        .iter()
        .filter(|t| t.status == TodoStatus::InProgress)
        .count();
    let done = list.iter().filter(|t| t.status == TodoStatus::Done).count();

    rsx! {
        div {
            class: "page",

            Link { class: "back-link", to: Route::Boards {}, "Back to boards" }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            if let Some(b) = board() {
                header {
                    class: "page-header",
                    div {
                        h1 {
                            class: "page-title",
                            span {
                                class: "board-color-dot",
                                style: "background: {b.color_tag};",
                            }
                            "{b.title}"
                        }
                        if !b.description.is_empty() {
                            p { class: "page-subtitle", "{b.description}" }
                        }
                    }
                    button {
                        class: "button-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_dialog.set(true);
                        },
                        "Add Todo"
                    }
                }

                div {
                    class: "stat-row",
                    span { class: "stat-chip", "{open} to do" }
                    span { class: "stat-chip", "{in_progress} in progress" }
                    span { class: "stat-chip", "{done} done" }
                }
            }

            if loading() {
                p { class: "empty-state", "Loading todos..." }
            } else if list.is_empty() && board().is_some() {
                div {
                    class: "empty-state",
                    p { "Nothing here yet. Add a todo to get started." }
                }
            } else {
                div {
                    class: "todo-list",
                    for todo in list.iter() {
                        TodoCard {
                            key: "{todo.id}",
                            todo: todo.clone(),
                            on_status: handle_status,
                            on_edit: move |t: TodoInfo| {
                                editing.set(Some(t));
                                show_dialog.set(true);
                            },
                            on_delete: handle_delete,
                        }
                    }
                }
            }

            if show_dialog() {
                div {
                    class: "dialog-overlay",
                    onclick: move |_| show_dialog.set(false),
                    div {
                        class: "dialog",
                        onclick: move |evt: MouseEvent| evt.stop_propagation(),
                        TodoDialog {
                            board_id: board_id.clone(),
                            initial: editing(),
                            on_save: handle_save,
                            on_cancel: move |_| show_dialog.set(false),
                        }
                    }
                }
            }
        }
    }
}
