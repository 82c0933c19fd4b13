//! Dashboard view: the caller's boards, newest first.
//!
//! Mutations update the cached list in place on success (prepend on create,
//! replace on edit, drop on delete) so the dashboard never refetches just to
//! show a change the server already confirmed.

use api::{BoardInfo, BoardPayload};
use dioxus::prelude::*;
use ui::{use_auth, BoardCard, BoardDialog, LogoutButton};

use crate::Route;

/// Boards dashboard component.
#[component]
pub fn Boards() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut boards = use_signal(Vec::<BoardInfo>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_dialog = use_signal(|| false);
    let mut editing = use_signal(|| Option::<BoardInfo>::None);

    // Not signed in: back to login
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    // Load boards once the session is established.
    let _ = use_resource(move || async move {
        let state = auth();
        if state.loading || state.token.is_none() {
            return;
        }
        match ui::client(&state).boards().await {
            Ok(list) => {
                boards.set(list);
                loading.set(false);
            }
            Err(err) => {
                loading.set(false);
                error.set(Some(err.to_string()));
            }
        }
    });

    let handle_save = move |payload: BoardPayload| {
        let current = editing();
        spawn(async move {
            error.set(None);
            let api = ui::client(&auth());
            let result = match &current {
                Some(board) => api.update_board(&board.id, &payload).await,
                None => api.create_board(&payload).await,
            };
            match result {
                Ok(board) => {
                    boards.with_mut(|list| {
                        match list.iter().position(|b| b.id == board.id) {
                            Some(idx) => list[idx] = board,
                            None => list.insert(0, board),
                        }
                    });
                    editing.set(None);
                    show_dialog.set(false);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let handle_delete = move |id: String| {
        spawn(async move {
            match ui::client(&auth()).delete_board(&id).await {
                Ok(_) => boards.with_mut(|list| list.retain(|b| b.id != id)),
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let user_name = auth()
        .user
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",

            header {
                class: "page-header",
                div {
                    h1 { class: "page-title", "My Boards" }
                    p { class: "page-subtitle", "Signed in as {user_name}" }
                }
                div {
                    class: "page-header-actions",
                    button {
                        class: "button-primary",
                        onclick: move |_| {
                            editing.set(None);
                            show_dialog.set(true);
                        },
                        "New Board"
                    }
                    LogoutButton { class: "button-ghost" }
                }
            }

            if let Some(err) = error() {
                div { class: "error-banner", "{err}" }
            }

            if loading() {
                p { class: "empty-state", "Loading boards..." }
            } else if boards().is_empty() {
                div {
                    class: "empty-state",
                    p { "No boards yet. Create one to start organizing your tasks." }
                }
            } else {
                div {
                    class: "board-grid",
                    for board in boards() {
                        BoardCard {
                            key: "{board.id}",
                            board: board.clone(),
                            on_open: move |id: String| {
                                nav.push(Route::BoardDetail { board_id: id });
                            },
                            on_edit: move |b: BoardInfo| {
                                editing.set(Some(b));
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
                        BoardDialog {
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
