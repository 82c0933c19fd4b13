use api::{TodoInfo, TodoPayload, TodoPriority, TodoStatus};
use dioxus::prelude::*;

/// Inline form for creating or editing a todo on one board. The payload
/// always carries `board_id`; the server only consults it on create.
#[component]
pub fn TodoDialog(
    board_id: String,
    initial: Option<TodoInfo>,
    on_save: EventHandler<TodoPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut title = use_signal({
        let i = initial.clone();
        move || i.map(|t| t.title).unwrap_or_default()
    });
    let mut description = use_signal({
        let i = initial.clone();
        move || i.map(|t| t.description).unwrap_or_default()
    });
    let mut status = use_signal({
        let i = initial.clone();
        move || i.map(|t| t.status).unwrap_or_default()
    });
    let mut priority = use_signal({
        let i = initial.clone();
        move || i.map(|t| t.priority).unwrap_or_default()
    });
    // Empty string means no due date; the date input and the API agree on
    // YYYY-MM-DD for everything else.
    let mut due_date = use_signal({
        let i = initial.clone();
        move || {
            i.and_then(|t| t.due_date)
                .map(|d| d.to_string())
                .unwrap_or_default()
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_save.call(TodoPayload {
            title: Some(t),
            description: Some(description().trim().to_string()),
            status: Some(status().to_string()),
            priority: Some(priority().to_string()),
            due_date: Some(due_date()),
            board_id: Some(board_id.clone()),
        });
    };

    rsx! {
        form {
            class: "dialog-form",
            onsubmit: handle_submit,

            h2 {
                class: "dialog-title",
                if editing { "Edit Todo" } else { "New Todo" }
            }

            div {
                class: "form-field",
                label { class: "form-label", r#for: "todo-title", "Title" }
                input {
                    id: "todo-title",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "What needs doing?",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", r#for: "todo-description", "Description" }
                textarea {
                    id: "todo-description",
                    class: "form-input",
                    rows: 3,
                    placeholder: "Optional",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { class: "form-label", r#for: "todo-status", "Status" }
                    select {
                        id: "todo-status",
                        class: "form-input",
                        value: "{status()}",
                        onchange: move |evt| {
                            if let Some(s) = TodoStatus::parse(&evt.value()) {
                                status.set(s);
                            }
                        },
                        for s in TodoStatus::ALL {
                            option { key: "{s}", value: "{s}", {s.label()} }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { class: "form-label", r#for: "todo-priority", "Priority" }
                    select {
                        id: "todo-priority",
                        class: "form-input",
                        value: "{priority()}",
                        onchange: move |evt| {
                            if let Some(p) = TodoPriority::parse(&evt.value()) {
                                priority.set(p);
                            }
                        },
                        for p in TodoPriority::ALL {
                            option { key: "{p}", value: "{p}", "{p}" }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", r#for: "todo-due", "Due date" }
                input {
                    id: "todo-due",
                    class: "form-input",
                    r#type: "date",
                    value: due_date(),
                    oninput: move |evt: FormEvent| due_date.set(evt.value()),
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "button-primary",
                    r#type: "submit",
                    if editing { "Save" } else { "Create" }
                }
                button {
                    class: "button-ghost",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
