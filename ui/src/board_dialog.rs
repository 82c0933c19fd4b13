use api::{BoardInfo, BoardPayload};
use dioxus::prelude::*;

/// Color palette offered for board tags. The first entry is the default.
pub const COLOR_OPTIONS: [(&str, &str); 6] = [
    ("#6366f1", "Indigo"),
    ("#8b5cf6", "Violet"),
    ("#3b82f6", "Blue"),
    ("#10b981", "Emerald"),
    ("#f59e0b", "Amber"),
    ("#ef4444", "Red"),
];

/// Inline form for creating or editing a board.
#[component]
pub fn BoardDialog(
    initial: Option<BoardInfo>,
    on_save: EventHandler<BoardPayload>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = initial.is_some();
    let mut title = use_signal({
        let i = initial.clone();
        move || i.map(|b| b.title).unwrap_or_default()
    });
    let mut description = use_signal({
        let i = initial.clone();
        move || i.map(|b| b.description).unwrap_or_default()
    });
    let mut color = use_signal({
        let i = initial.clone();
        move || {
            i.map(|b| b.color_tag)
                .unwrap_or_else(|| COLOR_OPTIONS[0].0.to_string())
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_save.call(BoardPayload {
            title: Some(t),
            description: Some(description().trim().to_string()),
            color_tag: Some(color()),
        });
    };

    rsx! {
        form {
            class: "dialog-form",
            onsubmit: handle_submit,

            h2 {
                class: "dialog-title",
                if editing { "Edit Board" } else { "New Board" }
            }

            div {
                class: "form-field",
                label { class: "form-label", r#for: "board-title", "Title" }
                input {
                    id: "board-title",
                    class: "form-input",
                    r#type: "text",
                    placeholder: "e.g. Work, Groceries, Side project",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", r#for: "board-description", "Description" }
                textarea {
                    id: "board-description",
                    class: "form-input",
                    rows: 3,
                    placeholder: "Optional",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                span { class: "form-label", "Color" }
                div {
                    class: "color-row",
                    for (value, name) in COLOR_OPTIONS {
                        button {
                            key: "{value}",
                            r#type: "button",
                            title: "{name}",
                            class: if color() == value { "color-swatch color-swatch-active" } else { "color-swatch" },
                            style: "background: {value};",
                            onclick: move |_| color.set(value.to_string()),
                        }
                    }
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
