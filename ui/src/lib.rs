//! Shared UI for the Taskdeck workspace: the authentication context plus the
//! board and todo components the web client composes into views.

mod auth;
pub use auth::{
    api_base, clear_token, client, load_token, save_token, sign_in, sign_out, sign_up, use_auth,
    AuthProvider, AuthState, LogoutButton, TOKEN_STORAGE_KEY,
};

mod board_card;
pub use board_card::BoardCard;

mod board_dialog;
pub use board_dialog::{BoardDialog, COLOR_OPTIONS};

mod todo_card;
pub use todo_card::TodoCard;

mod todo_dialog;
pub use todo_dialog::TodoDialog;
