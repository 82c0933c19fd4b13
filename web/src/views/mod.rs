//! Views for the Taskdeck web client.

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod boards;
pub use boards::Boards;

mod board_detail;
pub use board_detail::BoardDetail;
