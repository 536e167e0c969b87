pub mod inputmap;
pub mod reset_button;
pub mod session;
