pub mod home;
pub mod jokes;
pub mod layout;
