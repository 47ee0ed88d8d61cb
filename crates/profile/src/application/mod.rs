pub mod add_photo;
pub mod delete_photo;
pub mod get_profile;
pub mod register;
pub mod remove_photo;
pub mod save_profile;
pub mod sign_in;
pub mod sign_out;
