pub mod inputs;
pub mod landing;
pub mod login;
pub mod register;
