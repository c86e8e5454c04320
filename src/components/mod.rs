pub mod config_banner;
pub mod input_card;
pub mod landing_nav;
pub mod waitlist_form;
