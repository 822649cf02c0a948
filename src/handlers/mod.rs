pub mod health;
pub mod not_found;
pub mod root;
pub mod status;

pub use health::health_handler;
pub use not_found::not_found_handler;
pub use root::root_handler;
pub use status::status_handler;
