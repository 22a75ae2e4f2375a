pub mod admin;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;

pub use admin::*;
pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use not_found::*;
