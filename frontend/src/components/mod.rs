pub mod auth_button;
pub mod chart;
pub mod empty_state;
pub mod guard;
pub mod layout;
