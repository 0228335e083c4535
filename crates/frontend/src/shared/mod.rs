pub mod api_utils;
pub mod components;
pub mod config;
pub mod confirm;
pub mod crud;
pub mod date_utils;
pub mod form_state;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal_stack;
pub mod toast;
