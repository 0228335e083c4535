pub mod cards;
pub mod form_fields;
pub mod form_shell;
pub mod image_manager;
pub mod pagination_controls;
