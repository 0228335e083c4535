mod view;
pub use view::EventDetails;
