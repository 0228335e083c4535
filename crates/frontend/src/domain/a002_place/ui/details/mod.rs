mod view;
pub use view::PlaceDetails;
