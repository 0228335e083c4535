mod view;
pub use view::AccommodationDetails;
