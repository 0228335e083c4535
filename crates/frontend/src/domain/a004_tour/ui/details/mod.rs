mod view;
pub use view::TourDetails;
