mod view;
pub use view::RestaurantDetails;
