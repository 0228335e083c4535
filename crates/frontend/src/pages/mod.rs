//! Public browsing pages

pub mod accommodations;
pub mod catalog;
pub mod detail;
pub mod events;
pub mod home;
pub mod places;
pub mod restaurants;
pub mod tours;
