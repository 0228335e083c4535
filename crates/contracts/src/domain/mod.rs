pub mod common;

pub mod a001_category;
pub mod a002_place;
pub mod a003_event;
pub mod a004_tour;
pub mod a005_accommodation;
pub mod a006_restaurant;
pub mod a007_media;
