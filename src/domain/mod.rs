pub mod entity;
pub mod listing;
pub mod repository;
pub mod tag_filter;
