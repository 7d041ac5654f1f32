pub mod map_view;
pub mod viewport;
