pub mod cell_surface;
pub mod provider;
pub mod width;
