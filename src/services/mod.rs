pub mod filters;
pub mod picker;
pub mod providers;
