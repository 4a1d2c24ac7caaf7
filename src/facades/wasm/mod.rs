pub mod browser;
pub mod converters;
