pub mod clippings;
pub mod utility;
pub mod zim;
