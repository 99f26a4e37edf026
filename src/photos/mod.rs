pub mod consts;
pub mod gps;
pub mod img;
