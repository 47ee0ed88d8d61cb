pub mod entities;
pub mod models;
pub mod ports;
pub mod validation;
pub mod value_objects;
