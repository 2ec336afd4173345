pub mod datatype;
pub mod sample_data;

pub use datatype::*;
pub use sample_data::*;
