pub mod loaded_file;
pub mod quiz_link;

pub use loaded_file::*;
pub use quiz_link::*;
