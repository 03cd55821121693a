pub mod convert;
pub mod input;
pub mod note;
pub mod serve;
