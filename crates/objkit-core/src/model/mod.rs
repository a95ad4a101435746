pub mod callable;
pub mod options;
pub mod value;

pub use callable::Callable;
pub use options::{CompareOptions, PrivateAttrsOptions};
pub use value::{iso_string, Map, Value};
