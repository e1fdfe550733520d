pub mod response;

pub use response::{Created, ErrorBody};
