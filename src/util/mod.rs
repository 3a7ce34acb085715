mod error;

pub use error::TupleError;
