//! Heterogeneous fixed-size tuples with compile-time indexed access.
//!
//! ```
//! use htuple::tuple;
//!
//! let t = tuple!(1, 5, String::from("hello"), 't', vec![1, 2, 3, 4, 5]);
//! let greeting: String = t.get::<2>();
//! let first: i32 = t.get::<0>();
//! assert_eq!(greeting, "hello");
//! assert_eq!(first, 1);
//! assert_eq!(t.get_ref::<4>(), &[1, 2, 3, 4, 5]);
//! ```

pub mod storage;
pub mod types;
pub mod util;

pub use storage::{make_tuple, Tuple};
pub use types::TypeList;
pub use util::TupleError;

/// Builds a [`Tuple`] from a comma separated list of values.
///
/// `tuple!(a, b, c)` is `Tuple::new((a, b, c))`.
#[macro_export]
macro_rules! tuple {
    ($($value:expr),+ $(,)?) => {
        $crate::Tuple::new(($($value,)+))
    };
}
