//! Owned storage for a tuple's values.
//!
//! Each value lives in its own heap-allocated `Holder<T>`. The holders are
//! kept behind `Box<dyn Handle>` in one array, so a `Tuple` has the same layout
//! whatever its element types are. Element types are recovered from the
//! tuple's `TypeList` at compile time, never from the handles.

mod elements;
mod holder;
mod tuple;

pub use elements::Elements;
pub use holder::{Handle, Holder};
pub use tuple::{make_tuple, CloneList, Tuple};
