//! Compile-time description of a tuple's element types.
//!
//! A tuple's types are kept as a head/tail list (`Cons<A, Cons<B, Nil>>`) and
//! positions are looked up with type-level naturals. None of these types have
//! values; they only drive trait resolution.

mod list;
mod lookup;
mod nat;

pub use list::{Cons, Nil, NonEmpty, TypeList};
pub use lookup::{ElementAt, TypeAt};
pub use nat::{Idx, Nat, NatOf, ToNat, S, Z};
