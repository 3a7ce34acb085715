use std::{convert::Infallible, marker::PhantomData};

/// Type-level zero.
pub enum Z {}

/// Type-level successor of `N`.
pub struct S<N>(Infallible, PhantomData<N>);

/// A type-level natural number.
pub trait Nat: sealed::Sealed {
    const VALUE: usize;
}

impl Nat for Z {
    const VALUE: usize = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// Carries a const-generic index into the type system.
pub struct Idx<const I: usize>;

/// Maps `Idx<I>` to the natural `S^I<Z>`.
///
/// Implemented for `I` in `0..32`; larger indices have no mapping and are
/// rejected at compile time like any other out-of-range index.
pub trait ToNat {
    type Nat: Nat;
}

/// The type-level natural for the const index `I`.
pub type NatOf<const I: usize> = <Idx<I> as ToNat>::Nat;

macro_rules! impl_to_nat {
    ($nat:ty; $i:literal $(, $rest:literal)*) => {
        impl ToNat for Idx<$i> {
            type Nat = $nat;
        }

        impl_to_nat!(S<$nat>; $($rest),*);
    };
    ($nat:ty;) => {};
}

impl_to_nat!(
    Z;
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31
);

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Z {}

    impl<N: super::Nat> Sealed for super::S<N> {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn successor_counts_up() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<Z>>::VALUE, 1);
        assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
    }

    #[test]
    fn const_index_matches_natural() {
        assert_eq!(<NatOf<0>>::VALUE, 0);
        assert_eq!(<NatOf<7>>::VALUE, 7);
        assert_eq!(<NatOf<31>>::VALUE, 31);
    }
}
