use std::{convert::Infallible, marker::PhantomData};

/// The empty list. Ends every `Cons` chain.
pub enum Nil {}

/// A list node: `H` is the type at this position, `T` the rest of the list.
///
/// Neither `Nil` nor `Cons` can be instantiated; they only exist in type position.
/// Auto traits flow through the `PhantomData`, so `Cons<H, T>` is `Send`/`Sync`
/// exactly when all of its element types are.
pub struct Cons<H, T>(Infallible, PhantomData<(H, T)>);

/// A type-level sequence of element types.
pub trait TypeList: sealed::Sealed {
    /// Number of types in the list.
    const LEN: usize;
}

/// A list with at least one element.
pub trait NonEmpty: TypeList {
    type Head;
    type Tail: TypeList;
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

impl<H, T: TypeList> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

/// Expands a comma separated list of types into its `Cons` chain.
///
/// `TypeList![i32, String]` is `Cons<i32, Cons<String, Nil>>`.
#[macro_export]
macro_rules! TypeList {
    () => { $crate::types::Nil };
    ($head:ty $(, $tail:ty)*) => {
        $crate::types::Cons<$head, $crate::TypeList!($($tail),*)>
    };
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nil {}

    impl<H, T> Sealed for super::Cons<H, T> {}
}
