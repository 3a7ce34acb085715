use super::holder::{Handle, Holder};
use crate::{types::TypeList, util::TupleError};

/// A native tuple `(T0, ..., Tn)` whose values can be moved into holders.
///
/// Implemented for arities 1 through 12, or 1 through 32 with the `arity-32`
/// feature. `List` is the matching `TypeList![T0, ..., Tn]`.
pub trait Elements: sealed::Sealed {
    type List: TypeList;

    /// Boxes every value into its holder, in order.
    #[doc(hidden)]
    fn into_handles(self) -> Box<[Box<dyn Handle>]>;

    /// Fallible `into_handles`. Holders built before a failure are released.
    #[doc(hidden)]
    fn try_into_handles(self) -> Result<Box<[Box<dyn Handle>]>, TupleError>;
}

macro_rules! impl_elements {
    ($($T:ident)+) => {
        impl<$($T: 'static),+> sealed::Sealed for ($($T,)+) {}

        impl<$($T: 'static),+> Elements for ($($T,)+) {
            type List = crate::TypeList![$($T),+];

            #[allow(non_snake_case)]
            fn into_handles(self) -> Box<[Box<dyn Handle>]> {
                let ($($T,)+) = self;
                vec![$(Holder::boxed($T)),+].into_boxed_slice()
            }

            #[allow(non_snake_case)]
            fn try_into_handles(self) -> Result<Box<[Box<dyn Handle>]>, TupleError> {
                let ($($T,)+) = self;
                let mut handles: Vec<Box<dyn Handle>> = Vec::new();
                handles.try_reserve_exact(<Self::List as TypeList>::LEN)?;
                $(
                    let index = handles.len();
                    handles.push(Holder::try_boxed($T, index)?);
                )+
                Ok(handles.into_boxed_slice())
            }
        }
    };
}

// Emits `impl_elements!` for every prefix of the given parameter list.
macro_rules! impl_elements_prefixes {
    ([$($done:ident)*] $next:ident $($rest:ident)*) => {
        impl_elements!($($done)* $next);
        impl_elements_prefixes!([$($done)* $next] $($rest)*);
    };
    ([$($done:ident)*]) => {};
}

impl_elements_prefixes!([] T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11);

#[cfg(feature = "arity-32")]
impl_elements_prefixes!(
    [T0 T1 T2 T3 T4 T5 T6 T7 T8 T9 T10 T11]
    T12 T13 T14 T15 T16 T17 T18 T19 T20 T21 T22 T23 T24 T25 T26 T27 T28 T29 T30 T31
);

mod sealed {
    pub trait Sealed {}
}
