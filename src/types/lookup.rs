use super::{Nat, NatOf, NonEmpty, TypeList, S, Z};

/// Resolves the type at position `N` of a type list.
///
/// Resolution walks the list one node per successor: `TypeAt<S<N>>` of a list
/// is `TypeAt<N>` of its tail, and `TypeAt<Z>` is the head. `Nil` has no
/// implementation, so looking past the end is a compile error.
pub trait TypeAt<N: Nat>: TypeList {
    type Output;
}

impl<L: NonEmpty> TypeAt<Z> for L {
    type Output = L::Head;
}

impl<L, N> TypeAt<S<N>> for L
where
    L: NonEmpty,
    L::Tail: TypeAt<N>,
    N: Nat,
{
    type Output = <L::Tail as TypeAt<N>>::Output;
}

/// The element type at const index `I` of the list `L`.
pub type ElementAt<L, const I: usize> = <L as TypeAt<NatOf<I>>>::Output;

#[cfg(test)]
mod test {
    use std::any::TypeId;

    use super::*;

    type Mixed = crate::TypeList![i32, i32, String, char, Vec<i32>];

    fn type_of<T: 'static>() -> TypeId {
        TypeId::of::<T>()
    }

    #[test]
    fn resolves_every_position() {
        assert_eq!(type_of::<ElementAt<Mixed, 0>>(), type_of::<i32>());
        assert_eq!(type_of::<ElementAt<Mixed, 1>>(), type_of::<i32>());
        assert_eq!(type_of::<ElementAt<Mixed, 2>>(), type_of::<String>());
        assert_eq!(type_of::<ElementAt<Mixed, 3>>(), type_of::<char>());
        assert_eq!(type_of::<ElementAt<Mixed, 4>>(), type_of::<Vec<i32>>());
    }

    #[test]
    fn single_element_list() {
        let value: ElementAt<crate::TypeList![u64], 0> = 42u64;
        assert_eq!(value, 42);
    }

    #[test]
    fn explicit_naturals() {
        let c: <Mixed as TypeAt<S<S<S<Z>>>>>::Output = 't';
        assert_eq!(c, 't');
    }
}
