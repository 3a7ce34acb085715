use std::marker::PhantomData;

use tracing::trace;

use super::{
    elements::Elements,
    holder::{Handle, Holder},
};
use crate::{
    types::{Cons, ElementAt, Idx, NatOf, Nil, ToNat, TypeAt, TypeList},
    util::TupleError,
};

/// A fixed-arity sequence of values of the types listed in `L`.
///
/// Slot `i` of `handles` always holds a `Holder` of `L`'s `i`th type. Every
/// construction path upholds this, and `get`/`get_ref` rely on it without
/// any runtime check.
pub struct Tuple<L: TypeList> {
    handles: Box<[Box<dyn Handle>]>,
    _types: PhantomData<L>,
}

impl<L: TypeList> Tuple<L> {
    pub const ARITY: usize = L::LEN;

    /// Moves each value of `elements` into its own holder.
    pub fn new<E>(elements: E) -> Self
    where
        E: Elements<List = L>,
    {
        Self::from_handles(elements.into_handles())
    }

    /// Like `new`, but returns an error if an allocation fails.
    ///
    /// On failure every holder built so far is released and the remaining
    /// values are dropped.
    pub fn try_new<E>(elements: E) -> Result<Self, TupleError>
    where
        E: Elements<List = L>,
    {
        Ok(Self::from_handles(elements.try_into_handles()?))
    }

    fn from_handles(handles: Box<[Box<dyn Handle>]>) -> Self {
        debug_assert_eq!(handles.len(), L::LEN);
        trace!(arity = L::LEN, "constructed tuple");
        Self {
            handles,
            _types: PhantomData,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        L::LEN
    }

    /// Returns a copy of element `I`, typed as it was declared.
    ///
    /// ```
    /// let t = htuple::tuple!(1, String::from("hello"), 't');
    /// let s: String = t.get::<1>();
    /// assert_eq!(s, "hello");
    /// ```
    ///
    /// Indices past the end do not compile:
    ///
    /// ```compile_fail
    /// let t = htuple::tuple!(1u8, 'x');
    /// let _ = t.get::<2>();
    /// ```
    ///
    /// ```compile_fail
    /// let t = htuple::tuple!(1u8, 'x');
    /// let _ = t.get::<-1>();
    /// ```
    ///
    /// Neither does asking for a different type than the one stored:
    ///
    /// ```compile_fail
    /// let t = htuple::tuple!(1u8, 'x');
    /// let _: char = t.get::<0>();
    /// ```
    pub fn get<const I: usize>(&self) -> ElementAt<L, I>
    where
        Idx<I>: ToNat,
        L: TypeAt<NatOf<I>>,
        ElementAt<L, I>: Clone,
    {
        self.get_ref::<I>().clone()
    }

    /// Borrows element `I`.
    ///
    /// ```compile_fail
    /// let t = htuple::tuple!(String::from("only"));
    /// let _ = t.get_ref::<1>();
    /// ```
    #[inline]
    pub fn get_ref<const I: usize>(&self) -> &ElementAt<L, I>
    where
        Idx<I>: ToNat,
        L: TypeAt<NatOf<I>>,
    {
        // `L: TypeAt<..>` already proves I < L::LEN.
        let handle = &*self.handles[I];
        // UNSAFE: slot I was filled with a Holder<ElementAt<L, I>>
        unsafe { Holder::<ElementAt<L, I>>::from_handle(handle).value() }
    }
}

// SAFETY: the holders own values of exactly the types in `L`, and `L` is
// Send/Sync only when all of them are.
unsafe impl<L: TypeList + Send> Send for Tuple<L> {}
unsafe impl<L: TypeList + Sync> Sync for Tuple<L> {}

/// A type list whose element types are all `Clone`.
pub trait CloneList: TypeList {
    /// Clones the holders at the front of `handles`, one per type in the list.
    #[doc(hidden)]
    fn clone_handles(handles: &[Box<dyn Handle>], out: &mut Vec<Box<dyn Handle>>);
}

impl CloneList for Nil {
    fn clone_handles(_: &[Box<dyn Handle>], _: &mut Vec<Box<dyn Handle>>) {}
}

impl<H, T> CloneList for Cons<H, T>
where
    H: Clone + 'static,
    T: CloneList,
{
    fn clone_handles(handles: &[Box<dyn Handle>], out: &mut Vec<Box<dyn Handle>>) {
        // UNSAFE: the first remaining slot belongs to this node's head type
        let head = unsafe { Holder::<H>::from_handle(&*handles[0]) };
        out.push(Box::new(head.clone()));
        T::clone_handles(&handles[1..], out);
    }
}

impl<L: CloneList> Clone for Tuple<L> {
    fn clone(&self) -> Self {
        // If an element's clone panics, the holders already in `handles`
        // are dropped during unwinding.
        let mut handles = Vec::with_capacity(L::LEN);
        L::clone_handles(&self.handles, &mut handles);
        Self::from_handles(handles.into_boxed_slice())
    }
}

/// Builds a `Tuple` from a native tuple of values.
pub fn make_tuple<E: Elements>(elements: E) -> Tuple<E::List> {
    Tuple::new(elements)
}
