use std::{alloc, alloc::Layout};

use tracing::debug;

use crate::util::TupleError;

/// Uniform handle through which holders of unrelated types share one array.
///
/// It has no methods; the trait object's vtable is only used to drop the
/// holder behind it.
pub trait Handle: sealed::Sealed {}

/// Owns exactly one value of type `T`.
#[derive(Clone, Debug)]
pub struct Holder<T> {
    value: T,
}

impl<T> Handle for Holder<T> {}

impl<T> Holder<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Reinterprets `handle` as the holder it points to.
    ///
    /// # Safety
    /// `handle` must have been created from a `Holder<T>`.
    #[inline]
    pub unsafe fn from_handle(handle: &dyn Handle) -> &Self {
        // Drops the vtable half of the fat pointer.
        &*(handle as *const dyn Handle as *const Self)
    }
}

impl<T: 'static> Holder<T> {
    pub fn boxed(value: T) -> Box<dyn Handle> {
        Box::new(Self::new(value))
    }

    /// Like `boxed`, but reports allocation failure instead of aborting.
    ///
    /// `index` is the element position, used in the error. `value` is dropped
    /// on failure.
    pub fn try_boxed(value: T, index: usize) -> Result<Box<dyn Handle>, TupleError> {
        let layout = Layout::new::<Self>();
        if layout.size() == 0 {
            return Ok(Self::boxed(value));
        }

        // UNSAFE: Manual allocation, handed over to Box with the same layout
        unsafe {
            let ptr = alloc::alloc(layout) as *mut Self;
            if ptr.is_null() {
                debug!(index, size = layout.size(), "holder allocation failed");
                return Err(TupleError::HolderAlloc {
                    index,
                    size: layout.size(),
                });
            }

            ptr.write(Self::new(value));
            Ok(Box::from_raw(ptr))
        }
    }
}

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for super::Holder<T> {}
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn round_trip_through_handle() {
        let handle = Holder::boxed(String::from("held"));
        let holder = unsafe { Holder::<String>::from_handle(&*handle) };
        assert_eq!(holder.value(), "held");
    }

    #[test]
    fn try_boxed_holds_value() {
        let handle = Holder::try_boxed(vec![1, 2, 3], 0).unwrap();
        let holder = unsafe { Holder::<Vec<i32>>::from_handle(&*handle) };
        assert_eq!(holder.value(), &vec![1, 2, 3]);
    }

    #[test]
    fn try_boxed_zero_sized() {
        #[derive(Debug, PartialEq)]
        struct Marker;

        let handle = Holder::try_boxed(Marker, 0).unwrap();
        let holder = unsafe { Holder::<Marker>::from_handle(&*handle) };
        assert_eq!(holder.value(), &Marker);
    }

    #[test]
    fn dropping_handle_drops_value() {
        let drops = Rc::new(Cell::new(0));
        let handle = Holder::try_boxed(DropCounter(drops.clone()), 0).unwrap();
        assert_eq!(drops.get(), 0);

        drop(handle);
        assert_eq!(drops.get(), 1);
    }
}
