//! A stateless typed allocator over the global heap.
//!
//! [`Allocate`] is the whole collaborator interface: hand out a block for `n` values of `T`, take
//! it back, and report the largest `n` that could ever succeed. [`Allocator`] implements it on top
//! of `std::alloc`, whose [`Layout`] already honors over-aligned types.

use std::{
    alloc::{self as global, Layout},
    fmt,
    marker::PhantomData,
    ptr::NonNull,
};

use log::{trace, warn};

use crate::error::AllocError;

/// Typed allocation of uninitialized storage.
pub trait Allocate<T> {
    /// Obtain a block with room for `n` values of `T`, suitably aligned.
    ///
    /// The block is never null. A request for zero bytes returns a dangling, well-aligned pointer
    /// that must still be handed back through [`deallocate`](Allocate::deallocate) with the same
    /// `n`.
    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError>;

    /// Return a block.
    ///
    /// # Safety
    ///
    /// `block` must have come from [`allocate`](Allocate::allocate) on an allocator that compares
    /// equal to this one, with the same `n`, and must not be used afterwards.
    unsafe fn deallocate(&self, block: NonNull<T>, n: usize);

    /// The largest `n` for which [`allocate`](Allocate::allocate) might succeed.
    fn max_size(&self) -> usize;
}

/// The global-heap allocator for values of `T`.
///
/// It carries no state, so every instance is interchangeable with every other, including
/// instances for other element types: they all compare equal and any one of them may free a block
/// obtained from another.
///
/// ```
/// use mystl::alloc::{Allocate, Allocator};
///
/// let alloc = Allocator::<u64>::new();
/// let block = alloc.allocate(4).unwrap();
/// unsafe {
///     block.as_ptr().write(7);
///     assert_eq!(block.as_ptr().read(), 7);
///     alloc.rebind::<u8>().rebind::<u64>().deallocate(block, 4);
/// }
/// ```
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    Copy(bound = ""),
    Default(bound = ""),
    Hash(bound = "")
)]
pub struct Allocator<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Allocator<T> {
    /// A new allocator. Equivalent to every other.
    pub const fn new() -> Self {
        Allocator {
            marker: PhantomData,
        }
    }

    /// The allocator for another element type.
    pub const fn rebind<U>(&self) -> Allocator<U> {
        Allocator::new()
    }
}

impl<T> fmt::Debug for Allocator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Allocator<{}>", std::any::type_name::<T>())
    }
}

impl<T, U> PartialEq<Allocator<U>> for Allocator<T> {
    fn eq(&self, _: &Allocator<U>) -> bool {
        true
    }
}

impl<T> Eq for Allocator<T> {}

impl<T> Allocate<T> for Allocator<T> {
    fn allocate(&self, n: usize) -> Result<NonNull<T>, AllocError> {
        let max = self.max_size();
        if n > max {
            return Err(AllocError::CapacityOverflow { requested: n, max });
        }
        let layout = Layout::array::<T>(n)?;
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { global::alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(block) => {
                trace!(
                    "allocated {} x {} ({} bytes) at {:p}",
                    n,
                    std::any::type_name::<T>(),
                    layout.size(),
                    block
                );
                Ok(block)
            }
            None => {
                warn!(
                    "allocation of {} bytes aligned to {} failed",
                    layout.size(),
                    layout.align()
                );
                Err(AllocError::OutOfMemory {
                    bytes: layout.size(),
                    align: layout.align(),
                })
            }
        }
    }

    unsafe fn deallocate(&self, block: NonNull<T>, n: usize) {
        let layout = match Layout::array::<T>(n) {
            Ok(layout) if layout.size() != 0 => layout,
            _ => return,
        };
        trace!("deallocating {} bytes at {:p}", layout.size(), block);
        global::dealloc(block.as_ptr().cast::<u8>(), layout);
    }

    fn max_size(&self) -> usize {
        isize::MAX as usize / size_of::<T>().max(1)
    }
}
