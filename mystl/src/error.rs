use std::{alloc::LayoutError, error::Error};

use thiserror::Error;

/// The error returned by fallible element-wise construction, such as
/// [`Tuple::try_construct`](crate::Tuple::try_construct).
///
/// Construction stops at the first element that fails. The elements already built are dropped
/// and the remaining arguments are never touched.
#[derive(Debug, Error)]
#[error("failed to construct element {index}")]
pub struct ElementError {
    /// The position of the element that could not be constructed.
    pub index: usize,
    /// Why the conversion of that element failed.
    #[source]
    pub source: Box<dyn Error + Send + Sync>,
}

impl ElementError {
    pub(crate) fn new(index: usize, source: Box<dyn Error + Send + Sync>) -> Self {
        ElementError { index, source }
    }
}

/// The error returned when an [`Allocator`](crate::alloc::Allocator) cannot provide a block.
#[derive(Debug, Error)]
pub enum AllocError {
    /// More elements were requested than could ever fit in the address space.
    #[error("requested capacity {requested} exceeds the maximum of {max}")]
    CapacityOverflow {
        /// The number of elements asked for.
        requested: usize,
        /// The value of `max_size()` for the element type.
        max: usize,
    },
    /// The element count and type do not describe a valid memory layout.
    #[error("invalid layout: {0}")]
    Layout(#[from] LayoutError),
    /// The global allocator reported exhaustion.
    #[error("out of memory allocating {bytes} bytes aligned to {align}")]
    OutOfMemory {
        /// The size of the failed request.
        bytes: usize,
        /// The alignment of the failed request.
        align: usize,
    },
}
