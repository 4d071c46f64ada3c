#[cfg(feature = "core")]
#[doc(inline)]
pub use gccorrect_core as core;

#[cfg(feature = "bias")]
#[doc(inline)]
pub use gccorrect_bias as bias;
