//! `grow_vec`: a heap-allocated growable vector for Rust
//!
//! Provides [`GrowVec`], a contiguous, resizable buffer with explicit and fallible
//! capacity management. Every operation that may allocate returns a [`Result`] instead
//! of aborting, and a failed allocation never changes the vector.
//!
//! Growth is governed by a [`GrowthPolicy`]: single pushes grow by 1.5x and bulk
//! insertions by 1.25x under [`DefaultGrowth`].
#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::multiple_unsafe_ops_per_block)]
#![deny(clippy::semicolon_if_nothing_returned)]
#![deny(clippy::std_instead_of_core)]
#![deny(clippy::std_instead_of_alloc)]
#![deny(clippy::missing_inline_in_public_items)]
#![deny(clippy::return_self_not_must_use)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Internal module that are not meant for users to use.
mod internal {
    /// Helper macro for creating an empty vector that holds no allocation.
    macro_rules! empty_collection {
        () => {
            Self {
                buf: RawBuf::new(),
                len: 0,
                _policy: PhantomData,
            }
        };
    }

    /// Emits a `tracing` event when the `tracing` feature is enabled, and evaluates to
    /// nothing observable otherwise.
    macro_rules! log_event {
        ($level:ident, $message:literal, $($field:ident = $value:expr),+ $(,)?) => {{
            #[cfg(feature = "tracing")]
            tracing::$level!($($field = $value),+, $message);
            #[cfg(not(feature = "tracing"))]
            {
                $( let _ = &$value; )+
            }
        }};
    }

    /// Helper macro to define unchecked, normal, and try variants of a method.
    ///
    /// Each undefined behaviour condition carries the panic message used by the normal
    /// variant and the [`VecError`](crate::VecError) returned by the try variant.
    macro_rules! define_variants {
    (
        $(#[$meta:meta])*
        fn $name:ident($self:ident : $self_ty:ty $(, $param:ident: $param_ty:ty)*) -> $ret:ty,
        $(where_clause: { $($where_clause:tt)* } )?

        normal_brief: $normal_brief:literal,
        try_brief: $try_brief:literal,
        unchecked_brief_suffix: $unchecked_brief_suffix:literal,
        ub_conditions: {
            $($ub_condition:expr => $error:literal => $kind:expr),+ $(,)?
        },
        unchecked_fn: $unchecked_fn:ident,
        try_fn: $try_fn:ident,
        body:  $body:tt,
        $(examples: {
            normal: { $($ex_normal:tt)* }
            try: { $($ex_try:tt)* }
        })?
    ) => {
        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ", ", $unchecked_brief_suffix, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the safe version and [`Self::", stringify!($try_fn), "`] for the [`Result`] returning version.")]
        ///
        /// # Safety
        ///
        /// Calling this function when any of the following conditions are **`true`** is **undefined behavior**:
        $( #[doc = concat!(" - `", stringify!($ub_condition), "`")] )+
        #[inline]
        pub unsafe fn $unchecked_fn($self: $self_ty $(, $param: $param_ty)*) -> $ret
        $(where $($where_clause)*)?
        {
            $( debug_assert!(!($ub_condition), $error); )+
            $body
        }

        $(#[$meta])*
        #[doc = concat!(" ", $normal_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($unchecked_fn), "`] for the unchecked version and [`Self::", stringify!($try_fn), "`] for the [`Result`] returning version.")]
        ///
        /// # Panics
        ///
        $( #[doc = concat!(" - \"", $error, "\" if `", stringify!($ub_condition), "`")] )+
        $(
            ///
            /// # Examples
            ///
            $($ex_normal)*
        )?
        #[inline]
        pub fn $name($self: $self_ty $(, $param: $param_ty)*) -> $ret
        $(where $($where_clause)*)?
        {
            $( assert!(!($ub_condition), $error); )+
            // SAFETY: passed all undefined behaviour conditions above
            unsafe { $self.$unchecked_fn($($param),*) }
        }

        $(#[$meta])*
        #[doc = concat!(" ", $try_brief, ".")]
        ///
        #[doc = concat!(" See also [`Self::", stringify!($name), "`] for the panic-on-error version and [`Self::", stringify!($unchecked_fn), "`] for the unchecked version.")]
        ///
        /// # Errors
        ///
        /// Returns an error, without modifying the vector, if any of these conditions are **`true`**:
        $( #[doc = concat!(" - `", stringify!($ub_condition), "`")] )+
        $(
            ///
            /// # Examples
            ///
            $($ex_try)*
        )?
        #[inline]
        pub fn $try_fn($self: $self_ty $(, $param: $param_ty)*) -> Result<$ret, $crate::VecError>
        $(where $($where_clause)*)?
        {
            $( if $ub_condition { return Err($kind); } )+
            // SAFETY: passed all undefined behaviour conditions above
            let result = unsafe { $self.$unchecked_fn($($param),*) };
            Ok(result)
        }
    };
}

    pub(crate) use define_variants;
    pub(crate) use empty_collection;
    pub(crate) use log_event;
}

/// Three-way comparators for use with [`GrowVec::sort_with`].
pub mod compare;

/// Error type shared by all fallible vector operations.
pub mod error;

/// Capacity growth policies.
pub mod growth;

/// A heap-allocated vector with explicit, fallible growth.
pub mod grow_vec;

mod raw_buf;

pub use crate::error::VecError;
pub use crate::grow_vec::GrowVec;
pub use crate::growth::{DefaultGrowth, ExactGrowth, GrowthPolicy};
