// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Creates a [`SimpleVec`](crate::SimpleVec) from a literal list of elements.
///
/// Mirrors `vec!`, but allocation is fallible, so the macro evaluates to
/// `Result<SimpleVec<T>, SimpleVecError>`.
///
/// - `simple_vec![]` creates an empty vector without allocating.
/// - `simple_vec![a, b, c]` moves the elements in order; `capacity() == 3`.
/// - `simple_vec![value; n]` clones `value` `n` times.
///
/// # Example
///
/// ```rust
/// use simplevec_alloc::{simple_vec, SimpleVec, SimpleVecError};
///
/// fn example() -> Result<(), SimpleVecError> {
///     let listed = simple_vec![1u8, 2, 3]?;
///     assert_eq!(listed.as_slice(), &[1, 2, 3]);
///     assert_eq!(listed.capacity(), 3);
///
///     let repeated = simple_vec!['x'; 2]?;
///     assert_eq!(repeated.as_slice(), &['x', 'x']);
///
///     let empty: SimpleVec<u8> = simple_vec![]?;
///     assert!(empty.is_empty());
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        ::core::result::Result::<_, $crate::SimpleVecError>::Ok($crate::SimpleVec::new())
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        <$crate::SimpleVec<_> as ::core::convert::TryFrom<_>>::try_from([$($x),+])
    };
}
