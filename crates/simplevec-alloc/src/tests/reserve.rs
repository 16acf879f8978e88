// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ReserveProxy, SimpleVec, reserve};

#[test]
fn test_reserve_carries_capacity() {
    assert_eq!(reserve(7).capacity(), 7);
    assert_eq!(ReserveProxy::from(7), reserve(7));
    assert_eq!(ReserveProxy::default().capacity(), 0);
}

#[test]
fn test_try_from_reserve_pre_allocates() {
    let vec = SimpleVec::<u64>::try_from(reserve(5)).expect("Failed to try_from(reserve(5))");

    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 5);
}

#[test]
fn test_try_from_reserve_zero_does_not_allocate() {
    let vec = SimpleVec::<u64>::try_from(reserve(0)).expect("Failed to try_from(reserve(0))");

    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_reserved_capacity_absorbs_pushes() {
    let mut vec = SimpleVec::try_from(reserve(3)).expect("Failed to try_from(reserve(3))");

    vec.push_back(1u8).expect("Failed to push_back(1)");
    vec.push_back(2u8).expect("Failed to push_back(2)");
    vec.push_back(3u8).expect("Failed to push_back(3)");
    assert_eq!(vec.capacity(), 3);

    vec.push_back(4u8).expect("Failed to push_back(4)");
    assert_eq!(vec.capacity(), 6);
}
