// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SimpleVec, simple_vec};

#[test]
fn test_simple_vec_list() {
    let vec = simple_vec![1, 2, 3].expect("Failed to simple_vec![..]");

    assert_eq!(vec.as_slice(), &[1, 2, 3]);
    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_simple_vec_trailing_comma() {
    let vec = simple_vec!["a", "b",].expect("Failed to simple_vec![..]");

    assert_eq!(vec.as_slice(), &["a", "b"]);
}

#[test]
fn test_simple_vec_repeat() {
    let vec = simple_vec![String::from("x"); 3].expect("Failed to simple_vec![..; 3]");

    assert_eq!(vec.len(), 3);
    assert_eq!(vec.capacity(), 3);
    assert!(vec.iter().all(|s| s == "x"));
}

#[test]
fn test_simple_vec_repeat_zero() {
    let vec = simple_vec![7u8; 0].expect("Failed to simple_vec![..; 0]");

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}

#[test]
fn test_simple_vec_empty() {
    let vec: SimpleVec<u8> = simple_vec![].expect("Failed to simple_vec![]");

    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 0);
}
