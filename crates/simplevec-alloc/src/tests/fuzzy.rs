// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::SimpleVec;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    PushBack(u16),
    PopBack,
    Insert(usize, u16),
    Erase(usize),
    Resize(usize),
    ReserveExact(usize),
    ExtendFromSlice(Vec<u16>),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::PushBack),
        2 => Just(Op::PopBack),
        3 => (any::<usize>(), any::<u16>()).prop_map(|(at, v)| Op::Insert(at, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0..64usize).prop_map(Op::Resize),
        1 => (0..64usize).prop_map(Op::ReserveExact),
        1 => prop::collection::vec(any::<u16>(), 0..8).prop_map(Op::ExtendFromSlice),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn matches_std_vec_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        let mut vec: SimpleVec<u16> = SimpleVec::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            let capacity_before = vec.capacity();

            match op {
                Op::PushBack(v) => {
                    vec.push_back(v).expect("Failed to push_back(v)");
                    model.push(v);
                }
                Op::PopBack => {
                    prop_assert_eq!(vec.pop_back(), model.pop());
                }
                Op::Insert(at, v) => {
                    let at = at % (model.len() + 1);
                    let returned = vec.insert(at, v).expect("Failed to insert(at, v)");
                    model.insert(at, v);
                    prop_assert_eq!(returned, at);
                }
                Op::Erase(at) => {
                    if !model.is_empty() {
                        let at = at % model.len();
                        let returned = vec.erase(at);
                        model.remove(at);
                        prop_assert_eq!(returned, at);
                    }
                }
                Op::Resize(n) => {
                    vec.resize(n).expect("Failed to resize(n)");
                    model.resize(n, 0);
                }
                Op::ReserveExact(n) => {
                    vec.reserve_exact(n).expect("Failed to reserve_exact(n)");
                    prop_assert_eq!(vec.capacity(), capacity_before.max(n));
                }
                Op::ExtendFromSlice(items) => {
                    vec.extend_from_slice(&items).expect("Failed to extend_from_slice(..)");
                    model.extend_from_slice(&items);
                }
                Op::Clear => {
                    vec.clear();
                    model.clear();
                }
            }

            prop_assert_eq!(vec.as_slice(), model.as_slice());
            prop_assert!(vec.len() <= vec.capacity());
            // Capacity never shrinks.
            prop_assert!(vec.capacity() >= capacity_before);
        }
    }

    #[test]
    fn push_back_doubles_capacity(pushes in 1..=300usize) {
        let mut vec: SimpleVec<usize> = SimpleVec::new();
        let mut relocations = 0usize;

        for i in 0..pushes {
            let before = vec.capacity();
            vec.push_back(i).expect("Failed to push_back(i)");

            if vec.capacity() != before {
                relocations += 1;
                prop_assert_eq!(vec.capacity(), (before * 2).max(1));
            }
        }

        // Capacities run 1, 2, 4, ... up to the first power of two >= pushes.
        let expected = (usize::BITS - (pushes - 1).leading_zeros()) as usize + 1;
        prop_assert_eq!(relocations, expected);
    }

    #[test]
    fn try_clone_is_deep_and_preserves_capacity(
        items in prop::collection::vec(any::<i32>(), 0..64),
        extra in 0..32usize
    ) {
        let mut source = SimpleVec::with_capacity(items.len() + extra)
            .expect("Failed to with_capacity(..)");
        source.extend_from_slice(&items).expect("Failed to extend_from_slice(..)");

        let mut copy = source.try_clone().expect("Failed to try_clone()");

        prop_assert_eq!(&copy, &source);
        prop_assert_eq!(copy.capacity(), source.capacity());

        for item in copy.iter_mut() {
            *item = item.wrapping_add(1);
        }
        prop_assert_eq!(source.as_slice(), items.as_slice());
    }

    #[test]
    fn ordering_matches_slices(
        a in prop::collection::vec(0..4u8, 0..6),
        b in prop::collection::vec(0..4u8, 0..6)
    ) {
        let va = SimpleVec::try_from_slice(&a).expect("Failed to try_from_slice(&a)");
        let vb = SimpleVec::try_from_slice(&b).expect("Failed to try_from_slice(&b)");

        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va == vb, a == b);
        prop_assert_eq!(va < vb, a < b);
        prop_assert_eq!(va >= vb, a >= b);
    }
}
