//! Property tests: any sequence of lifecycle operations returns the count to zero

use namedvector::{CounterGuard, LiveCounter, Name, NamedVector, NamedVectorValue};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    ConstructName(String),
    CloneName(usize),
    AssignName(usize, usize),
    DropName(usize),
    WrapName(usize),
    CloneVector(usize),
    AssignVector(usize, usize),
    TakeVector(usize),
    MoveAssignVector(usize, usize),
    WrapValue(usize),
    AssignValue(usize, usize),
    TakeValue(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z]{0,8}".prop_map(Op::ConstructName),
        any::<usize>().prop_map(Op::CloneName),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::AssignName(a, b)),
        any::<usize>().prop_map(Op::DropName),
        any::<usize>().prop_map(Op::WrapName),
        any::<usize>().prop_map(Op::CloneVector),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::AssignVector(a, b)),
        any::<usize>().prop_map(Op::TakeVector),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::MoveAssignVector(a, b)),
        any::<usize>().prop_map(Op::WrapValue),
        (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Op::AssignValue(a, b)),
        any::<usize>().prop_map(Op::TakeValue),
    ]
}

/// Mutable borrows of two distinct slots, or `None` if they coincide.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b {
        return None;
    }
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = items.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}

#[derive(Default)]
struct World {
    names: Vec<Name>,
    vectors: Vec<NamedVector>,
    values: Vec<NamedVectorValue>,
}

impl World {
    fn live_names(&self) -> isize {
        let owned = self.vectors.iter().filter(|nv| !nv.is_empty()).count();
        (self.names.len() + owned + self.values.len()) as isize
    }

    fn apply(&mut self, op: Op, counter: &LiveCounter) {
        match op {
            Op::ConstructName(payload) => self.names.push(Name::new_in(payload, counter)),
            Op::CloneName(i) if !self.names.is_empty() => {
                let copy = self.names[i % self.names.len()].clone();
                self.names.push(copy);
            }
            Op::AssignName(a, b) if !self.names.is_empty() => {
                let len = self.names.len();
                if let Some((target, source)) = pair_mut(&mut self.names, a % len, b % len) {
                    target.clone_from(source);
                }
            }
            Op::DropName(i) if !self.names.is_empty() => {
                let len = self.names.len();
                self.names.swap_remove(i % len);
            }
            Op::WrapName(i) if !self.names.is_empty() => {
                let name = &self.names[i % self.names.len()];
                self.vectors.push(NamedVector::new(name, 1.0, 2.0));
            }
            Op::CloneVector(i) if !self.vectors.is_empty() => {
                let copy = self.vectors[i % self.vectors.len()].clone();
                self.vectors.push(copy);
            }
            Op::AssignVector(a, b) if !self.vectors.is_empty() => {
                let len = self.vectors.len();
                if let Some((target, source)) = pair_mut(&mut self.vectors, a % len, b % len) {
                    target.clone_from(source);
                }
            }
            Op::TakeVector(i) if !self.vectors.is_empty() => {
                let len = self.vectors.len();
                let moved = self.vectors[i % len].take();
                self.vectors.push(moved);
            }
            Op::MoveAssignVector(a, b) if !self.vectors.is_empty() => {
                let len = self.vectors.len();
                if let Some((target, source)) = pair_mut(&mut self.vectors, a % len, b % len) {
                    target.move_assign(source);
                }
            }
            Op::WrapValue(i) if !self.names.is_empty() => {
                let name = &self.names[i % self.names.len()];
                self.values.push(NamedVectorValue::new(name, 3.0, 4.0));
            }
            Op::AssignValue(a, b) if !self.values.is_empty() => {
                let len = self.values.len();
                if let Some((target, source)) = pair_mut(&mut self.values, a % len, b % len) {
                    target.clone_from(source);
                }
            }
            Op::TakeValue(i) if !self.values.is_empty() => {
                let len = self.values.len();
                let moved = self.values[i % len].take();
                self.values.push(moved);
            }
            _ => {}
        }
    }
}

proptest! {
    #[test]
    fn prop_count_returns_to_zero(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let counter = LiveCounter::new();
        let guard = CounterGuard::with_strict(counter.clone(), false);
        {
            let mut world = World::default();
            for op in ops {
                world.apply(op, &counter);
            }
        }
        prop_assert_eq!(guard.live(), 0);
        prop_assert!(guard.finish().is_ok());
    }

    #[test]
    fn prop_live_count_matches_owned_names(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let counter = LiveCounter::new();
        let _guard = CounterGuard::with_strict(counter.clone(), false);
        let mut world = World::default();
        for op in ops {
            world.apply(op, &counter);
            prop_assert_eq!(counter.live(), world.live_names());
        }
    }

    #[test]
    fn prop_clone_has_equal_payload_distinct_identity(payload in ".{0,16}") {
        let counter = LiveCounter::new();
        let name = Name::new_in(payload.clone(), &counter);
        let nv = NamedVector::new(&name, 0.0, 0.0);
        let copy = nv.clone();

        prop_assert_ne!(nv.name_ptr(), copy.name_ptr());
        prop_assert_eq!(copy.name().map(Name::as_str), Some(payload.as_str()));
        prop_assert_eq!(counter.live(), 3);
    }
}
