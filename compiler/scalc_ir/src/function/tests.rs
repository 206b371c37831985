use super::SetFunction;
use crate::IntSet;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn set(values: &[i64]) -> IntSet {
    values.iter().copied().collect()
}

fn apply(function: SetFunction, operands: &[&[i64]]) -> IntSet {
    function.apply(operands.iter().map(|values| set(values)))
}

// === SUM ===

#[test]
fn sum_unions_all_operands() {
    assert_eq!(
        apply(SetFunction::Sum, &[&[1, 2], &[2, 3], &[3, 4]]),
        set(&[1, 2, 3, 4])
    );
}

#[test]
fn sum_with_empty_operand() {
    assert_eq!(apply(SetFunction::Sum, &[&[1, 2], &[]]), set(&[1, 2]));
}

// === INT ===

#[test]
fn int_intersects_all_operands() {
    assert_eq!(
        apply(SetFunction::Int, &[&[1, 2, 3], &[2, 3], &[3, 4, 5]]),
        set(&[3])
    );
}

#[test]
fn int_with_disjoint_operands_is_empty() {
    assert_eq!(apply(SetFunction::Int, &[&[1, 2], &[2, 3], &[3, 4]]), set(&[]));
    assert_eq!(apply(SetFunction::Int, &[&[1, 2], &[]]), set(&[]));
}

// === DIF ===

#[test]
fn dif_subtracts_left_to_right() {
    assert_eq!(
        apply(SetFunction::Dif, &[&[0, 1, 2, 3], &[2, 3], &[3, 4]]),
        set(&[0, 1])
    );
    assert_eq!(apply(SetFunction::Dif, &[&[1, 2, 3], &[1, 2], &[2, 3]]), set(&[]));
}

#[test]
fn dif_is_not_commutative() {
    assert_eq!(apply(SetFunction::Dif, &[&[1, 2], &[1]]), set(&[2]));
    assert_eq!(apply(SetFunction::Dif, &[&[1], &[1, 2]]), set(&[]));
}

#[test]
fn dif_with_empty_operand_keeps_first() {
    assert_eq!(apply(SetFunction::Dif, &[&[1, 2], &[]]), set(&[1, 2]));
}

// === Arity edge cases ===

#[test]
fn single_operand_is_returned_unchanged() {
    for function in SetFunction::ALL {
        assert_eq!(apply(function, &[&[1, 2]]), set(&[1, 2]), "{function}");
    }
}

#[test]
fn no_operands_yields_empty_set() {
    for function in SetFunction::ALL {
        assert_eq!(function.apply(Vec::new()), IntSet::default(), "{function}");
    }
}

#[test]
fn names_are_upper_case() {
    let names: Vec<&str> = SetFunction::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, ["SUM", "INT", "DIF"]);
}

fn arb_set() -> impl Strategy<Value = IntSet> {
    proptest::collection::hash_set(-20i64..20, 0..12).prop_map(|s| s.into_iter().collect::<IntSet>())
}

proptest! {
    #[test]
    fn sum_and_int_ignore_operand_order(a in arb_set(), b in arb_set(), c in arb_set()) {
        for function in [SetFunction::Sum, SetFunction::Int] {
            let forward = function.apply([a.clone(), b.clone(), c.clone()]);
            let backward = function.apply([c.clone(), b.clone(), a.clone()]);
            prop_assert_eq!(forward, backward);
        }
    }

    #[test]
    fn dif_result_is_subset_of_first(a in arb_set(), b in arb_set(), c in arb_set()) {
        let result = SetFunction::Dif.apply([a.clone(), b.clone(), c.clone()]);
        prop_assert!(result.is_subset(&a));
        prop_assert!(result.is_disjoint(&b));
        prop_assert!(result.is_disjoint(&c));
    }

    #[test]
    fn int_result_is_subset_of_every_operand(a in arb_set(), b in arb_set()) {
        let result = SetFunction::Int.apply([a.clone(), b.clone()]);
        prop_assert!(result.is_subset(&a));
        prop_assert!(result.is_subset(&b));
    }
}
