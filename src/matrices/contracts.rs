/*!
 * Bounds and position checks shared by the matrix, its views and their iterators.
 *
 * Every index or iterator position in this crate is checked at the point of use. A failed
 * check is a bug in the calling code, so there is no error value to handle: the violation is
 * logged at `error` level through the [`log`](https://docs.rs/log) facade and the calling
 * operation panics before it reads or writes any element.
 */

use crate::matrices::errors::ContractViolation;

/**
 * Panics with the violation produced by `violation` if `condition` is false, otherwise does
 * nothing. The violation is only constructed on failure.
 *
 * Never returns normally when `condition` is false.
 */
#[track_caller]
#[inline]
pub(crate) fn assert_invariant<F>(condition: bool, violation: F)
where
    F: FnOnce() -> ContractViolation,
{
    if !condition {
        fail(violation())
    }
}

#[track_caller]
#[cold]
#[inline(never)]
fn fail(violation: ContractViolation) -> ! {
    log::error!("contract violation: {}", violation);
    panic!("{}", violation)
}

#[test]
fn test_holding_invariant_does_not_build_violation() {
    assert_invariant(true, || unreachable!());
}

#[test]
#[should_panic(expected = "row 3 out of range, matrix has 2 rows")]
fn test_broken_invariant_panics_with_message() {
    assert_invariant(false, || ContractViolation::LineOutOfRange {
        axis: "row",
        line: 3,
        lines: 2,
    });
}
