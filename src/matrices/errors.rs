/*!
 * Error types
 */

use std::error::Error;
use std::fmt;

use crate::matrices::{Column, Row};

/**
 * A misuse of a matrix, one of its views or one of their iterators.
 *
 * Every variant is a programmer error detected at the point of misuse. These are never
 * returned from an operation, the operation panics with the violation's message instead.
 * See [contracts](crate::matrices::contracts).
 */
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ContractViolation {
    /**
     * A row or column index was requested that the matrix does not have.
     */
    LineOutOfRange {
        axis: &'static str,
        line: usize,
        lines: usize,
    },
    /**
     * An element was requested past the end of a row or column.
     */
    OffsetOutOfRange {
        axis: &'static str,
        line: usize,
        offset: usize,
        length: usize,
    },
    /**
     * An iterator already at its end position was advanced.
     */
    AdvancePastEnd {
        axis: &'static str,
        position: usize,
        end: usize,
    },
    /**
     * A (row, column) index was requested outside the matrix.
     */
    IndexOutOfRange {
        row: Row,
        column: Column,
        size: (Row, Column),
    },
    /**
     * A position in the matrix's storage past its last element.
     */
    StorageIndexOutOfRange {
        index: usize,
        length: usize,
    },
    /**
     * The number of elements for the requested dimensions does not fit in a `usize`.
     */
    DimensionsOverflow {
        rows: Row,
        columns: Column,
    },
}

impl Error for ContractViolation {}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractViolation::LineOutOfRange { axis, line, lines } => write!(
                f,
                "{} {} out of range, matrix has {} {}s",
                axis, line, lines, axis
            ),
            ContractViolation::OffsetOutOfRange { axis, line, offset, length } => write!(
                f,
                "offset {} out of range for {} {} of length {}",
                offset, axis, line, length
            ),
            ContractViolation::AdvancePastEnd { axis, position, end } => write!(
                f,
                "cannot advance {} iterator at position {} past its end {}",
                axis, position, end
            ),
            ContractViolation::IndexOutOfRange { row, column, size } => write!(
                f,
                "index ({}, {}) out of range for matrix of size {:?}",
                row, column, size
            ),
            ContractViolation::StorageIndexOutOfRange { index, length } => write!(
                f,
                "storage index {} out of range for {} elements",
                index, length
            ),
            ContractViolation::DimensionsOverflow { rows, columns } => write!(
                f,
                "a {}x{} matrix has more elements than can be addressed",
                rows, columns
            ),
        }
    }
}

#[test]
fn test_display_mentions_the_bad_index() {
    let violation = ContractViolation::OffsetOutOfRange {
        axis: "column",
        line: 2,
        offset: 3,
        length: 3,
    };
    assert_eq!(
        violation.to_string(),
        "offset 3 out of range for column 2 of length 3"
    );
    let violation = ContractViolation::LineOutOfRange { axis: "row", line: 4, lines: 4 };
    assert_eq!(violation.to_string(), "row 4 out of range, matrix has 4 rows");
}
