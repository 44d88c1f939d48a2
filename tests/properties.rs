extern crate matrix_lines;

#[cfg(test)]
mod tests {
    use lender::prelude::*;
    use matrix_lines::matrices::Matrix;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const SHAPES: usize = 40;

    fn random_matrix(random_generator: &mut ChaCha8Rng) -> Matrix<u32> {
        let rows = random_generator.random_range(0..7);
        let columns = random_generator.random_range(0..7);
        let mut matrix = Matrix::new(rows, columns, 0);
        for row in 0..rows {
            for column in 0..columns {
                matrix.set(row, column, random_generator.random_range(0..1000));
            }
        }
        matrix
    }

    #[test]
    fn element_at_row_and_column_is_same_location() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..SHAPES {
            let matrix = random_matrix(&mut random_generator);
            let (rows, columns) = matrix.size();
            for r in 0..rows {
                for c in 0..columns {
                    let through_row: *const u32 = &matrix[r][c];
                    let through_column = matrix.columns().get(c).iter().nth(r);
                    assert!(through_column.is_some());
                    if let Some(element) = through_column {
                        assert!(std::ptr::eq(through_row, element));
                    }
                }
            }
        }
    }

    #[test]
    fn write_through_row_read_through_column() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..SHAPES {
            let mut matrix = random_matrix(&mut random_generator);
            let (rows, columns) = matrix.size();
            if rows == 0 || columns == 0 {
                continue;
            }
            let r = random_generator.random_range(0..rows);
            let c = random_generator.random_range(0..columns);
            let value = random_generator.random_range(1000..2000);
            *matrix.row_mut(r).get_mut(c) = value;
            assert_eq!(&value, matrix.column(c).get(r));
            matrix.column_mut(c)[r] = value + 1;
            assert_eq!(value + 1, matrix.row(r)[c]);
        }
    }

    #[test]
    fn len_matches_drained_count() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..SHAPES {
            let mut matrix = random_matrix(&mut random_generator);
            let (rows, columns) = matrix.size();
            assert_eq!(rows, matrix.rows().iter().count());
            assert_eq!(columns, matrix.columns().iter().count());
            for row in matrix.rows() {
                assert_eq!(row.len(), row.iter().count());
                assert_eq!(columns, row.len());
            }
            for column in matrix.columns() {
                assert_eq!(column.len(), column.iter().count());
                assert_eq!(rows, column.len());
            }
            assert_eq!(columns, matrix.columns_mut().into_lender().count());
            let mut drained = 0;
            let mut lender = matrix.rows_mut().into_lender();
            while let Some(row) = lender.next() {
                drained += row.into_iter().count();
            }
            assert_eq!(rows * columns, drained);
        }
    }

    #[test]
    fn draining_twice_yields_same_sequence() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..SHAPES {
            let matrix = random_matrix(&mut random_generator);
            let columns = matrix.columns();
            let first: Vec<Vec<&u32>> = columns.iter().map(|c| c.iter().collect()).collect();
            let second: Vec<Vec<&u32>> = columns.iter().map(|c| c.iter().collect()).collect();
            assert_eq!(first.len(), second.len());
            for (a, b) in first.iter().flatten().zip(second.iter().flatten()) {
                assert!(std::ptr::eq(*a, *b));
            }
        }
    }

    #[test]
    fn columns_are_the_transpose_of_rows() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(14);
        for _ in 0..SHAPES {
            let matrix = random_matrix(&mut random_generator);
            let rows: Vec<Vec<u32>> = matrix
                .rows()
                .into_iter()
                .map(|row| row.into_iter().copied().collect())
                .collect();
            for column in matrix.columns() {
                let expected: Vec<u32> = rows.iter().map(|row| row[column.line()]).collect();
                assert_eq!(expected, column.into_iter().copied().collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn clones_are_independent() {
        let mut random_generator = ChaCha8Rng::seed_from_u64(15);
        for _ in 0..SHAPES {
            let original = random_matrix(&mut random_generator);
            let mut copy = original.clone();
            assert_eq!(original, copy);
            let mut columns = copy.columns_mut().into_lender();
            while let Some(column) = columns.next() {
                for element in column {
                    *element += 1;
                }
            }
            if !original.is_empty() {
                assert_ne!(original, copy);
            }
        }
    }
}
