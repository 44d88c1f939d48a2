extern crate matrix_lines;

#[cfg(test)]
mod tests {
    use matrix_lines::matrices::Matrix;

    // the violation is logged before panicking, capture it in the test output
    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    #[should_panic(expected = "row 3 out of range, matrix has 3 rows")]
    fn row_collection_index_at_len() {
        init_logger();
        let matrix = Matrix::new(3, 4, 0);
        let rows = matrix.rows();
        rows.get(rows.len());
    }

    #[test]
    #[should_panic(expected = "column 4 out of range, matrix has 4 columns")]
    fn mutable_column_collection_index_at_len() {
        init_logger();
        let mut matrix = Matrix::new(3, 4, 0);
        let mut columns = matrix.columns_mut();
        let len = columns.len();
        columns.get_mut(len);
    }

    #[test]
    #[should_panic(expected = "offset 4 out of range for row 0 of length 4")]
    fn row_index_at_len() {
        init_logger();
        let matrix = Matrix::new(3, 4, 0);
        let row = matrix.row(0);
        let _ = &row[row.len()];
    }

    #[test]
    #[should_panic(expected = "offset 3 out of range for column 1 of length 3")]
    fn mutable_column_index_at_len() {
        init_logger();
        let mut matrix = Matrix::new(3, 4, 0);
        let mut column = matrix.column_mut(1);
        let len = column.len();
        column[len] = 1;
    }

    #[test]
    #[should_panic(expected = "offset 2 out of range for column 0 of length 2")]
    fn dereference_element_iterator_at_end() {
        init_logger();
        let matrix = Matrix::new(2, 2, 0);
        matrix.column(0).end().get();
    }

    #[test]
    #[should_panic(expected = "offset 2 out of range for row 1 of length 2")]
    fn dereference_mutable_element_iterator_at_end() {
        init_logger();
        let mut matrix = Matrix::new(2, 2, 0);
        let mut row = matrix.row_mut(1);
        let mut iterator = row.begin();
        iterator.advance();
        iterator.advance();
        *iterator.get_mut() = 1;
    }

    #[test]
    #[should_panic(expected = "cannot advance column iterator at position 3 past its end 3")]
    fn advance_element_iterator_at_end() {
        init_logger();
        let matrix = Matrix::new(3, 1, 0);
        let mut iterator = matrix.column(0).begin();
        for _ in 0..4 {
            iterator.advance();
        }
    }

    #[test]
    #[should_panic(expected = "row 2 out of range, matrix has 2 rows")]
    fn dereference_lines_iterator_at_end() {
        init_logger();
        let matrix = Matrix::new(2, 5, 0);
        let mut iterator = matrix.rows().begin();
        iterator.advance().advance();
        iterator.get();
    }

    #[test]
    #[should_panic(expected = "cannot advance row iterator at position 2 past its end 2")]
    fn advance_lines_iterator_at_end() {
        init_logger();
        let matrix = Matrix::new(2, 5, 0);
        matrix.rows().end().advance();
    }

    #[test]
    #[should_panic(expected = "cannot advance column iterator at position 1 past its end 1")]
    fn advance_mutable_lines_iterator_at_end() {
        init_logger();
        let mut matrix = Matrix::new(4, 1, 0);
        let mut columns = matrix.columns_mut();
        let mut iterator = columns.begin();
        iterator.advance();
        assert!(iterator.is_end());
        iterator.advance();
    }

    #[test]
    #[should_panic(expected = "column 1 out of range, matrix has 1 columns")]
    fn dereference_mutable_lines_iterator_at_end() {
        init_logger();
        let mut matrix = Matrix::new(4, 1, 0);
        let mut columns = matrix.columns_mut();
        let mut iterator = columns.begin();
        iterator.advance();
        iterator.get_mut();
    }

    #[test]
    #[should_panic(expected = "row 1 out of range, matrix has 1 rows")]
    fn matrix_row_index_out_of_range() {
        init_logger();
        let matrix = Matrix::new(1, 1, 0);
        let _ = &matrix[1];
    }

    #[test]
    #[should_panic(expected = "index (0, 2) out of range for matrix of size (2, 2)")]
    fn matrix_element_index_out_of_range() {
        init_logger();
        let mut matrix = Matrix::new(2, 2, 0);
        matrix.set(0, 2, 1);
    }

    #[test]
    #[should_panic(expected = "column 0 out of range, matrix has 0 columns")]
    fn empty_matrix_has_no_lines() {
        init_logger();
        let matrix: Matrix<u8> = Matrix::default();
        matrix.column(0);
    }

    #[test]
    fn non_asserting_lookups_return_none() {
        let mut matrix = Matrix::new(2, 3, 0);
        assert!(matrix.rows().try_get(2).is_none());
        assert!(matrix.columns_mut().try_get_mut(3).is_none());
        assert_eq!(None, matrix.row(1).try_get(3));
        assert_eq!(None, matrix.column_mut(2).try_get_mut(2));
        assert_eq!(None, matrix.row(0).end().next());
        assert_eq!(0, matrix.columns().end().len());
    }
}
