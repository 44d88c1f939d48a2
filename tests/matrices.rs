extern crate matrix_lines;

#[cfg(test)]
mod tests {
    use matrix_lines::matrices::Matrix;

    #[test]
    fn check_dimensionality() {
        let matrix = Matrix::new(3, 4, 0);
        println!("{:?}", matrix);
        assert_eq!((3, 4), matrix.size());
        assert_eq!(3, matrix.row_count());
        assert_eq!(4, matrix.column_count());
        assert_eq!(3, matrix.rows().len());
        assert_eq!(4, matrix.columns().len());
        assert_eq!(4, matrix.row(0).len());
        assert_eq!(3, matrix.column(0).len());
    }

    #[test]
    fn check_default_is_empty() {
        let matrix: Matrix<String> = Matrix::default();
        assert_eq!((0, 0), matrix.size());
        assert!(matrix.is_empty());
        assert!(matrix.rows().is_empty());
        assert!(matrix.columns().is_empty());
        assert_eq!(matrix.rows().iter().count(), 0);
    }

    #[test]
    fn check_copy_independence() {
        let original = Matrix::new(2, 2, 1);
        let mut copy = original.clone();
        copy[0][0] = 9;
        assert_eq!(9, copy.get(0, 0));
        for row in original.rows() {
            assert!(row.into_iter().all(|&x| x == 1));
        }
        assert_ne!(original, copy);
    }

    #[test]
    fn check_move_leaves_valid_matrix() {
        let mut matrix = Matrix::new(2, 3, 'x');
        let taken = std::mem::take(&mut matrix);
        assert_eq!((2, 3), taken.size());
        assert_eq!((0, 0), matrix.size());
        assert_eq!(0, matrix.rows().len());
    }

    #[test]
    fn check_element_access() {
        let mut matrix = Matrix::new(2, 3, 0);
        matrix.set(1, 2, 5);
        *matrix.get_reference_mut(0, 1) = 3;
        matrix[(1, 0)] = 4;
        assert_eq!(5, matrix.get(1, 2));
        assert_eq!(&3, matrix.get_reference(0, 1));
        assert_eq!(4, matrix[1][0]);
        assert_eq!(Some(&5), matrix.try_get_reference(1, 2));
        assert_eq!(None, matrix.try_get_reference(2, 0));
        assert_eq!(None, matrix.try_get_reference_mut(0, 3));
        assert_eq!(&[4, 0, 5], &matrix[1]);
    }

    #[test]
    fn check_equality_includes_size() {
        // same buffer, different shapes
        let wide = Matrix::new(1, 4, 0);
        let tall = Matrix::new(4, 1, 0);
        assert_ne!(wide, tall);
        assert_eq!(wide, Matrix::new(1, 4, 0));
    }

    #[test]
    fn check_display() {
        let mut matrix = Matrix::new(2, 3, 0.0);
        matrix[0][1] = 1.5;
        matrix[1][2] = -2.26;
        assert_eq!("[ 0, 1.5, 0\n  0, 0, -2.26 ]", matrix.to_string());
        assert_eq!(
            "[ 0.0, 1.5, 0.0\n  0.0, 0.0, -2.3 ]",
            format!("{:.1}", matrix)
        );
    }

    #[test]
    fn check_non_copy_elements() {
        let mut matrix = Matrix::new(2, 2, String::from("a"));
        matrix.row_mut(1)[0].push('b');
        matrix.column_mut(1).get_mut(0).push('c');
        let rows: Vec<Vec<&str>> = matrix
            .rows()
            .into_iter()
            .map(|row| row.into_iter().map(|s| s.as_str()).collect())
            .collect();
        assert_eq!(vec![vec!["a", "ac"], vec!["ab", "a"]], rows);
    }
}
