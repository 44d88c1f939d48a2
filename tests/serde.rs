#![cfg(feature = "serde")]

extern crate matrix_lines;

#[cfg(test)]
mod tests {
    use matrix_lines::matrices::Matrix;

    #[test]
    fn matrix_serializes_dimensions_and_row_major_data() {
        let mut matrix = Matrix::new(2, 3, 0);
        matrix[0][2] = 7;
        matrix[1][0] = 4;
        let serialized = toml::to_string(&matrix).unwrap();
        println!("{}", serialized);
        let value: toml::Value = toml::from_str(&serialized).unwrap();
        assert_eq!(Some(2), value.get("rows").and_then(|v| v.as_integer()));
        assert_eq!(Some(3), value.get("columns").and_then(|v| v.as_integer()));
        let data: Vec<i64> = value
            .get("data")
            .and_then(|v| v.as_array())
            .unwrap()
            .iter()
            .filter_map(|v| v.as_integer())
            .collect();
        assert_eq!(vec![0, 0, 7, 4, 0, 0], data);
    }
}
