#[cfg(test)]
mod tests {
    use std::fs::{write, remove_file};
    use std::path::PathBuf;
    use neuron_astrocyte_analysis::error::NpyError;
    use neuron_astrocyte_analysis::npy::{read_npy, write_npy};


    fn temp_path(file_name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("neuron_astrocyte_analysis_{}", file_name))
    }

    fn handcrafted_npy(descr: &str, shape: &str, data: &[u8]) -> Vec<u8> {
        let mut header = format!(
            "{{'descr': '{}', 'fortran_order': False, 'shape': {}, }}",
            descr, shape
        );
        let unpadded = 10 + header.len() + 1;
        header.push_str(&" ".repeat((64 - unpadded % 64) % 64));
        header.push('\n');

        let mut buffer = b"\x93NUMPY".to_vec();
        buffer.extend([1, 0]);
        buffer.extend((header.len() as u16).to_le_bytes());
        buffer.extend(header.as_bytes());
        buffer.extend(data);

        buffer
    }

    #[test]
    fn test_written_arrays_read_back() {
        let path = temp_path("roundtrip.npy");
        let data = vec![1.5, -2.25, 3., 0.];

        write_npy(&path, &data).unwrap();
        let array = read_npy(&path).unwrap();
        remove_file(&path).unwrap();

        assert_eq!(array.shape, vec![4]);
        assert_eq!(array.into_vec(), data);
    }

    #[test]
    fn test_single_element_array_as_scalar() {
        let path = temp_path("scalar.npy");

        write_npy(&path, &vec![12.]).unwrap();
        let array = read_npy(&path).unwrap();
        remove_file(&path).unwrap();

        assert_eq!(array.scalar().unwrap(), 12.);
    }

    #[test]
    fn test_integer_arrays_convert_to_floats() {
        let path = temp_path("integers.npy");

        let mut data = Vec::new();
        data.extend(7_i32.to_le_bytes());
        data.extend((-3_i32).to_le_bytes());
        write(&path, handcrafted_npy("<i4", "(2,)", &data)).unwrap();

        let array = read_npy(&path).unwrap();
        remove_file(&path).unwrap();

        assert_eq!(array.into_vec(), vec![7., -3.]);
    }

    #[test]
    fn test_two_dimensional_monitor_arrays() {
        let path = temp_path("matrix.npy");

        let mut data = Vec::new();
        for value in [1., 2., 3., 4., 5., 6.] {
            data.extend(f64::to_le_bytes(value));
        }
        write(&path, handcrafted_npy("<f8", "(2, 3)", &data)).unwrap();

        let array = read_npy(&path).unwrap();
        remove_file(&path).unwrap();

        assert_eq!(array.shape, vec![2, 3]);

        let matrix = array.to_array2().unwrap();
        assert_eq!(matrix[[1, 2]], 6.);

        assert!(matches!(array.to_array1(), Err(NpyError::DimensionMismatch)));
    }

    #[test]
    fn test_index_conversion() {
        let path = temp_path("indices.npy");

        write_npy(&path, &vec![3., 0., 2.]).unwrap();
        let array = read_npy(&path).unwrap();
        remove_file(&path).unwrap();

        assert_eq!(array.to_indices(), vec![3, 0, 2]);
    }

    #[test]
    fn test_bad_magic_is_rejected() {
        let path = temp_path("not_npy.npy");

        write(&path, b"PLAINTEXT").unwrap();
        let result = read_npy(&path);
        remove_file(&path).unwrap();

        assert!(matches!(result, Err(NpyError::InvalidMagic)));
    }

    #[test]
    fn test_unsupported_dtype_is_rejected() {
        let path = temp_path("complex.npy");

        write(&path, handcrafted_npy("<c16", "(0,)", &[])).unwrap();
        let result = read_npy(&path);
        remove_file(&path).unwrap();

        assert!(matches!(result, Err(NpyError::UnsupportedDtype(_))));
    }

    #[test]
    fn test_truncated_data_is_rejected() {
        let path = temp_path("truncated.npy");

        write(&path, handcrafted_npy("<f8", "(4,)", &[0; 8])).unwrap();
        let result = read_npy(&path);
        remove_file(&path).unwrap();

        assert!(matches!(result, Err(NpyError::TruncatedData)));
    }
}
