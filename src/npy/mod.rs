//! A set of tools to read and write the NumPy `.npy` arrays produced by
//! simulation monitors.

use std::fs::{read, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::result::Result;
use ndarray::{Array1, Array2};
use crate::error::NpyError;


const MAGIC: &[u8] = b"\x93NUMPY";

/// An array loaded from a `.npy` file with every element converted to `f64`,
/// `data` is stored flat in row major order
pub struct NpyArray {
    pub shape: Vec<usize>,
    pub data: Vec<f64>,
}

impl NpyArray {
    /// Consumes the array into its flat data
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Value of a zero dimensional or single element array
    pub fn scalar(&self) -> Result<f64, NpyError> {
        if self.data.len() != 1 {
            return Err(NpyError::DimensionMismatch);
        }

        Ok(self.data[0])
    }

    /// One dimensional view of the array
    pub fn to_array1(&self) -> Result<Array1<f64>, NpyError> {
        if self.shape.len() > 1 {
            return Err(NpyError::DimensionMismatch);
        }

        Ok(Array1::from(self.data.clone()))
    }

    /// Two dimensional view of the array
    pub fn to_array2(&self) -> Result<Array2<f64>, NpyError> {
        if self.shape.len() != 2 {
            return Err(NpyError::DimensionMismatch);
        }

        Array2::from_shape_vec((self.shape[0], self.shape[1]), self.data.clone())
            .map_err(|_| NpyError::TruncatedData)
    }

    /// Flat data converted to indices, used for the neuron index arrays
    /// written by spike monitors
    pub fn to_indices(&self) -> Vec<usize> {
        self.data.iter()
            .map(|i| *i as usize)
            .collect()
    }
}

fn header_field<'a>(header: &'a str, key: &str) -> Result<&'a str, NpyError> {
    let position = header.find(key)
        .ok_or_else(|| NpyError::MalformedHeader(String::from(header)))?;

    Ok(&header[position + key.len()..])
}

fn parse_descr(header: &str) -> Result<(String, usize), NpyError> {
    let rest = header_field(header, "'descr':")?;

    let start = rest.find('\'')
        .ok_or_else(|| NpyError::MalformedHeader(String::from(header)))?;
    let end = rest[start + 1..].find('\'')
        .ok_or_else(|| NpyError::MalformedHeader(String::from(header)))?;

    let descr = &rest[start + 1..start + 1 + end];

    match descr {
        "<f8" | "<i8" | "<u8" => Ok((String::from(descr), 8)),
        "<f4" | "<i4" | "<u4" => Ok((String::from(descr), 4)),
        _ => Err(NpyError::UnsupportedDtype(String::from(descr))),
    }
}

fn parse_shape(header: &str) -> Result<Vec<usize>, NpyError> {
    let rest = header_field(header, "'shape':")?;

    let start = rest.find('(')
        .ok_or_else(|| NpyError::MalformedHeader(String::from(header)))?;
    let end = rest.find(')')
        .ok_or_else(|| NpyError::MalformedHeader(String::from(header)))?;

    rest[start + 1..end].split(',')
        .map(|dim| dim.trim())
        .filter(|dim| !dim.is_empty())
        .map(|dim| {
            dim.parse::<usize>()
                .map_err(|_| NpyError::MalformedHeader(String::from(header)))
        })
        .collect()
}

fn convert(bytes: &[u8], descr: &str) -> f64 {
    match descr {
        "<f8" => f64::from_le_bytes(bytes.try_into().unwrap()),
        "<f4" => f32::from_le_bytes(bytes.try_into().unwrap()) as f64,
        "<i8" => i64::from_le_bytes(bytes.try_into().unwrap()) as f64,
        "<i4" => i32::from_le_bytes(bytes.try_into().unwrap()) as f64,
        "<u8" => u64::from_le_bytes(bytes.try_into().unwrap()) as f64,
        _ => u32::from_le_bytes(bytes.try_into().unwrap()) as f64,
    }
}

/// Reads a `.npy` file and converts its contents to a flat `f64` array,
/// supports little endian float and integer dtypes in the 1.0 and 2.0
/// header formats, C ordered
pub fn read_npy<P: AsRef<Path>>(path: P) -> Result<NpyArray, NpyError> {
    let buffer = read(path)?;

    if buffer.len() < MAGIC.len() + 4 || &buffer[..MAGIC.len()] != MAGIC {
        return Err(NpyError::InvalidMagic);
    }

    let major = buffer[6];
    let minor = buffer[7];

    let (header_len, header_start) = match major {
        1 => (u16::from_le_bytes([buffer[8], buffer[9]]) as usize, 10),
        2 => {
            if buffer.len() < 12 {
                return Err(NpyError::UnsupportedVersion(major, minor));
            }

            (u32::from_le_bytes([buffer[8], buffer[9], buffer[10], buffer[11]]) as usize, 12)
        },
        _ => return Err(NpyError::UnsupportedVersion(major, minor)),
    };

    if buffer.len() < header_start + header_len {
        return Err(NpyError::TruncatedData);
    }

    let header = std::str::from_utf8(&buffer[header_start..header_start + header_len])
        .map_err(|_| NpyError::MalformedHeader(String::from("non utf8 header")))?;

    let (descr, item_size) = parse_descr(header)?;
    let shape = parse_shape(header)?;

    // ordering only matters past one dimension
    if header.contains("'fortran_order': True") && shape.len() > 1 {
        return Err(NpyError::FortranOrder);
    }

    let total: usize = shape.iter().product();

    let data_segment = &buffer[header_start + header_len..];
    if data_segment.len() < total * item_size {
        return Err(NpyError::TruncatedData);
    }

    let data = (0..total)
        .map(|i| convert(&data_segment[i * item_size..(i + 1) * item_size], &descr))
        .collect();

    Ok(NpyArray { shape, data })
}

/// Writes a one dimensional `f64` array as a version 1.0 `.npy` file
pub fn write_npy<P: AsRef<Path>>(path: P, data: &Vec<f64>) -> Result<(), NpyError> {
    let mut header = format!(
        "{{'descr': '<f8', 'fortran_order': False, 'shape': ({},), }}",
        data.len()
    );

    // total header size including magic and length bytes padded to 64
    let unpadded = MAGIC.len() + 4 + header.len() + 1;
    let padding = (64 - unpadded % 64) % 64;
    header.push_str(&" ".repeat(padding));
    header.push('\n');

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(MAGIC)?;
    writer.write_all(&[1, 0])?;
    writer.write_all(&(header.len() as u16).to_le_bytes())?;
    writer.write_all(header.as_bytes())?;

    for value in data.iter() {
        writer.write_all(&value.to_le_bytes())?;
    }

    writer.flush()?;

    Ok(())
}
