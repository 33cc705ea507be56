// sgdrust-core/src/matrix/mapped.rs

use crate::error::SgdRustError;
use crate::matrix::{ColumnMajorStorage, DenseMatrix};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const ELEM_SIZE: usize = std::mem::size_of::<f64>();

/// A read-only, file-backed column-major `f64` matrix.
///
/// The file holds `nrow * ncol` little-endian `f64` values, column after column,
/// with no header. Pages are loaded by the OS on demand, so the matrix may be
/// larger than available memory.
#[derive(Debug)]
pub struct MappedMatrix {
    mmap: Mmap,
    path: PathBuf,
    nrow: usize,
    ncol: usize,
}

impl MappedMatrix {
    /// Writes `dense` to `path` in the layout `open` expects.
    pub fn write<P: AsRef<Path>>(path: P, dense: &DenseMatrix) -> Result<(), SgdRustError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| SgdRustError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let (nrow, ncol) = (dense.nrows(), dense.ncols());
        let src = dense.as_slice();
        for j in 0..ncol {
            for i in 0..nrow {
                writer
                    .write_all(&src[i * ncol + j].to_le_bytes())
                    .map_err(|e| SgdRustError::io(path, e))?;
            }
        }
        writer.flush().map_err(|e| SgdRustError::io(path, e))?;
        log::debug!("Wrote {}x{} column-major matrix to {}", nrow, ncol, path.display());
        Ok(())
    }

    /// Maps the file at `path` as an `nrow x ncol` matrix.
    ///
    /// # Errors
    ///
    /// Returns `SgdRustError::Io` if the file cannot be opened or mapped, and
    /// `SgdRustError::DimensionMismatch` if its length is not `nrow * ncol * 8` bytes.
    pub fn open<P: AsRef<Path>>(path: P, nrow: usize, ncol: usize) -> Result<Self, SgdRustError> {
        let path = path.as_ref();
        let expected = nrow
            .checked_mul(ncol)
            .and_then(|n| n.checked_mul(ELEM_SIZE))
            .ok_or_else(|| {
                SgdRustError::InvalidArgument(format!("matrix shape {}x{} overflows usize", nrow, ncol))
            })?;
        let file = File::open(path).map_err(|e| SgdRustError::io(path, e))?;
        // Safety: the mapping is only read, and callers must not modify the file
        // while a MappedMatrix over it is alive.
        let mmap = unsafe { Mmap::map(&file).map_err(|e| SgdRustError::io(path, e))? };
        if mmap.len() != expected {
            return Err(SgdRustError::DimensionMismatch {
                expected,
                actual: mmap.len(),
                context: format!("MappedMatrix::open ({})", path.display()),
            });
        }
        log::debug!("Mapped {}x{} column-major matrix from {}", nrow, ncol, path.display());
        Ok(Self {
            mmap,
            path: path.to_path_buf(),
            nrow,
            ncol,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ColumnMajorStorage for MappedMatrix {
    type Element = f64;

    fn nrow(&self) -> usize {
        self.nrow
    }

    fn ncol(&self) -> usize {
        self.ncol
    }

    fn get(&self, col: usize, row: usize) -> Result<f64, SgdRustError> {
        if col >= self.ncol {
            return Err(SgdRustError::IndexOutOfRange { index: col, len: self.ncol });
        }
        if row >= self.nrow {
            return Err(SgdRustError::IndexOutOfRange { index: row, len: self.nrow });
        }
        let offset = (col * self.nrow + row) * ELEM_SIZE;
        let mut bytes = [0u8; ELEM_SIZE];
        bytes.copy_from_slice(&self.mmap[offset..offset + ELEM_SIZE]);
        Ok(f64::from_le_bytes(bytes))
    }
}
