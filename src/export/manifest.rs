//! Selection manifest writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// Write the selected block indices as a one-column table, one index per row,
/// in selection order.
pub fn write_manifest(path: &Path, indices: &[usize]) -> Result<()> {
    let write_err = |e| Error::WriteError {
        path: path.to_path_buf(),
        source: e,
    };
    let mut file = File::create(path).map_err(write_err)?;

    writeln!(file, "block_number").map_err(write_err)?;
    for index in indices {
        writeln!(file, "{}", index).map_err(write_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_indices_in_selection_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("selected.csv");
        write_manifest(&path, &[5, 2, 9]).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "block_number\n5\n2\n9\n");
    }
}
