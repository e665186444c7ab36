//! CSV export of generated datasets

use crate::io::error::{GenerationError, Result};
use crate::series::Dataset;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column arrangement of an exported dataset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CsvLayout {
    /// One row per X sample, one column per layer
    #[default]
    Wide,
    /// One row per (layer, sample) pair with `layer,x,y` columns
    Long,
}

/// Write a dataset as CSV to any writer
///
/// # Errors
///
/// Propagates any error from the underlying writer
pub fn write_csv<W: Write>(dataset: &Dataset, layout: CsvLayout, writer: &mut W) -> std::io::Result<()> {
    match layout {
        CsvLayout::Wide => {
            writeln!(writer, "x,{}", dataset.layer_names().join(","))?;
            for (sample, x) in dataset.x().iter().enumerate() {
                write!(writer, "{x}")?;
                for y in dataset.layers().column(sample) {
                    write!(writer, ",{y}")?;
                }
                writeln!(writer)?;
            }
        }
        CsvLayout::Long => {
            let names = dataset.layer_names();
            writeln!(writer, "layer,x,y")?;
            for (layer, x, y) in dataset.long_rows() {
                let name = names.get(layer).map_or("", String::as_str);
                writeln!(writer, "{name},{x},{y}")?;
            }
        }
    }
    Ok(())
}

/// Export a dataset to a CSV file, creating parent directories as needed
///
/// # Errors
///
/// Returns a file system error if the parent directory cannot be created or
/// the file cannot be written
pub fn export_dataset_as_csv(dataset: &Dataset, layout: CsvLayout, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let file = File::create(output_path).map_err(|e| GenerationError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    write_csv(dataset, layout, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| GenerationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "write csv",
            source: e,
        })
}
