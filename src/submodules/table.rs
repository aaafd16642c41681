use std::path::Path;

use ndarray::{Array1, Array2};

use super::type_lib::NumericData;

// Solver output tables are flat delimited text with no header row; column
// meaning is positional. Blank lines (trailing newlines included) are skipped.

pub fn read_column(path: &Path) -> Result<Array1<NumericData>, Box<dyn std::error::Error>> {
    let contents = read_contents(path)?;
    let mut values = Vec::new();
    for (line_index, line) in contents.lines().enumerate() {
        let field = line.trim();
        if field.is_empty() {
            continue;
        }
        values.push(parse_field(field, path, line_index + 1)?);
    }
    Ok(Array1::from_vec(values))
}

pub fn read_table(path: &Path, delimiter: char) -> Result<Array2<NumericData>, Box<dyn std::error::Error>> {
    let contents = read_contents(path)?;
    let mut values = Vec::new();
    let mut columns = 0;
    let mut rows = 0;
    for (line_index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = line.split(delimiter).map(str::trim).filter(|f| !f.is_empty()).collect::<Vec<_>>();
        if columns == 0 {
            columns = fields.len();
        } else if fields.len() != columns {
            return Err(format!("{}: line {}: expected {} fields, found {}",
                path.display(), line_index + 1, columns, fields.len()).into());
        }
        for field in fields {
            values.push(parse_field(field, path, line_index + 1)?);
        }
        rows += 1;
    }
    Ok(Array2::from_shape_vec((rows, columns), values)?)
}

fn read_contents(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path).map_err(|e| format!("{}: {}", path.display(), e).into())
}

fn parse_field(field: &str, path: &Path, line_number: usize) -> Result<NumericData, Box<dyn std::error::Error>> {
    field.parse().map_err(|_| format!("{}: line {}: not a number: {:?}",
        path.display(), line_number, field).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_newline_delimited_column() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "col.out", "1.5\n-2.0\n3e-3\n");
        let column = read_column(&path).unwrap();
        assert_eq!(column.len(), 3);
        assert_eq!(column[0], 1.5);
        assert_eq!(column[2], 3e-3);
    }

    #[test]
    fn tolerates_trailing_blank_lines() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "col.out", "1.0\n2.0\n\n\n");
        assert_eq!(read_column(&path).unwrap().len(), 2);
    }

    #[test]
    fn reads_tab_delimited_table() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "xy.out", "0.0\t1.0\n0.5\t0.8\n1.0\t0.0\n");
        let table = read_table(&path, '\t').unwrap();
        assert_eq!(table.dim(), (3, 2));
        assert_eq!(table[[1, 1]], 0.8);
    }

    #[test]
    fn reads_comma_delimited_table() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "dist.dat", "52.0,300.0\n48.5,295.0\n");
        let table = read_table(&path, ',').unwrap();
        assert_eq!(table.column(0).to_vec(), vec![52.0, 48.5]);
    }

    #[test]
    fn rejects_non_numeric_row() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "bad.out", "1.0\nnot-a-number\n3.0\n");
        let err = read_column(&path).unwrap_err();
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn rejects_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "ragged.out", "1.0\t2.0\n3.0\n");
        assert!(read_table(&path, '\t').is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_column(&dir.path().join("absent.out")).is_err());
    }
}
