use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use plotters::prelude::*;

use super::func_lib::{extent, padded_range};
use super::table;
use super::type_lib::NumericData;

pub struct CloudPlotConfig {
    pub drop_x_file: PathBuf,
    pub drop_y_file: PathBuf,
    pub airfoil_file: PathBuf,
    pub cell_x_file: PathBuf,
    pub cell_y_file: PathBuf,
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl CloudPlotConfig {
    pub fn new(basedir: &Path) -> Self {
        CloudPlotConfig {
            drop_x_file: basedir.join("CloudX.out"),
            drop_y_file: basedir.join("CloudY.out"),
            airfoil_file: basedir.join("AirfoilXY.out"),
            cell_x_file: basedir.join("CloudCELLX.out"),
            cell_y_file: basedir.join("CloudCELLY.out"),
            output_file: basedir.join("cloud.png"),
            width: 1000,
            height: 800,
        }
    }
}

pub struct CloudPlot {
    pub drop_x: Array1<NumericData>,
    pub drop_y: Array1<NumericData>,
    pub cell_x: Array1<NumericData>,
    pub cell_y: Array1<NumericData>,
    pub airfoil: Array2<NumericData>,
}

impl CloudPlot {
    pub fn read(config: &CloudPlotConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let drop_x = table::read_column(&config.drop_x_file)?;
        let drop_y = table::read_column(&config.drop_y_file)?;
        let cell_x = table::read_column(&config.cell_x_file)?;
        let cell_y = table::read_column(&config.cell_y_file)?;
        let airfoil = table::read_table(&config.airfoil_file, '\t')?;
        check_paired(&drop_x, &drop_y, &config.drop_x_file, &config.drop_y_file)?;
        check_paired(&cell_x, &cell_y, &config.cell_x_file, &config.cell_y_file)?;
        if airfoil.ncols() < 2 {
            return Err(format!("{}: expected at least 2 columns, found {}",
                config.airfoil_file.display(), airfoil.ncols()).into());
        }
        Ok(CloudPlot { drop_x, drop_y, cell_x, cell_y, airfoil })
    }

    pub fn render(&self, config: &CloudPlotConfig) -> Result<(), Box<dyn std::error::Error>> {
        let (x_lo, x_hi) = extent(self.drop_x.iter()
            .chain(self.cell_x.iter())
            .chain(self.airfoil.column(0)));
        let (y_lo, y_hi) = extent(self.drop_y.iter()
            .chain(self.cell_y.iter())
            .chain(self.airfoil.column(1)));

        let root = BitMapBackend::new(&config.output_file, (config.width, config.height)).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(5)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))?;
        chart.configure_mesh().draw()?;

        chart.draw_series(self.drop_x.iter().zip(self.drop_y.iter())
            .map(|(&x, &y)| Circle::new((x, y), 2, RED.filled())))?;
        chart.draw_series(self.cell_x.iter().zip(self.cell_y.iter())
            .map(|(&x, &y)| Circle::new((x, y), 2, BLUE.filled())))?;
        chart.draw_series(LineSeries::new(
            self.airfoil.rows().into_iter().map(|row| (row[0], row[1])),
            &BLACK,
        ))?;

        root.present()?;
        Ok(())
    }
}

fn check_paired(x: &Array1<NumericData>, y: &Array1<NumericData>, x_file: &Path, y_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if x.len() != y.len() {
        return Err(format!("{} has {} rows but {} has {}",
            x_file.display(), x.len(), y_file.display(), y.len()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write as _;
    use tempfile::tempdir;

    fn write_column(dir: &Path, name: &str, values: &[NumericData]) {
        let mut contents = String::new();
        for v in values {
            writeln!(contents, "{}", v).unwrap();
        }
        std::fs::write(dir.join(name), contents).unwrap();
    }

    fn write_fixture(dir: &Path, n: usize) {
        let xs = (0..n).map(|i| i as NumericData * 0.01).collect::<Vec<_>>();
        let ys = xs.iter().map(|x| (x * 10.0).sin() * 0.1).collect::<Vec<_>>();
        write_column(dir, "CloudX.out", &xs);
        write_column(dir, "CloudY.out", &ys);
        write_column(dir, "CloudCELLX.out", &xs);
        write_column(dir, "CloudCELLY.out", &ys);
        let mut airfoil = String::new();
        for i in 0..n {
            writeln!(airfoil, "{}\t{}", xs[i], -ys[i]).unwrap();
        }
        std::fs::write(dir.join("AirfoilXY.out"), airfoil).unwrap();
    }

    #[test]
    fn renders_three_series_to_png() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path(), 50);
        let config = CloudPlotConfig::new(dir.path());
        let plot = CloudPlot::read(&config).unwrap();
        plot.render(&config).unwrap();
        let bytes = std::fs::read(&config.output_file).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn rejects_mismatched_pair_lengths() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path(), 10);
        write_column(dir.path(), "CloudY.out", &[0.0; 7]);
        let config = CloudPlotConfig::new(dir.path());
        assert!(CloudPlot::read(&config).is_err());
    }

    #[test]
    fn malformed_row_fails_at_read_time() {
        let dir = tempdir().unwrap();
        write_fixture(dir.path(), 10);
        std::fs::write(dir.path().join("CloudX.out"), "0.1\noops\n").unwrap();
        let config = CloudPlotConfig::new(dir.path());
        assert!(CloudPlot::read(&config).is_err());
    }
}
