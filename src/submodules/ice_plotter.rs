use std::path::{Path, PathBuf};

use ndarray::Array2;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use super::func_lib::{extent, padded_range};
use super::table;
use super::type_lib::{NumericData, PlotPoint};

pub struct IceShapeConfig {
    pub basedir: PathBuf,
    pub case_count: usize,
    pub chord: NumericData,
    pub airfoil_file: PathBuf,
    pub lewice_file: PathBuf,
    pub habashi_file: PathBuf,
    pub reference_chord: NumericData,
    pub x_limits: (NumericData, NumericData),
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub struct ThermoProfileConfig {
    pub upper_file: PathBuf,
    pub lower_file: PathBuf,
    pub beta_file: PathBuf,
    pub lwc: NumericData,
    pub u_inf: NumericData,
    pub output_file: PathBuf,
    pub width: u32,
    pub height: u32,
}

pub fn plot_ice_shapes(config: &IceShapeConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Read everything up front so a bad table aborts before any drawing.
    let mut layers = Vec::with_capacity(config.case_count);
    for i in 0..config.case_count {
        let path = config.basedir.join(format!("XY_NEW{}.out", i + 1));
        layers.push(scaled_points(&read_checked(&path, '\t', 2)?, config.chord));
    }
    let airfoil = scaled_points(&read_checked(&config.airfoil_file, '\t', 2)?, config.chord);
    let reference_scale = config.chord / config.reference_chord;
    let lewice = scaled_points(&read_checked(&config.lewice_file, ',', 2)?, reference_scale);
    let habashi = scaled_points(&read_checked(&config.habashi_file, ',', 2)?, reference_scale);

    let (x_lo, x_hi) = config.x_limits;
    let (y_lo, y_hi) = extent(layers.iter().flatten().chain(airfoil.iter()).map(|(_, y)| y));
    // Equal aspect: the y-span follows from the fixed x-limits and the pixel
    // aspect ratio, centred on the plotted data.
    let y_mid = 0.5 * (y_lo + y_hi);
    let y_half_span = 0.5 * (x_hi - x_lo) * NumericData::from(config.height) / NumericData::from(config.width);

    let root = BitMapBackend::new(&config.output_file, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_lo..x_hi, y_mid - y_half_span..y_mid + y_half_span)?;
    chart.configure_mesh().draw()?;

    for layer in &layers {
        chart.draw_series(LineSeries::new(layer.iter().copied(), BLUE.stroke_width(3)))?;
    }
    chart
        .draw_series(LineSeries::new(airfoil.iter().copied(), BLACK.stroke_width(3)))?
        .label("clean airfoil")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.stroke_width(3)));
    chart
        .draw_series(lewice.iter().map(|&p| Circle::new(p, 3, GREEN.filled())))?
        .label("LEWICE")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, GREEN.filled()));
    chart
        .draw_series(habashi.iter().map(|&p| Circle::new(p, 3, RED.filled())))?
        .label("Habashi")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn plot_thermo_profiles(config: &ThermoProfileConfig) -> Result<(), Box<dyn std::error::Error>> {
    let upper = read_checked(&config.upper_file, '\t', 4)?;
    let lower = read_checked(&config.lower_file, '\t', 4)?;
    let beta = read_checked(&config.beta_file, '\t', 2)?;
    // Impinging mass flux from the collection efficiency.
    let flux = beta.rows().into_iter()
        .map(|row| (row[0], config.lwc * config.u_inf * row[1]))
        .collect::<Vec<PlotPoint>>();

    let root = BitMapBackend::new(&config.output_file, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    for (panel_index, panel) in panels.iter().enumerate() {
        let column = panel_index + 1;
        let overlay = if panel_index == 2 { &flux[..] } else { &[] };
        let (x_lo, x_hi) = extent(upper.column(0).into_iter()
            .chain(lower.column(0))
            .chain(overlay.iter().map(|(x, _)| x)));
        let (y_lo, y_hi) = extent(upper.column(column).into_iter()
            .chain(lower.column(column))
            .chain(overlay.iter().map(|(_, y)| y)));

        let mut chart = ChartBuilder::on(panel)
            .margin(5)
            .x_label_area_size(25)
            .y_label_area_size(50)
            .build_cartesian_2d(padded_range(x_lo, x_hi), padded_range(y_lo, y_hi))?;
        chart.configure_mesh().draw()?;

        chart.draw_series(LineSeries::new(
            upper.rows().into_iter().map(|row| (row[0], row[column])),
            &BLUE,
        ))?;
        chart.draw_series(LineSeries::new(
            lower.rows().into_iter().map(|row| (row[0], row[column])),
            &RED,
        ))?;
        if panel_index == 2 {
            chart.draw_series(DashedLineSeries::new(flux.iter().copied(), 5, 3, BLACK.into()))?;
        }
    }

    root.present()?;
    Ok(())
}

fn read_checked(path: &Path, delimiter: char, min_columns: usize) -> Result<Array2<NumericData>, Box<dyn std::error::Error>> {
    let parsed = table::read_table(path, delimiter)?;
    if parsed.ncols() < min_columns {
        return Err(format!("{}: expected at least {} columns, found {}",
            path.display(), min_columns, parsed.ncols()).into());
    }
    Ok(parsed)
}

fn scaled_points(xy: &Array2<NumericData>, scale: NumericData) -> Vec<PlotPoint> {
    xy.rows().into_iter().map(|row| (row[0] * scale, row[1] * scale)).collect()
}
