use std::path::Path;

use crate::submodules::cloud_plotter::{CloudPlot, CloudPlotConfig};

// Overlays the droplet cloud, the cell centres, and the airfoil surface
// from one simulation's output directory.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = CloudPlotConfig::new(Path::new("."));
    let plot = CloudPlot::read(&config)?;
    plot.render(&config)?;
    println!("wrote {}", config.output_file.display());
    Ok(())
}
