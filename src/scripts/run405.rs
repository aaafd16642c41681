use std::path::PathBuf;

use crate::submodules::ice_plotter::{plot_ice_shapes, plot_thermo_profiles, IceShapeConfig, ThermoProfileConfig};

// NASA Run 405 multilayer validation case.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let basedir = PathBuf::from("Validations/Ice/Run405Multilayer");
    let chord = 0.5334;

    let shapes = IceShapeConfig {
        basedir: basedir.clone(),
        case_count: 7,
        chord,
        airfoil_file: basedir.join("NACA0012.dat"),
        lewice_file: PathBuf::from("Validations/LewiceIceshapes/Run405.csv"),
        habashi_file: PathBuf::from("Validations/LewiceIceshapes/Habashi405.csv"),
        reference_chord: 21.0,
        x_limits: (-0.05, 0.2),
        output_file: basedir.join("iceshapes.png"),
        width: 700,
        height: 300,
    };
    plot_ice_shapes(&shapes)?;
    println!("wrote {}", shapes.output_file.display());

    let lwc = 0.55e-3;
    let u_inf = 102.8;
    let thermo = ThermoProfileConfig {
        upper_file: PathBuf::from("THERMO_SOLN_UPPER.out"),
        lower_file: PathBuf::from("THERMO_SOLN_LOWER.out"),
        beta_file: PathBuf::from("BETA.out"),
        lwc,
        u_inf,
        output_file: PathBuf::from("thermo.png"),
        width: 700,
        height: 300,
    };
    plot_thermo_profiles(&thermo)?;
    println!("wrote {}", thermo.output_file.display());
    Ok(())
}
