use std::path::PathBuf;

use crate::submodules::batch_submitter::{BatchParams, BatchSubmitter};

// MVD 52 micron droplet-size sweep: one cluster job per bin of the
// measured radius distribution.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let basedir = PathBuf::from(".");
    let params = BatchParams {
        sweep_table_file: basedir.join("MVD52/MVD52Distribution.dat"),
        input_template: basedir.join("InputData/Input.dat"),
        job_template: basedir.join("MVD52/pbsbase.dat"),
        output_root: basedir.join("MVD52"),
        case_count: 27,
        placeholder: "RADIUS".to_string(),
        workdir_prefix: "workdir.".to_string(),
        solver_binary: basedir.join("IcingDriver"),
        submit_command: "qsub".to_string(),
    };
    let submitter = BatchSubmitter::load(params)?;
    let outcomes = submitter.run()?;
    let log_file = submitter.params.output_root.join("submissions.json");
    std::fs::write(&log_file, serde_json::to_string_pretty(&outcomes)?)?;
    println!("submitted {} cases, log in {}", outcomes.len(), log_file.display());
    Ok(())
}
