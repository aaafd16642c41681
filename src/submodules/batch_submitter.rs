use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use ndarray::Array1;
use serde::Serialize;

use super::table;
use super::type_lib::NumericData;

pub struct BatchParams {
    pub sweep_table_file: PathBuf,
    pub input_template: PathBuf,
    pub job_template: PathBuf,
    pub output_root: PathBuf,
    pub case_count: usize,
    pub placeholder: String,
    pub workdir_prefix: String,
    pub solver_binary: PathBuf,
    pub submit_command: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionOutcome {
    pub case_index: usize,
    pub radius: NumericData,
    pub workdir: PathBuf,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

pub struct BatchSubmitter {
    pub params: BatchParams,
    pub radii: Array1<NumericData>,
}

impl BatchSubmitter {
    pub fn load(params: BatchParams) -> Result<Self, Box<dyn std::error::Error>> {
        let sweep = table::read_table(&params.sweep_table_file, ',')?;
        if sweep.nrows() < params.case_count {
            return Err(format!("{}: {} rows, need {}",
                params.sweep_table_file.display(), sweep.nrows(), params.case_count).into());
        }
        // Only the first column (droplet radius) drives the sweep.
        let radii = if sweep.ncols() == 0 {
            Array1::zeros(0)
        } else {
            sweep.column(0).to_owned()
        };
        let template = std::fs::read_to_string(&params.input_template)?;
        if !template.contains(&params.placeholder) {
            return Err(format!("{}: placeholder {:?} not found",
                params.input_template.display(), params.placeholder).into());
        }
        Ok(BatchSubmitter { params, radii })
    }

    pub fn run(&self) -> Result<Vec<SubmissionOutcome>, Box<dyn std::error::Error>> {
        let mut outcomes = Vec::with_capacity(self.params.case_count);
        for i in 0..self.params.case_count {
            let (workdir, job_file) = self.prepare_case(i)?;
            let outcome = self.submit(i, &workdir, &job_file);
            println!("case {}: radius {} -> {} (exit {:?})",
                i + 1, self.radii[i], workdir.display(), outcome.exit_code);
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    pub fn case_workdir(&self, case_index: usize) -> PathBuf {
        self.params.output_root.join(format!("{}{}", self.params.workdir_prefix, case_index + 1))
    }

    // Creates the case directory, copies both templates in, patches the
    // placeholder, and appends the solver invocation to the job script.
    // A pre-existing directory is fatal and aborts the batch at this index.
    fn prepare_case(&self, case_index: usize) -> Result<(PathBuf, PathBuf), Box<dyn std::error::Error>> {
        let workdir = self.case_workdir(case_index);
        std::fs::create_dir(&workdir)
            .map_err(|e| format!("{}: {}", workdir.display(), e))?;

        let input_file = workdir.join(template_name(&self.params.input_template)?);
        let job_file = workdir.join(template_name(&self.params.job_template)?);
        std::fs::copy(&self.params.input_template, &input_file)?;
        std::fs::copy(&self.params.job_template, &job_file)?;

        let contents = std::fs::read_to_string(&input_file)?;
        let patched = contents.replace(&self.params.placeholder, &self.radii[case_index].to_string());
        std::fs::write(&input_file, patched)?;

        let mut job = std::fs::OpenOptions::new().append(true).open(&job_file)?;
        writeln!(job, "cd {}", workdir.display())?;
        writeln!(job, "{} {}", self.params.solver_binary.display(), input_file.display())?;
        Ok((workdir, job_file))
    }

    // Submission is not allowed to abort the batch; a scheduler that cannot
    // even be spawned is recorded the same way as a non-zero exit.
    fn submit(&self, case_index: usize, workdir: &Path, job_file: &Path) -> SubmissionOutcome {
        let output = Command::new(&self.params.submit_command)
            .arg("-o").arg(workdir.join("OUT.out"))
            .arg("-e").arg(workdir.join("ERR.err"))
            .arg(job_file)
            .output();
        let (exit_code, stderr) = match output {
            Ok(out) => (out.status.code(), String::from_utf8_lossy(&out.stderr).into_owned()),
            Err(e) => (None, e.to_string()),
        };
        SubmissionOutcome {
            case_index,
            radius: self.radii[case_index],
            workdir: workdir.to_path_buf(),
            exit_code,
            stderr,
        }
    }
}

fn template_name(template: &Path) -> Result<&std::ffi::OsStr, Box<dyn std::error::Error>> {
    template.file_name()
        .ok_or_else(|| format!("{}: not a file path", template.display()).into())
}
