use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;
use scheduler::{JobId, JobSpec};
use thiserror::Error;

/// The number of integers on a job line.
const FIELDS: usize = 5;

/// Errors raised while reading a job file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("job file could not be read: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Reads the job file at `path`.
pub fn load_jobs_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JobSpec>, LoadError> {
    let file = File::open(path)?;
    load_jobs(BufReader::new(file))
}

/// Reads job records, one per line, as
/// `id cpu_burst io_burst reps priority`.
///
/// Lines starting with `//` and blank lines are ignored. Any other line
/// that is not exactly five integers fails the whole load.
pub fn load_jobs<R: BufRead>(reader: R) -> Result<Vec<JobSpec>, LoadError> {
    let mut jobs = vec![];

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        if is_comment(&line) || line.trim().is_empty() {
            continue;
        }

        let job = parse_job(&line).map_err(|reason| LoadError::Malformed {
            line: number,
            reason,
        })?;
        debug!("line {number}: loaded job {}", job.id);
        jobs.push(job);
    }

    Ok(jobs)
}

fn is_comment(line: &str) -> bool {
    line.starts_with("//")
}

fn parse_job(line: &str) -> Result<JobSpec, String> {
    let fields = line
        .split_whitespace()
        .map(|field| {
            field
                .parse::<i64>()
                .map_err(|_| format!("\"{field}\" is not an integer"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let &[id, cpu_burst_length, io_burst_length, reps, priority] = fields.as_slice() else {
        return Err(format!("expected {FIELDS} fields, found {}", fields.len()));
    };

    Ok(JobSpec {
        id: JobId::new(id),
        cpu_burst_length,
        io_burst_length,
        reps,
        priority,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "// id cpu io reps pri\n1 10 4 3 2\n\n   \n//2 1 1 1 1\n7 3 0 1 -1\n";
        let jobs = load_jobs(input.as_bytes()).unwrap();

        assert_eq!(
            jobs,
            vec![
                JobSpec {
                    id: JobId::new(1),
                    cpu_burst_length: 10,
                    io_burst_length: 4,
                    reps: 3,
                    priority: 2,
                },
                JobSpec {
                    id: JobId::new(7),
                    cpu_burst_length: 3,
                    io_burst_length: 0,
                    reps: 1,
                    priority: -1,
                },
            ]
        );
    }

    #[test]
    fn rejects_short_records() {
        let err = load_jobs("1 10 4 3 2\n2 10 4\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: expected 5 fields, found 3");
    }

    #[test]
    fn rejects_extra_fields() {
        let err = load_jobs("1 10 4 3 2 9\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 1: expected 5 fields, found 6");
    }

    #[test]
    fn rejects_non_integers() {
        let err = load_jobs("// header\n1 ten 4 3 2\n".as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: \"ten\" is not an integer");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_jobs_from_file("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
