use scheduler::{Algorithm, Simulation, SimulationConfig};

use std::env;
use std::fs;

use processor::{load_jobs, Processor};

mod fcfs;
mod priority;
mod round_robin;
mod shortest_job_first;

fn output_path(config: &SimulationConfig, folder: &str, name: &str) -> String {
    format!(
        "../outputs/{}/{folder}/{name}___{}_{}.log",
        config.algorithm, config.quantum, config.tie_break
    )
}

fn write_logs(config: &SimulationConfig, folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{}/{folder}", config.algorithm)).unwrap();
    fs::write(output_path(config, folder, name), logs).unwrap();
}

fn read_logs(config: &SimulationConfig, folder: &str, name: &str) -> String {
    fs::read_to_string(output_path(config, folder, name)).unwrap()
}

/// Simulates the job file contents `jobs` and compares the complete
/// output with the stored reference.
fn run(folder: &str, name: &str, config: SimulationConfig, jobs: &str) {
    let specs = load_jobs(jobs.as_bytes()).unwrap();
    let simulation = Simulation::new(specs, &config).unwrap();
    let output = Processor::run(simulation).to_string();

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(&config, folder, name, &output);
    } else {
        let reference = read_logs(&config, folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn config(algorithm: Algorithm) -> SimulationConfig {
    SimulationConfig::new(algorithm)
}
