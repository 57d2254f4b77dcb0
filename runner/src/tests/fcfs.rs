use core::module_path;
use function_name::named;
use scheduler::Algorithm;

use super::{config, run};

#[test]
#[named]
pub fn two_jobs() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        config(Algorithm::Fcfs),
        "// id cpu io reps priority\n1 3 2 1 0\n2 3 2 1 0\n",
    );
}
