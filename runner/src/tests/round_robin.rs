use core::module_path;
use function_name::named;
use scheduler::Algorithm;
use std::num::NonZeroU32;

use super::{config, run};

#[test]
#[named]
pub fn long_burst() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        config(Algorithm::Rr),
        "7 25 0 1 0\n",
    );
}

#[test]
#[named]
pub fn two_jobs_short_quantum() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        config(Algorithm::Rr).with_quantum(NonZeroU32::new(2).unwrap()),
        "1 5 0 1 0\n2 5 0 1 0\n",
    );
}
