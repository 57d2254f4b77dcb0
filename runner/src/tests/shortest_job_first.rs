use core::module_path;
use function_name::named;
use scheduler::Algorithm;

use super::{config, run};

#[test]
#[named]
pub fn equal_rank_overtakes() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        config(Algorithm::Sjf),
        "1 1 0 1 0\n2 5 0 1 0\n3 5 0 1 0\n",
    );
}
