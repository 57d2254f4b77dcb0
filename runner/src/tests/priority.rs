use core::module_path;
use function_name::named;
use scheduler::Algorithm;

use super::{config, run};

#[test]
#[named]
pub fn lowest_value_first() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        config(Algorithm::Ps),
        "1 2 1 1 9\n2 2 1 1 0\n3 2 1 1 4\n",
    );
}
