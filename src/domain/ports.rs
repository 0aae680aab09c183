use crate::domain::model::OutputFormat;

/// Settings the core reads, independent of where they came from (CLI flags or TOML).
pub trait ConfigProvider {
    fn max_factorial_input(&self) -> i64;
    fn output_format(&self) -> OutputFormat;
    fn use_recursive_factorial(&self) -> bool;

    fn tour_factorial_input(&self) -> i64 {
        5
    }

    fn tour_greet_name(&self) -> &str {
        "Jake Gyllenhaal"
    }

    fn tour_echo_name(&self) -> &str {
        "Jay"
    }

    fn tour_add_operands(&self) -> (i64, i64) {
        (1, 2)
    }

    fn tour_sum_operands(&self) -> &[i64] {
        &[1, 2, 3, 4]
    }
}
