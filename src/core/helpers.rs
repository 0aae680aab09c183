use crate::utils::error::{Result, TourError};

pub fn greet(name: &str) -> String {
    format!("Hello World {}", name)
}

/// Returns its argument unchanged.
pub fn echo(name: &str) -> &str {
    name
}

/// Sums zero or more numbers. An empty slice sums to 0.
pub fn sum(numbers: &[i64]) -> Result<i64> {
    numbers
        .iter()
        .try_fold(0i64, |total, &n| total.checked_add(n))
        .ok_or_else(|| TourError::overflow("sum", format!("{:?}", numbers)))
}

pub fn make_adder() -> impl Fn(i64, i64) -> Result<i64> {
    |x, y| {
        x.checked_add(y)
            .ok_or_else(|| TourError::overflow("add", format!("{} + {}", x, y)))
    }
}

pub fn anonymous_message() -> String {
    let anonymous = || "I am an anonymous function".to_string();
    anonymous()
}
