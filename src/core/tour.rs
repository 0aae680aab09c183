use crate::core::factorial::{factorial_with_limit, FactorialStrategy};
use crate::core::helpers;
use crate::core::{ConfigProvider, Evaluation, TourReport};
use crate::utils::error::Result;
use serde_json::json;

pub struct TourEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> TourEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn strategy(&self) -> FactorialStrategy {
        if self.config.use_recursive_factorial() {
            FactorialStrategy::Recursive
        } else {
            FactorialStrategy::Iterative
        }
    }

    pub fn factorial(&self, x: i64) -> Result<Evaluation> {
        let strategy = self.strategy();
        tracing::debug!("Computing factorial({}) with {:?} strategy", x, strategy);
        let result = factorial_with_limit(x, self.config.max_factorial_input(), strategy)?;
        Ok(Evaluation::new("factorial", json!(x), json!(result)))
    }

    pub fn sum(&self, numbers: &[i64]) -> Result<Evaluation> {
        tracing::debug!("Summing {} numbers", numbers.len());
        let total = helpers::sum(numbers)?;
        Ok(Evaluation::new("sum", json!(numbers), json!(total)))
    }

    pub fn add(&self, x: i64, y: i64) -> Result<Evaluation> {
        let add = helpers::make_adder();
        let result = add(x, y)?;
        Ok(Evaluation::new("add", json!([x, y]), json!(result)))
    }

    pub fn greet(&self, name: &str) -> Evaluation {
        Evaluation::new("greet", json!(name), json!(helpers::greet(name)))
    }

    pub fn echo(&self, name: &str) -> Evaluation {
        Evaluation::new("echo", json!(name), json!(helpers::echo(name)))
    }

    pub fn anonymous(&self) -> Evaluation {
        Evaluation::new("anonymous", serde_json::Value::Null, json!(helpers::anonymous_message()))
    }

    /// Runs every demonstration in order, stopping at the first failing step.
    pub fn run(&self) -> Result<TourReport> {
        tracing::info!("Starting tour");
        let mut report = TourReport::default();

        report.evaluations.push(self.echo(self.config.tour_echo_name()));
        report.evaluations.push(self.greet(self.config.tour_greet_name()));
        report
            .evaluations
            .push(self.factorial(self.config.tour_factorial_input())?);

        let (x, y) = self.config.tour_add_operands();
        report.evaluations.push(self.add(x, y)?);
        report
            .evaluations
            .push(self.sum(self.config.tour_sum_operands())?);
        report.evaluations.push(self.anonymous());

        for evaluation in &report.evaluations {
            tracing::debug!("{} -> {}", evaluation.step, evaluation.output);
        }
        tracing::info!("Tour completed with {} steps", report.evaluations.len());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutputFormat;
    use crate::utils::error::TourError;

    struct MockConfig {
        max_input: i64,
        recursive: bool,
        factorial_input: i64,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                max_input: 20,
                recursive: false,
                factorial_input: 5,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn max_factorial_input(&self) -> i64 {
            self.max_input
        }

        fn output_format(&self) -> OutputFormat {
            OutputFormat::Text
        }

        fn use_recursive_factorial(&self) -> bool {
            self.recursive
        }

        fn tour_factorial_input(&self) -> i64 {
            self.factorial_input
        }
    }

    #[test]
    fn test_run_default_tour() {
        let engine = TourEngine::new(MockConfig::new());
        let report = engine.run().unwrap();

        assert_eq!(
            report.steps(),
            vec!["echo", "greet", "factorial", "add", "sum", "anonymous"]
        );
        let outputs: Vec<String> = report.evaluations.iter().map(|e| e.render_text()).collect();
        assert_eq!(
            outputs,
            vec![
                "Jay",
                "Hello World Jake Gyllenhaal",
                "120",
                "3",
                "10",
                "I am an anonymous function"
            ]
        );
    }

    #[test]
    fn test_run_with_recursive_strategy() {
        let mut config = MockConfig::new();
        config.recursive = true;
        config.factorial_input = 10;
        let report = TourEngine::new(config).run().unwrap();
        assert_eq!(report.evaluations[2].output, json!(3_628_800u64));
    }

    #[test]
    fn test_run_stops_on_factorial_error() {
        let mut config = MockConfig::new();
        config.factorial_input = -3;
        let err = TourEngine::new(config).run().unwrap_err();
        assert!(matches!(err, TourError::InvalidArgument { .. }));
    }

    #[test]
    fn test_factorial_respects_configured_limit() {
        let mut config = MockConfig::new();
        config.max_input = 4;
        let engine = TourEngine::new(config);
        assert!(engine.factorial(4).is_ok());
        assert!(engine.factorial(5).is_err());
    }
}
