pub mod factorial;
pub mod helpers;
pub mod tour;

pub use crate::domain::model::{Evaluation, OutputFormat, TourReport};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
