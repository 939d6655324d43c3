pub mod convert;
pub mod error;
pub mod input;
pub mod logging;
pub mod utils;

pub use convert::{ConversionResult, Outcome, Reporter, convert};
pub use error::ConvertError;
pub use input::{ConvertRequest, FormInput};
