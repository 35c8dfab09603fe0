pub mod driver;
pub mod processor;

pub use crate::domain::model::{ItemStore, VERSION};
pub use crate::domain::ports::{ConfigProvider, Task};
pub use crate::utils::error::Result;
