use crate::utils::error::{PipelineError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects an empty item. This is the only domain-level check.
pub fn validate_item(item: &str) -> Result<()> {
    if item.is_empty() {
        return Err(PipelineError::InvalidArgument {
            message: "Item cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Validates every item, reporting the position of the first bad one.
pub fn validate_items(field_name: &str, items: &[String]) -> Result<()> {
    for (index, item) in items.iter().enumerate() {
        if let Err(e) = validate_item(item) {
            return Err(PipelineError::InvalidArgument {
                message: format!("{}[{}]: {}", field_name, index, e),
            });
        }
    }
    Ok(())
}
