//! fh-project: canonical plan file format and validation.

pub mod convert;
pub mod price;
pub mod schema;
pub mod validate;

pub use convert::room_params;
pub use price::PriceTable;
pub use schema::*;
pub use validate::{ValidationError, validate_plan};

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    let plan: Plan = serde_yaml::from_str(&content)?;
    validate_plan(&plan)?;
    Ok(plan)
}

pub fn save_yaml(path: &std::path::Path, plan: &Plan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}
