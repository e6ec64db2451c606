//! nw-project: network description files, validation, and compilation.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{LoadedNetwork, QueryOutcome, build_network, check_queries};
pub use schema::*;
pub use validate::{ValidationError, validate_network_def};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] nw_core::NwError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_yaml::from_str(&content)?;
    validate_network_def(&def)?;
    tracing::debug!(path = %path.display(), name = %def.name, "loaded network definition");
    Ok(def)
}

pub fn save_yaml(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network_def(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    validate_network_def(&def)?;
    tracing::debug!(path = %path.display(), name = %def.name, "loaded network definition");
    Ok(def)
}

pub fn save_json(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network_def(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}
