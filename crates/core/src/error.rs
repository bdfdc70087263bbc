#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("identifier configuration error: {0}")]
    Ident(#[from] aasx_ident::IdentError),
    #[error("failed to read manifest file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("failed to deserialize JSON: {0}")]
    JsonDeserialization(serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to serialize JSON: {0}")]
    JsonSerialization(serde_json::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
