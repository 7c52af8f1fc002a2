use serde::Deserialize;

/// The slice of a forge build artifact we care about.
///
/// forge writes a lot more (abi, metadata, ast, ...); serde ignores it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    #[serde(alias = "DeployedBytecode")]
    deployed_bytecode: DeployedBytecode,
}

#[derive(Debug, Deserialize)]
struct DeployedBytecode {
    #[serde(alias = "Object")]
    object: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("malformed artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("deployed bytecode does not start with 0x: {0:?}")]
    MissingPrefix(String),
}

/// Extract `DeployedBytecode.Object` from an artifact and strip the `0x`.
pub fn parse_deployed_bytecode(json: &str) -> Result<String, ArtifactError> {
    let artifact: Artifact = serde_json::from_str(json)?;
    let object = artifact.deployed_bytecode.object;

    match object.strip_prefix("0x") {
        Some(hex) => Ok(hex.to_string()),
        None => Err(ArtifactError::MissingPrefix(object)),
    }
}
