use std::path::PathBuf;

// fixed locations, relative to the suave-std checkout root
pub const TOOL_DIR: &str = "tools/forge-gen";
pub const FORGE_SRC_DIR: &str = "src/forge";
pub const MIRROR_DIR: &str = "src-forge-test"; // relative to TOOL_DIR
pub const ARTIFACT_DIR: &str = "out"; // relative to TOOL_DIR
pub const FOUNDRY_CONFIG: &str = "foundry.toml"; // relative to TOOL_DIR
pub const SUAVE_LIB: &str = "src/suavelib/Suave.sol";
pub const REGISTRY_OUT: &str = "src/forge/Registry.sol";

/// Contracts copied into the scratch project before `forge build`.
pub const MIRRORED_SOURCES: [&str; 2] = ["Connector.sol", "ConfidentialInputs.sol"];

/// Precompile constants that never get a registry entry.
pub const EXCLUDED_PRECOMPILES: [&str; 2] = ["ANYALLOWED", "CONFIDENTIAL_INPUTS"];

/// Every path the pipeline touches, resolved once against the checkout root.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn tool_dir(&self) -> PathBuf {
        self.root.join(TOOL_DIR)
    }

    /// `(from, to)` pairs for the artifact mirror.
    pub fn mirrored_sources(&self) -> Vec<(PathBuf, PathBuf)> {
        let from = self.root.join(FORGE_SRC_DIR);
        let to = self.tool_dir().join(MIRROR_DIR);
        MIRRORED_SOURCES
            .iter()
            .map(|name| (from.join(name), to.join(name)))
            .collect()
    }

    pub fn foundry_config(&self) -> PathBuf {
        self.tool_dir().join(FOUNDRY_CONFIG)
    }

    pub fn connector_artifact(&self) -> PathBuf {
        self.artifact("Connector.sol", "Connector.json")
    }

    pub fn confidential_artifact(&self) -> PathBuf {
        self.artifact("ConfidentialInputs.sol", "ConfidentialInputsWrapper.json")
    }

    fn artifact(&self, source: &str, contract: &str) -> PathBuf {
        self.tool_dir().join(ARTIFACT_DIR).join(source).join(contract)
    }

    pub fn suave_lib(&self) -> PathBuf {
        self.root.join(SUAVE_LIB)
    }

    pub fn registry_out(&self) -> PathBuf {
        self.root.join(REGISTRY_OUT)
    }
}

/// Deployed bytecode of the two helper contracts, without the `0x` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytecodePair {
    pub connector: String,
    pub confidential: String,
}

/// Precompile constant names in order of appearance. Duplicates are kept.
pub type PrecompileNames = Vec<String>;

/// Everything the registry template needs.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub bytecodes: &'a BytecodePair,
    pub precompiles: &'a [String],
}

impl<'a> RenderContext<'a> {
    pub fn new(bytecodes: &'a BytecodePair, precompiles: &'a [String]) -> Self {
        Self {
            bytecodes,
            precompiles,
        }
    }
}
