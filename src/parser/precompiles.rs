use regex::Regex;
use std::sync::LazyLock;

use crate::model::{EXCLUDED_PRECOMPILES, PrecompileNames};

static CONSTANT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"constant\s+([A-Za-z_]\w*)\s+=").expect("constant pattern is valid")
});

/// Names of every `constant NAME =` declaration in `source`, in order,
/// minus the excluded sentinels.
pub fn scan_precompile_names(source: &str) -> PrecompileNames {
    CONSTANT_DECL
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|name| !EXCLUDED_PRECOMPILES.contains(name))
        .map(str::to_string)
        .collect()
}
