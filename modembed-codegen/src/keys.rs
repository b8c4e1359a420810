//! Logical key derivation.
//!
//! A file at `pkg/foo.sl` is reachable as `pkg/foo.sl`, `pkg/foo` and
//! `swazi:pkg/foo`. Files with any other extension only get their full path.

use modembed_config::EmbedConfig;

/// Derive the one to three keys for a forward-slash relative path.
pub fn derive_keys(rel_path: &str, config: &EmbedConfig) -> Vec<String> {
    let mut keys = vec![rel_path.to_string()];
    if let Some((stem, ext)) = split_extension(rel_path)
        && config.is_recognized(ext)
    {
        keys.push(stem.to_string());
        keys.push(format!("{}:{}", config.namespace, stem));
    }
    keys
}

/// Split `pkg/foo.sl` into `("pkg/foo", "sl")`.
///
/// Dot-files like `pkg/.sl` have no extension.
fn split_extension(rel_path: &str) -> Option<(&str, &str)> {
    let name_start = rel_path.rfind('/').map_or(0, |i| i + 1);
    let name = &rel_path[name_start..];
    match name.rfind('.') {
        Some(0) | None => None,
        Some(dot) => {
            let split = name_start + dot;
            Some((&rel_path[..split], &rel_path[split + 1..]))
        }
    }
}
