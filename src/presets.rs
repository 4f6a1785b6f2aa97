use std::collections::HashMap;
use std::sync::LazyLock;

pub const DEFAULT_PRESET: &str = "poetry";

/// Built-in command prefixes that can be selected in quality-hooks.yaml via `preset: name`
pub static PRESETS: LazyLock<HashMap<&'static str, Vec<&'static str>>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert("poetry", vec!["poetry", "run"]);
    m.insert("uv", vec!["uv", "run"]);
    m.insert("pdm", vec!["pdm", "run"]);
    m.insert("hatch", vec!["hatch", "run"]);
    // Tools already on PATH (activated virtualenv)
    m.insert("none", vec![]);

    m
});

/// Sorted preset names, for error messages
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<_> = PRESETS.keys().copied().collect();
    names.sort_unstable();
    names
}
