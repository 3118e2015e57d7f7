//! Theme registry: named builtin palettes looked up from configuration.

pub mod builtins;
pub mod types;

pub use types::Theme;

type ThemeFn = fn() -> Theme;

/// Builtin palettes in the order `--list-themes` reports them. The
/// first entry doubles as the default.
const BUILTINS: &[(&str, ThemeFn)] = &[
    (builtins::midnight::NAME, builtins::midnight::theme),
    (builtins::solarized::NAME, builtins::solarized::theme),
    (builtins::paper::NAME, builtins::paper::theme),
];

/// Look up a builtin theme by name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, build)| build())
}

#[must_use]
pub fn default_theme() -> Theme {
    BUILTINS[0].1()
}

/// Resolve a configured name, falling back to the default for unknown
/// values so a stale config never blocks startup.
#[must_use]
pub fn theme_or_default(name: &str) -> Theme {
    by_name(name).unwrap_or_else(|| {
        log::warn!("unknown theme '{name}', using '{}'", BUILTINS[0].0);
        default_theme()
    })
}

/// Names of every builtin theme.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILTINS.iter().map(|(name, _)| *name).collect()
}
