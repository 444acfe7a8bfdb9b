use crate::cutfill::BoundaryStrategy;
use xshore::C;

/// Analysis defaults supplied by the application's configuration
/// layer.
///
/// The engine never reads files; deserialize this from the app config
/// (with the `serde` feature) and pass its values into each call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Uniform analysis grid spacing, ft.
    pub dx: C,

    /// Cut & fill cell boundary construction.
    pub strategy: BoundaryStrategy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dx: 10.0,
            strategy: BoundaryStrategy::Full,
        }
    }
}
