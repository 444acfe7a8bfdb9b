use thiserror::Error;
use xshore::XshoreError;

#[derive(Error, Debug)]
pub enum ProfvolError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("bar window pair {index} is out of range ({pairs} pairs found)")]
    PairIndex { index: usize, pairs: usize },

    #[error("{0}")]
    Geometry(#[from] XshoreError),
}
