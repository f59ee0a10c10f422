#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown chat tab {0:?}, expected \"chat\" or \"participants\"")]
    UnknownTab(String),
}
