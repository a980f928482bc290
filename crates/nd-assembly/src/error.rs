use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error(transparent)]
    Joinery(#[from] nd_joinery::JoineryError),

    #[error(transparent)]
    Model(#[from] nd_model::Error),

    #[error(transparent)]
    Core(#[from] nd_core::Error),
}
