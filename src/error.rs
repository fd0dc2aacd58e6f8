#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("unknown SHT4x analog variant name")]
    UnknownVariant,

    #[error("invalid SHT4x analog variant code {0}")]
    InvalidVariantCode(u8),

    #[error("unsupported ADC resolution of {0} bits")]
    InvalidResolution(u8),
}

pub type Result<T> = core::result::Result<T, Error>;
