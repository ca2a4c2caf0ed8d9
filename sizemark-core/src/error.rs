use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizemarkError {
    #[error("cannot attach marker to element with position: {position}")]
    UnsupportedHostPosition { position: String },
}
