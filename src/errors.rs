use glam::UVec2;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("zero frame size")]
    ZeroFrameSize,
    #[error("no frames")]
    NoFrames,
    #[error("strip too small, needed {needed} actual {actual}")]
    StripTooSmall { needed: UVec2, actual: UVec2 },
}
