pub mod board;
pub mod error;
mod generator;
pub mod geometry;
pub mod intersect;
pub mod outline;
pub mod pad;

use std::path::Path;

use board::Board;
use error::TeardropError;

pub use generator::{add_arc_teardrops, GROUP_NAME};

/// Relative arc radii, one per pad class, as fractions of the connecting
/// track's width. Each value is clamped to `[0, 10]`; 0 disables the
/// class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Request {
    pth: f64,
    smd: f64,
    via: f64,
}

impl Request {
    pub fn new(pth: f64, smd: f64, via: f64) -> Self {
        Self {
            pth: pth.clamp(0.0, 10.0),
            smd: smd.clamp(0.0, 10.0),
            via: via.clamp(0.0, 10.0),
        }
    }

    /// Radii given in percent of the track width (250 = 2.5x).
    pub fn from_percent(pth: f64, smd: f64, via: f64) -> Self {
        Self::new(pth / 100.0, smd / 100.0, via / 100.0)
    }

    pub fn pth(&self) -> f64 {
        self.pth
    }

    pub fn smd(&self) -> f64 {
        self.smd
    }

    pub fn via(&self) -> f64 {
        self.via
    }
}

/// Read a board snapshot from a JSON file.
pub fn load_board(path: &Path) -> Result<Board, TeardropError> {
    let data = std::fs::read(path)?;
    Ok(serde_json::from_slice(&data)?)
}
