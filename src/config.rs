use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::PathOrder;
use crate::{Error, Result};

/// Configuration for the maze solver binaries
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "maze_solver")]
#[command(about = "Solve a text maze with breadth-first search")]
pub struct SolverConfig {
    /// Maze file to read; ignored when --generate is set
    #[arg(required_unless_present = "generate")]
    pub maze_file: Option<PathBuf>,

    /// Rooms (wide x high) of a random maze to generate instead of reading one
    #[arg(long, value_name = "WxH", value_parser = parse_dimensions)]
    pub generate: Option<(usize, usize)>,

    /// Seed for maze generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a JSON report instead of a drawing
    #[arg(long)]
    pub json: bool,

    /// Report the path destination first
    #[arg(long)]
    pub backward: bool,

    /// Build a bounded graph with this many slots
    #[arg(long = "slots", value_name = "N")]
    pub slot_limit: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            maze_file: None,
            generate: None,
            seed: None,
            json: false,
            backward: false,
            slot_limit: None,
        }
    }
}

impl SolverConfig {
    /// Parses command-line arguments, excluding the program name
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let args = std::iter::once(OsString::from("maze_solver")).chain(args.into_iter().map(Into::into));
        Self::try_parse_from(args).map_err(|e| Error::Config(e.to_string()))
    }

    /// Order in which a found path is reported
    pub fn order(&self) -> PathOrder {
        if self.backward {
            PathOrder::Backward
        } else {
            PathOrder::Forward
        }
    }
}

/// Parses `WxH` into `(width, height)`
fn parse_dimensions(value: &str) -> std::result::Result<(usize, usize), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {:?}", value))?;
    let width: usize = width
        .parse()
        .map_err(|_| format!("width must be a number, got {:?}", width))?;
    let height: usize = height
        .parse()
        .map_err(|_| format!("height must be a number, got {:?}", height))?;
    if width == 0 || height == 0 {
        return Err("maze dimensions must be positive".to_string());
    }
    Ok((width, height))
}
