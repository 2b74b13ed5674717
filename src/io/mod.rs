//------------------------------------------------------------------------------------------------//
// other modules

use std::io::Read;
use std::path::Path;

use log::info;

use crate::defaults::{Coord, Point, MAX_TERMINALS, NUM_DIMENSIONS};
use crate::err::{ConfigError, Error, InputError};
use crate::grid::HananGrid;
use crate::helpers;

//------------------------------------------------------------------------------------------------//
// Parser

/// Reads instances of ASCII whitespace-separated integers: the number of terminals first,
/// then one terminal per `NUM_DIMENSIONS` coordinates, axes in order.
pub struct Parser;

impl Parser {
    pub fn parse<P: AsRef<Path> + ?Sized>(path: &P) -> Result<Vec<Point>, Error> {
        let file = helpers::open_file(path).map_err(InputError::OpenFile)?;
        Self::parse_reader(file)
    }

    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Point>, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content).map_err(InputError::from)?;
        let mut tokens = content.split_ascii_whitespace();

        let num_terminals: usize = match tokens.next().map(str::parse) {
            Some(Ok(count)) => count,
            _ => return Err(InputError::TerminalCount.into()),
        };
        if num_terminals > MAX_TERMINALS {
            return Err(ConfigError::TooManyTerminals(num_terminals).into());
        }

        let mut terminals = Vec::with_capacity(num_terminals);
        for terminal in 0..num_terminals {
            let mut point = [0 as Coord; NUM_DIMENSIONS];
            for coordinate in point.iter_mut() {
                *coordinate = match tokens.next().map(str::parse) {
                    Some(Ok(value)) => value,
                    _ => return Err(InputError::Terminal(terminal).into()),
                };
            }
            terminals.push(point);
        }
        Ok(terminals)
    }

    pub fn parse_and_finalize<P: AsRef<Path> + ?Sized>(path: &P) -> Result<HananGrid, Error> {
        info!("START Parsing given path {}", path.as_ref().display());
        let terminals = Self::parse(path)?;
        let grid = HananGrid::new(&terminals)?;
        info!("Finished parsing {} terminals", terminals.len());
        Ok(grid)
    }
}
