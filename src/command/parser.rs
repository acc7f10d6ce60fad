//! Parse one script line into a structured command
//!
//! Grammar (tokens separated by whitespace):
//!
//! ```text
//! Tissue tissueNew <name>
//! Tissue <name> cytotoxicCellNew <x> <y> <z>
//! Tissue <name> helperCellNew <x> <y> <z>
//! Tissue <name> infectionStartLocationIs <x> <y> <z> <side> <strength>
//! Tissue <name> infectedCellsDel
//! Tissue <name> cloneCellsNew <side>
//! Cell <name> <x> <y> <z> membrane <side> antibodyStrengthIs <strength>
//! Cell <name> <x> <y> <z> cloneNew <side>
//! ```
//!
//! Side words are read as plain tokens and resolved afterwards, so an
//! unknown direction is reported as `InvalidSide` rather than a generic
//! grammar failure.

use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{i32 as int32, space0, space1, u32 as uint32};
use nom::combinator::{all_consuming, map, verify};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

use crate::core::error::{Result, TissueError};
use crate::core::types::{AntibodyStrength, Coordinate, Side};
use crate::tissue::cell::CellType;

/// A single script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    TissueNew {
        tissue: String,
    },
    CellNew {
        tissue: String,
        cell_type: CellType,
        location: Coordinate,
    },
    AntibodyStrengthIs {
        tissue: String,
        location: Coordinate,
        side: Side,
        strength: AntibodyStrength,
    },
    InfectionStart {
        tissue: String,
        location: Coordinate,
        side: Side,
        strength: AntibodyStrength,
    },
    InfectedCellsDel {
        tissue: String,
    },
    CloneNew {
        tissue: String,
        location: Coordinate,
        side: Side,
    },
    CloneCellsNew {
        tissue: String,
        side: Side,
    },
}

impl Command {
    /// Name of the tissue this command addresses
    pub fn tissue(&self) -> &str {
        match self {
            Command::TissueNew { tissue }
            | Command::CellNew { tissue, .. }
            | Command::AntibodyStrengthIs { tissue, .. }
            | Command::InfectionStart { tissue, .. }
            | Command::InfectedCellsDel { tissue }
            | Command::CloneNew { tissue, .. }
            | Command::CloneCellsNew { tissue, .. } => tissue,
        }
    }
}

/// Returns true for lines that carry no command
pub fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    if is_ignorable(line) {
        return Ok(None);
    }

    let (_, parsed) = all_consuming(delimited(space0, command, space0))
        .parse(line.trim())
        .map_err(|_| TissueError::MalformedCommand(line.trim().to_string()))?;

    parsed.map(Some)
}

/// Command parsed up to side resolution
type Pending = Result<Command>;

fn token(i: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(i)
}

/// A tissue name: any token except a reserved keyword
fn tissue_name(i: &str) -> IResult<&str, &str> {
    verify(token, |name: &str| name != "tissueNew").parse(i)
}

fn coordinate(i: &str) -> IResult<&str, Coordinate> {
    map(
        (int32, space1, int32, space1, int32),
        |(x, _, y, _, z)| Coordinate::new(x, y, z),
    )
    .parse(i)
}

fn command(i: &str) -> IResult<&str, Pending> {
    alt((tissue_command, cell_command)).parse(i)
}

fn tissue_command(i: &str) -> IResult<&str, Pending> {
    preceded(
        (tag("Tissue"), space1),
        alt((tissue_new, tissue_operation)),
    )
    .parse(i)
}

fn tissue_new(i: &str) -> IResult<&str, Pending> {
    map(preceded((tag("tissueNew"), space1), token), |name: &str| -> Pending {
        Ok(Command::TissueNew {
            tissue: name.to_string(),
        })
    })
    .parse(i)
}

fn tissue_operation(i: &str) -> IResult<&str, Pending> {
    let (i, tissue) = tissue_name(i)?;
    let (i, _) = space1(i)?;
    let tissue = tissue.to_string();

    let result = alt((
        map(
            preceded((tag("cytotoxicCellNew"), space1), coordinate),
            |location| cell_new(&tissue, CellType::Cytotoxic, location),
        ),
        map(
            preceded((tag("helperCellNew"), space1), coordinate),
            |location| cell_new(&tissue, CellType::Helper, location),
        ),
        map(
            preceded(
                (tag("infectionStartLocationIs"), space1),
                (coordinate, space1, token, space1, uint32),
            ),
            |(location, _, side, _, strength)| -> Pending {
                Ok(Command::InfectionStart {
                    tissue: tissue.clone(),
                    location,
                    side: side.parse()?,
                    strength,
                })
            },
        ),
        map(tag("infectedCellsDel"), |_| -> Pending {
            Ok(Command::InfectedCellsDel {
                tissue: tissue.clone(),
            })
        }),
        map(preceded((tag("cloneCellsNew"), space1), token), |side| -> Pending {
            Ok(Command::CloneCellsNew {
                tissue: tissue.clone(),
                side: side.parse()?,
            })
        }),
    ))
    .parse(i);
    result
}

fn cell_command(i: &str) -> IResult<&str, Pending> {
    let (i, (_, _, tissue, _, location, _)) =
        (tag("Cell"), space1, tissue_name, space1, coordinate, space1).parse(i)?;
    let tissue = tissue.to_string();

    let result = alt((
        map(
            (
                tag("membrane"),
                space1,
                token,
                space1,
                tag("antibodyStrengthIs"),
                space1,
                uint32,
            ),
            |(_, _, side, _, _, _, strength)| -> Pending {
                Ok(Command::AntibodyStrengthIs {
                    tissue: tissue.clone(),
                    location,
                    side: side.parse()?,
                    strength,
                })
            },
        ),
        map(preceded((tag("cloneNew"), space1), token), |side| -> Pending {
            Ok(Command::CloneNew {
                tissue: tissue.clone(),
                location,
                side: side.parse()?,
            })
        }),
    ))
    .parse(i);
    result
}

fn cell_new(tissue: &str, cell_type: CellType, location: Coordinate) -> Pending {
    Ok(Command::CellNew {
        tissue: tissue.to_string(),
        cell_type,
        location,
    })
}
