//! Scenario file loading.
//!
//! A scenario is six whitespace-separated numbers: board width and height in
//! whole metres, then the launch angle (degrees, clockwise from horizontal)
//! and speed (metres per second) of the left robot, then the same pair for
//! the right robot. Degenerate values the simulation core treats as
//! unspecified — zero-sized boards, zero or non-finite speeds — are rejected
//! here, before a `SimulationConfig` is ever constructed.

use std::{fs, path::Path, str::FromStr};

use thiserror::Error;

use crate::simulation::{Launch, SimulationConfig};

#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("invalid {field} {token:?}")]
    InvalidValue {
        field: &'static str,
        token: String,
    },
    #[error("{0} must be a positive number of metres")]
    ZeroDimension(&'static str),
    #[error("{0} must be a nonzero, finite number")]
    DegenerateSpeed(&'static str),
    #[error("{0} must be finite")]
    NonFiniteAngle(&'static str),
}

pub fn load(path: &Path) -> Result<SimulationConfig, InputError> {
    parse(&fs::read_to_string(path)?)
}

pub fn parse(text: &str) -> Result<SimulationConfig, InputError> {
    let mut values = text.split_whitespace();

    let board_width = next_value(&mut values, "board width")?;
    if board_width == 0 {
        return Err(InputError::ZeroDimension("board width"));
    }
    let board_height = next_value(&mut values, "board height")?;
    if board_height == 0 {
        return Err(InputError::ZeroDimension("board height"));
    }

    let left = launch(&mut values, "left robot angle", "left robot speed")?;
    let right = launch(&mut values, "right robot angle", "right robot speed")?;

    Ok(SimulationConfig {
        board_width,
        board_height,
        left,
        right,
    })
}

fn launch<'a>(
    values: &mut impl Iterator<Item = &'a str>,
    angle_field: &'static str,
    speed_field: &'static str,
) -> Result<Launch, InputError> {
    let angle_deg: f64 = next_value(values, angle_field)?;
    if !angle_deg.is_finite() {
        return Err(InputError::NonFiniteAngle(angle_field));
    }

    let speed_m_per_s: f64 = next_value(values, speed_field)?;
    if speed_m_per_s == 0.0 || !speed_m_per_s.is_finite() {
        return Err(InputError::DegenerateSpeed(speed_field));
    }

    Ok(Launch {
        angle_deg,
        speed_m_per_s,
    })
}

fn next_value<'a, T: FromStr>(
    values: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, InputError> {
    let token = values.next().ok_or(InputError::MissingValue(field))?;
    token.parse().map_err(|_| InputError::InvalidValue {
        field,
        token: token.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse() {
        let config = parse("10 2\n45 10\n30 12\n").unwrap();
        assert_eq!(
            config,
            SimulationConfig {
                board_width: 10,
                board_height: 2,
                left: Launch {
                    angle_deg: 45.0,
                    speed_m_per_s: 10.0,
                },
                right: Launch {
                    angle_deg: 30.0,
                    speed_m_per_s: 12.0,
                },
            }
        );
    }

    #[test]
    fn test_parse_ignores_layout() {
        // Scenario files are usually line-oriented, but any whitespace works.
        assert_eq!(parse("10 2 45 10 30 12").unwrap(), parse("10\n2\n45\n10\n30\n12").unwrap());
    }

    #[rstest]
    #[case::empty("", "missing value for board width")]
    #[case::truncated("10 2\n45 10\n30", "missing value for right robot speed")]
    #[case::non_numeric_dimension("ten 2 45 10 30 12", "invalid board width \"ten\"")]
    #[case::negative_dimension("10 -2 45 10 30 12", "invalid board height \"-2\"")]
    #[case::zero_dimension("0 2 45 10 30 12", "board width must be a positive number of metres")]
    #[case::zero_speed("10 2 45 0 30 12", "left robot speed must be a nonzero, finite number")]
    #[case::infinite_speed(
        "10 2 45 10 30 inf",
        "right robot speed must be a nonzero, finite number"
    )]
    #[case::non_finite_angle("10 2 NaN 10 30 12", "left robot angle must be finite")]
    fn test_parse_errors(#[case] text: &str, #[case] message: &str) {
        assert_eq!(parse(text).unwrap_err().to_string(), message);
    }
}
