use super::command::PathCommand;
use super::syntax::{PathSyntax, SvgPathSyntax};
use crate::errors::{Error, Result};

/// Interprets path data as a sequence of [`PathCommand`]s.
///
/// Commands are produced lazily; the first error ends the sequence.
pub struct PathParser {
    tokens: SvgPathSyntax,
    // current command being processed; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<char>,
    started: bool,
    failed: bool,
}

impl PathParser {
    pub fn new(data: &str) -> Self {
        PathParser {
            tokens: SvgPathSyntax::new(data),
            command: None,
            started: false,
            failed: false,
        }
    }

    fn read_coord(&mut self) -> Result<(f64, f64)> {
        let x = self.tokens.read_number()?;
        let y = self.tokens.read_number()?;
        Ok((x, y))
    }

    fn next_command(&mut self) -> Result<Option<PathCommand>> {
        self.tokens.skip_whitespace();
        // a comma may only separate operands
        if self.tokens.preceded_by_comma()
            && (self.tokens.at_end() || self.tokens.at_command()?)
        {
            return Err(Error::Path(format!(
                "trailing comma before offset {}",
                self.tokens.offset()
            )));
        }
        if self.tokens.at_end() {
            return Ok(None);
        }

        if self.command.is_none() || self.tokens.at_command()? {
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row (e.g., you can drop the second
            // "L" in "M 100 200 L 200 100 L -100 -200" and use "M 100 200 L 200 100
            // -100 -200" instead)."
            self.command = Some(self.tokens.read_command()?);
        } else {
            // this will only happen for subsequent values to an existing command
            match self.command {
                // "If a moveto is followed by multiple pairs of coordinates,
                // the subsequent pairs are treated as implicit lineto commands."
                Some('m') => {
                    self.command = Some('l');
                }
                Some('M') => {
                    self.command = Some('L');
                }
                _ => {}
            }
        }

        let command = self
            .command
            .ok_or_else(|| Error::Path("no current command".to_string()))?;
        if !self.started {
            if !matches!(command, 'M' | 'm') {
                return Err(Error::Path(format!(
                    "path data must begin with a moveto, not '{command}'"
                )));
            }
            self.started = true;
        }

        let abs = command.is_ascii_uppercase();
        let cmd = match command.to_ascii_uppercase() {
            'M' => {
                // "(x y)+"
                let (x, y) = self.read_coord()?;
                PathCommand::MoveTo { abs, x, y }
            }
            'L' => {
                // "(x y)+"
                let (x, y) = self.read_coord()?;
                PathCommand::LineTo { abs, x, y }
            }
            'H' => {
                // "x+"
                let x = self.tokens.read_number()?;
                PathCommand::HLineTo { abs, x }
            }
            'V' => {
                // "y+"
                let y = self.tokens.read_number()?;
                PathCommand::VLineTo { abs, y }
            }
            'C' => {
                // (x1 y1 x2 y2 x y)+
                let (x1, y1) = self.read_coord()?;
                let (x2, y2) = self.read_coord()?;
                let (x, y) = self.read_coord()?;
                PathCommand::CubicCurveTo {
                    abs,
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                }
            }
            'S' => {
                // "(x2 y2 x y)+"
                let (x2, y2) = self.read_coord()?;
                let (x, y) = self.read_coord()?;
                PathCommand::SmoothCubicCurveTo { abs, x2, y2, x, y }
            }
            'Q' => {
                // "(x1 y1 x y)+"
                let (x1, y1) = self.read_coord()?;
                let (x, y) = self.read_coord()?;
                PathCommand::QuadraticCurveTo { abs, x1, y1, x, y }
            }
            'T' => {
                // "(x y)+"
                let (x, y) = self.read_coord()?;
                PathCommand::SmoothQuadraticCurveTo { abs, x, y }
            }
            'A' => {
                // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
                let rx = self.tokens.read_number()?;
                let ry = self.tokens.read_number()?;
                let x_axis_rotation = self.tokens.read_number()?;
                let large_arc = self.tokens.read_flag()?;
                let sweep = self.tokens.read_flag()?;
                let (x, y) = self.read_coord()?;
                PathCommand::ArcTo {
                    abs,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    x,
                    y,
                }
            }
            'Z' => {
                // since this doesn't consume further tokens, we must clear the command
                // to force getting a new command token, or we could loop forever
                self.command = None;
                PathCommand::ClosePath { abs }
            }
            _ => Err(Error::Path(format!("invalid path command '{command}'")))?,
        };
        Ok(Some(cmd))
    }
}

impl Iterator for PathParser {
    type Item = Result<PathCommand>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = self.next_command().transpose();
        if matches!(res, Some(Err(_))) {
            self.failed = true;
        }
        res
    }
}

/// Parse complete path data into commands, failing on the first error.
pub fn parse_path_data(data: &str) -> Result<Vec<PathCommand>> {
    PathParser::new(data).collect()
}
