use std::io::{self, BufRead, Write};

use shapes::token_stream::{read_number, read_token};
use shapes::{Hexagon, Octagon, ShapeCollection, ShapeError, ShapeHandle, ShapeKind, Triangle};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::{debug, info, warn};

use crate::MenuConfig;

/// Menu entries, listed and numbered from 1 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuOption {
    #[strum(serialize = "Add Triangle")]
    AddTriangle,
    #[strum(serialize = "Add Hexagon")]
    AddHexagon,
    #[strum(serialize = "Add Octagon")]
    AddOctagon,
    #[strum(serialize = "Print all figures info")]
    PrintAll,
    #[strum(serialize = "Calculate total area")]
    TotalArea,
    #[strum(serialize = "Remove figure by index")]
    Remove,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: &str) -> Option<Self> {
        let number: usize = choice.parse().ok()?;
        Self::iter().nth(number.checked_sub(1)?)
    }
    pub fn number(self) -> usize {
        Self::iter().take_while(|option| *option != self).count() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Reads choices from `input` and answers on `output` until Exit or end of input.
pub struct Menu<R: BufRead, W: Write> {
    input: R,
    output: W,
    shapes: ShapeCollection<f64>,
    config: MenuConfig,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: MenuConfig) -> Self {
        Menu {
            input,
            output,
            shapes: ShapeCollection::new(),
            config,
        }
    }

    pub fn shapes(&self) -> &ShapeCollection<f64> {
        &self.shapes
    }

    pub fn into_shapes(self) -> ShapeCollection<f64> {
        self.shapes
    }

    pub fn run(&mut self) -> io::Result<()> {
        info!(precision = self.config.precision, "menu started");
        loop {
            self.print_options()?;
            if self.step()? == Flow::Stop {
                break;
            }
        }
        info!(shapes = self.shapes.len(), "menu finished");
        self.output.flush()
    }

    fn print_options(&mut self) -> io::Result<()> {
        for option in MenuOption::iter() {
            writeln!(self.output, "{}. {}", option.number(), option)?;
        }
        self.output.flush()
    }

    fn step(&mut self) -> io::Result<Flow> {
        let Some(choice) = read_token(&mut self.input)? else {
            info!("input closed");
            return Ok(Flow::Stop);
        };
        match MenuOption::from_choice(&choice) {
            Some(MenuOption::AddTriangle) => self.add_shape(ShapeKind::Triangle)?,
            Some(MenuOption::AddHexagon) => self.add_shape(ShapeKind::Hexagon)?,
            Some(MenuOption::AddOctagon) => self.add_shape(ShapeKind::Octagon)?,
            Some(MenuOption::PrintAll) => self.print_all()?,
            Some(MenuOption::TotalArea) => self.total_area()?,
            Some(MenuOption::Remove) => self.remove()?,
            Some(MenuOption::Exit) => {
                writeln!(self.output, "bye bye.")?;
                return Ok(Flow::Stop);
            }
            None => {
                warn!(%choice, "unknown menu choice");
                writeln!(self.output, "Invalid option. Please try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_shape(&mut self, kind: ShapeKind) -> io::Result<()> {
        let (prompt, mut shape): (&str, ShapeHandle<f64>) = match kind {
            ShapeKind::Triangle => (
                "Enter 3 vertices for triangle (x y):",
                Box::new(Triangle::default()),
            ),
            ShapeKind::Hexagon => (
                "Enter center coordinates (x y) and radius for hexagon:",
                Box::new(Hexagon::default()),
            ),
            ShapeKind::Octagon => (
                "Enter center coordinates (x y) and radius for octagon:",
                Box::new(Octagon::default()),
            ),
        };
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        match shape.deserialize_vertices(&mut self.input) {
            Ok(()) => {}
            Err(ShapeError::Io(error)) => return Err(error),
            Err(error) => {
                warn!(%kind, %error, "malformed shape parameters");
                return writeln!(self.output, "Error: {}. Figure not added.", error);
            }
        }
        if !shape.is_regular() {
            warn!(%kind, "rejected shape that fails its acceptance rule");
            return writeln!(
                self.output,
                "Error: {} is not isosceles! Figure not added.",
                kind
            );
        }
        self.shapes.add(shape);
        writeln!(self.output, "{} added!", kind)
    }

    fn print_all(&mut self) -> io::Result<()> {
        if self.shapes.is_empty() {
            return writeln!(self.output, "Array is clean.");
        }
        self.shapes.print_all(&mut self.output, self.config.precision)
    }

    fn total_area(&mut self) -> io::Result<()> {
        if self.shapes.is_empty() {
            return writeln!(self.output, "No figures in the array.");
        }
        writeln!(
            self.output,
            "Total area of all figures: {:.*}",
            self.config.precision,
            self.shapes.total_area()
        )
    }

    fn remove(&mut self) -> io::Result<()> {
        if self.shapes.is_empty() {
            return writeln!(self.output, "No figures to remove.");
        }
        write!(
            self.output,
            "Enter index to remove (0-{}): ",
            self.shapes.len() - 1
        )?;
        self.output.flush()?;

        let index = match read_number::<usize>(&mut self.input) {
            Ok(index) => index,
            Err(ShapeError::Io(error)) => return Err(error),
            Err(error) => {
                warn!(%error, "malformed index");
                return writeln!(self.output, "Error: {}.", error);
            }
        };
        if self.shapes.remove(index).is_none() {
            debug!(index, "index out of range, nothing removed");
        }
        writeln!(self.output, "Figure removed!")
    }
}
