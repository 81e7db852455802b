//! Fixed-column record layout shared by the structure writers and readers.
//!
//! Every field is declared once as a [`Column`]; the writer places values through
//! [`RecordBuffer::put`] and the reader slices them back with [`Column::read`], so the two
//! directions cannot drift apart.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    /// 0-based character offset.
    pub start: usize,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub const fn new(name: &'static str, start: usize, width: usize, align: Align) -> Self {
        Self {
            name,
            start,
            width,
            align,
        }
    }

    pub const fn end(&self) -> usize {
        self.start + self.width
    }

    /// Human-readable 1-based column range, e.g. `31-38`.
    pub fn range(&self) -> String {
        format!("{}-{}", self.start + 1, self.end())
    }

    /// Returns the trimmed field contents, or an empty string if the line is too short.
    pub fn read(&self, line: &str) -> String {
        line.chars()
            .skip(self.start)
            .take(self.width)
            .collect::<String>()
            .trim()
            .to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Value '{value}' does not fit the {width}-character '{field}' field")]
pub struct FieldOverflow {
    pub field: &'static str,
    pub value: String,
    pub width: usize,
}

/// A space-filled line that fields are written into by column.
#[derive(Debug, Clone)]
pub struct RecordBuffer {
    chars: Vec<char>,
}

impl RecordBuffer {
    pub fn new(width: usize) -> Self {
        Self {
            chars: vec![' '; width],
        }
    }

    pub fn put(&mut self, column: &Column, value: &str) -> Result<&mut Self, FieldOverflow> {
        let len = value.chars().count();
        if len > column.width {
            return Err(FieldOverflow {
                field: column.name,
                value: value.to_string(),
                width: column.width,
            });
        }
        if self.chars.len() < column.end() {
            self.chars.resize(column.end(), ' ');
        }
        let offset = match column.align {
            Align::Left => column.start,
            Align::Right => column.end() - len,
        };
        for (i, c) in value.chars().enumerate() {
            self.chars[offset + i] = c;
        }
        Ok(self)
    }

    pub fn finish(self) -> String {
        let line: String = self.chars.into_iter().collect();
        line.trim_end().to_string()
    }
}

pub const RECORD_NAME: Column = Column::new("record name", 0, 6, Align::Left);
pub const SERIAL: Column = Column::new("serial", 6, 5, Align::Right);
pub const ATOM_NAME: Column = Column::new("atom name", 12, 4, Align::Left);
pub const RESIDUE_NAME: Column = Column::new("residue name", 17, 3, Align::Right);
pub const CHAIN_ID: Column = Column::new("chain id", 21, 1, Align::Left);
pub const RESIDUE_NUMBER: Column = Column::new("residue number", 22, 4, Align::Right);
pub const X: Column = Column::new("x", 30, 8, Align::Right);
pub const Y: Column = Column::new("y", 38, 8, Align::Right);
pub const Z: Column = Column::new("z", 46, 8, Align::Right);
pub const OCCUPANCY: Column = Column::new("occupancy", 54, 6, Align::Right);
pub const TEMPERATURE: Column = Column::new("temperature factor", 60, 6, Align::Right);
pub const ELEMENT: Column = Column::new("element", 76, 2, Align::Right);

pub const PARTIAL_CHARGE: Column = Column::new("partial charge", 70, 6, Align::Right);
pub const ATOM_TYPE: Column = Column::new("atom type", 77, 2, Align::Left);

pub const CONECT_ORIGIN: Column = Column::new("bonded atom", 6, 5, Align::Right);
pub const CONECT_PARTNERS: [Column; 4] = [
    Column::new("bonded partner", 11, 5, Align::Right),
    Column::new("bonded partner", 16, 5, Align::Right),
    Column::new("bonded partner", 21, 5, Align::Right),
    Column::new("bonded partner", 26, 5, Align::Right),
];

pub const ATOM_LINE_WIDTH: usize = 80;
