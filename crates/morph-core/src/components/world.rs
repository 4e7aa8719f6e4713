//! World Components
//!
//! The terrain grid, its cells and the four movement directions.

use serde::{Deserialize, Serialize};

use morph_dna::channels;

/// Default grid width in cells
pub const GRID_WIDTH: usize = 30;
/// Default grid height in cells
pub const GRID_HEIGHT: usize = 20;

/// Terrain of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    #[default]
    Empty,
    Light,
    Food,
    Obstacle,
    Pain,
}

impl CellType {
    /// Name as used in channel names and exported documents
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Empty => "empty",
            CellType::Light => "light",
            CellType::Food => "food",
            CellType::Obstacle => "obstacle",
            CellType::Pain => "pain",
        }
    }

    /// Whether agents may step onto this terrain
    pub fn is_passable(&self) -> bool {
        !matches!(self, CellType::Obstacle)
    }
}

/// One grid location. Coordinates are fixed; only the terrain changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    x: i32,
    y: i32,
    #[serde(rename = "type")]
    pub kind: CellType,
}

impl Cell {
    pub fn new(x: i32, y: i32, kind: CellType) -> Self {
        Self { x, y, kind }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Fixed-size terrain grid, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid where every cell has the same terrain
    pub fn filled(width: usize, height: usize, kind: CellType) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x as i32, y as i32, kind));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from rows of terrain. Short rows are padded with `Empty`.
    pub fn from_rows(rows: &[Vec<CellType>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut grid = Self::filled(width, height, CellType::Empty);
        for (y, row) in rows.iter().enumerate() {
            for (x, kind) in row.iter().enumerate() {
                grid.cells[y * width + x].kind = *kind;
            }
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check whether a coordinate lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Terrain at a coordinate, `None` off-grid
    pub fn kind_at(&self, x: i32, y: i32) -> Option<CellType> {
        self.cell(x, y).map(|c| c.kind)
    }

    /// Overwrite the terrain of a cell. Returns false for off-grid coordinates.
    pub fn set(&mut self, x: i32, y: i32, kind: CellType) -> bool {
        match self.cell_mut(x, y) {
            Some(cell) => {
                cell.kind = kind;
                true
            }
            None => false,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells with the given terrain
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }
}

/// Movement direction, listed in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in tie-break order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Grid offset `(dx, dy)`; y grows downward
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Action channel that drives this direction
    pub fn channel(&self) -> &'static str {
        match self {
            Direction::Up => channels::MOVE_UP,
            Direction::Down => channels::MOVE_DOWN,
            Direction::Left => channels::MOVE_LEFT,
            Direction::Right => channels::MOVE_RIGHT,
        }
    }

    /// Coordinate one step away from `(x, y)`
    pub fn step_from(&self, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx, y + dy)
    }
}
