#[cfg(test)]
#[path = "../../tests/unit/som/topology_test.rs"]
mod topology_test;

use super::*;

/// An immutable grid topology: neuron locations, a precomputed table of squared grid
/// distances and discrete neighbor couplings. Built once at network construction.
///
/// NOTE: the distance table is dense (size x size), which assumes the amount of grid
/// cells stays modest.
pub struct GridTopology {
    rows: usize,
    cols: usize,
    locations: Vec<(Float, Float)>,
    distances: Vec<Vec<Float>>,
    neighbors: Vec<Vec<usize>>,
}

impl GridTopology {
    /// Creates a new instance of `GridTopology` for given shape and connection policy.
    pub fn new(rows: usize, cols: usize, policy: ConnectionPolicy) -> Self {
        let size = rows * cols;

        let locations =
            (0..rows).flat_map(|row| (0..cols).map(move |col| (row as Float, col as Float))).collect::<Vec<_>>();

        let mut distances = vec![vec![0.; size]; size];
        for i in 0..size {
            for j in i..size {
                let (i_row, i_col) = locations[i];
                let (j_row, j_col) = locations[j];
                let distance = (i_row - j_row) * (i_row - j_row) + (i_col - j_col) * (i_col - j_col);
                distances[i][j] = distance;
                distances[j][i] = distance;
            }
        }

        let neighbors = match policy {
            // every neuron is a neighborhood candidate, no discrete lists are needed
            ConnectionPolicy::FuncNeighbor => vec![Vec::default(); size],
            _ => create_couplings(rows, cols, policy),
        };

        Self { rows, cols, locations, distances, neighbors }
    }

    /// Returns amount of grid cells.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Returns amount of grid rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns amount of grid columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns a grid location of the cell as (row, col).
    pub fn location(&self, index: usize) -> (Float, Float) {
        self.locations[index]
    }

    /// Returns a squared grid distance between two cells.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        self.distances[from][to]
    }

    /// Returns indices of cells directly coupled with given one. Empty for the
    /// functional neighborhood policy.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.neighbors[index].as_slice()
    }
}

/// Builds discrete neighbor lists from grid adjacency. Out of range candidates are
/// excluded, the row membership check prevents wrap-around at row boundaries.
fn create_couplings(rows: usize, cols: usize, policy: ConnectionPolicy) -> Vec<Vec<usize>> {
    let size = (rows * cols) as isize;
    let cols = cols as isize;

    let mut neighbors = vec![Vec::default(); size as usize];

    for index in 0..size {
        let row = index / cols;
        let (upper_row, lower_row) = (row - 1, row + 1);

        let mut couple = |candidate: isize, expected_row: isize| {
            if candidate >= 0 && candidate < size && candidate / cols == expected_row {
                neighbors[index as usize].push(candidate as usize);
            }
        };

        if matches!(policy, ConnectionPolicy::GridFour | ConnectionPolicy::GridEight) {
            couple(index - cols, upper_row);
            couple(index + cols, lower_row);
        }

        // left and right couplings are shared by all discrete policies
        couple(index - 1, row);
        couple(index + 1, row);

        match policy {
            ConnectionPolicy::GridEight => {
                couple(index - cols - 1, upper_row);
                couple(index - cols + 1, upper_row);
                couple(index + cols - 1, lower_row);
                couple(index + cols + 1, lower_row);
            }
            ConnectionPolicy::Honeycomb => {
                // diagonal couplings depend on row parity
                let (upper_left, upper_right, lower_left, lower_right) = if row % 2 == 0 {
                    (index - cols, index - cols + 1, index + cols, index + cols + 1)
                } else {
                    (index - cols - 1, index - cols, index + cols - 1, index + cols)
                };

                couple(upper_left, upper_row);
                couple(upper_right, upper_row);
                couple(lower_left, lower_row);
                couple(lower_right, lower_row);
            }
            _ => {}
        }
    }

    neighbors
}
