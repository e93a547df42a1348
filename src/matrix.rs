//!
//! `Matrix` dense square table of distances
//!
//! Storage is a single row-major `Vec<Dist>` of length `n * n`.
//!
use crate::common::{is_valid_dist, Dist, INF};
use crate::error::{Error, Result};
use approx::AbsDiffEq;
use itertools::Itertools;
use std::ops::{Index, IndexMut};

/// Dense `n x n` matrix of `Dist`
///
/// Used both for adjacency (direct edge weights) and for
/// shortest distances.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n: usize,
    values: Vec<Dist>,
}

impl Matrix {
    ///
    /// Create `n x n` matrix filled with `value`
    ///
    pub fn filled(n: usize, value: Dist) -> Self {
        Matrix {
            n,
            values: vec![value; n * n],
        }
    }
    ///
    /// Create `n x n` matrix whose diagonal is 0 and others are INF,
    /// i.e. the adjacency matrix of a graph with no edges.
    ///
    pub fn unconnected(n: usize) -> Self {
        let mut m = Matrix::filled(n, INF);
        for i in 0..n {
            m[(i, i)] = 0.0;
        }
        m
    }
    ///
    /// Create from nested rows.
    ///
    /// Fails with `MalformedInput` if some row length differs from the number of rows.
    ///
    pub fn from_rows<R: AsRef<[Dist]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(Error::MalformedInput {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
        }
        Ok(Matrix { n, values })
    }
    ///
    /// Create from row-major flat values.
    ///
    /// Fails with `MalformedInput` if `values.len() != n * n`.
    ///
    pub fn from_flat(n: usize, values: Vec<Dist>) -> Result<Self> {
        if values.len() != n * n {
            // report the first row that is incomplete
            let row = values.len() / n.max(1);
            return Err(Error::MalformedInput {
                row,
                expected: n,
                found: values.len().saturating_sub(row * n),
            });
        }
        Ok(Matrix { n, values })
    }
    /// Number of rows (= number of columns = number of nodes)
    pub fn n(&self) -> usize {
        self.n
    }
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
    /// Slice of the i-th row
    pub fn row(&self, i: usize) -> &[Dist] {
        &self.values[i * self.n..(i + 1) * self.n]
    }
    /// Iterator over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Dist]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.values.chunks(self.n.max(1))
    }
    /// Row-major flat view
    pub fn as_slice(&self) -> &[Dist] {
        &self.values
    }
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Dist] {
        &mut self.values
    }
    /// Convert into nested rows
    pub fn to_rows(&self) -> Vec<Vec<Dist>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
    ///
    /// Check that every entry is usable in min-plus arithmetic.
    ///
    /// Fails with `NonFiniteEntry` at the first NaN or `-inf`.
    ///
    pub fn validate_entries(&self) -> Result<()> {
        match self.values.iter().position(|&x| !is_valid_dist(x)) {
            Some(p) => Err(Error::NonFiniteEntry {
                row: p / self.n,
                column: p % self.n,
                value: self.values[p],
            }),
            None => Ok(()),
        }
    }
    ///
    /// Iterator of `(i, j, value)` for all cells
    ///
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Dist)> + '_ {
        let n = self.n;
        self.values
            .iter()
            .enumerate()
            .map(move |(p, &x)| (p / n, p % n, x))
    }
    ///
    /// True if both have the same shape and all entries have the same bit pattern
    ///
    pub fn is_bit_identical(&self, other: &Matrix) -> bool {
        self.n == other.n
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Dist;
    fn index(&self, (i, j): (usize, usize)) -> &Dist {
        &self.values[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Dist {
        &mut self.values[i * self.n + j]
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().join("\t"))?;
        }
        Ok(())
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = Dist;
    fn default_epsilon() -> Dist {
        Dist::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Matrix, epsilon: Dist) -> bool {
        // INF - INF is NaN, so equal values are accepted before the diff
        self.n == other.n
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a == b || a.abs_diff_eq(b, epsilon))
    }
}
