use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::math::DenseMatrix;

/// Matrix dimensions.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<(usize, usize)> for Shape {
    fn from(value: (usize, usize)) -> Self {
        Shape::new(value.0, value.1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl FromStr for Shape {
    type Err = String;

    /// Accepts `"RxC"`, `"RXC"` or `"R,C"`, with optional surrounding spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (rows, columns) = lowered
            .split_once('x')
            .or_else(|| lowered.split_once(','))
            .ok_or_else(|| format!("Invalid shape: {}. Expected ROWSxCOLUMNS, e.g. 3x4", s))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("Invalid shape: {}. {}", s, e))
        };
        Ok(Shape::new(parse(rows)?, parse(columns)?))
    }
}

/// Recipe for building a `DenseMatrix`.
///
/// `values` seeds the buffer in row-major order and is padded with `fill`
/// (or `T::default()` when `fill` is absent). A longer `values` list is
/// truncated to the shape.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MatrixConfig<T> {
    #[serde(flatten)]
    pub shape: Shape,

    #[serde(default)]
    pub fill: Option<T>,

    #[serde(default)]
    pub values: Vec<T>,
}

impl<T> MatrixConfig<T> {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            fill: None,
            values: Vec::new(),
        }
    }

    pub fn with_fill(mut self, fill: T) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_values(mut self, values: Vec<T>) -> Self {
        self.values = values;
        self
    }
}

impl<T: DeserializeOwned> MatrixConfig<T> {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse matrix config JSON")
    }
}

impl<T: Clone + Default> MatrixConfig<T> {
    pub fn build(&self) -> DenseMatrix<T> {
        if self.values.len() > self.shape.len() {
            log::warn!(
                "{} initial values given for a {} matrix; truncating to {}",
                self.values.len(),
                self.shape,
                self.shape.len()
            );
        }
        let fill = self.fill.clone().unwrap_or_default();
        DenseMatrix::with_values(
            self.shape.rows,
            self.shape.columns,
            self.values.iter().cloned(),
            fill,
        )
    }
}
