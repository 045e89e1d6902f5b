//! Row-major N-dimensional fields with a designated time axis
//!
//! A field of shape `[d0, d1, ..., dk]` with time axis `t` is viewed as a
//! set of independent *lanes*: one 1-D time series of length `dt` for every
//! index combination of the other axes. Lane `l` starts at
//!
//! ```text
//! (l / stride) * dt * stride + (l % stride)
//! ```
//!
//! and steps by `stride`, where `stride` is the product of the axis lengths
//! after `t`.

use arcat_core::{ensure_same_len, Error, Result};

/// Lane geometry shared by input fields and outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    shape: Vec<usize>,
    time_axis: usize,
    stride: usize,
}

impl Layout {
    /// Describe a row-major array of `shape` with time along `time_axis`
    pub fn new(shape: &[usize], time_axis: usize) -> Result<Self> {
        if time_axis >= shape.len() {
            return Err(Error::InvalidInput(format!(
                "time axis {time_axis} out of range for {}-dimensional field",
                shape.len()
            )));
        }
        Ok(Self {
            shape: shape.to_vec(),
            time_axis,
            stride: shape[time_axis + 1..].iter().product(),
        })
    }

    /// Axis lengths
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Index of the time axis
    pub fn time_axis(&self) -> usize {
        self.time_axis
    }

    /// Number of timesteps per lane
    pub fn time_len(&self) -> usize {
        self.shape[self.time_axis]
    }

    /// Total number of elements
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Number of independent time series
    pub fn lane_count(&self) -> usize {
        self.shape
            .iter()
            .enumerate()
            .filter(|&(axis, _)| axis != self.time_axis)
            .map(|(_, &len)| len)
            .product()
    }

    /// Flat indices of lane `lane`, in time order
    pub fn lane_indices(&self, lane: usize) -> impl Iterator<Item = usize> {
        let stride = self.stride;
        let origin = (lane / stride) * self.time_len() * stride + lane % stride;
        (0..self.time_len()).map(move |step| origin + step * stride)
    }
}

/// A borrowed IVT field
#[derive(Debug, Clone)]
pub struct GridField<'a, T> {
    data: &'a [T],
    layout: Layout,
}

impl<'a, T: Copy> GridField<'a, T> {
    /// Wrap a flat row-major buffer
    ///
    /// Fails if `time_axis` is out of range or the buffer length differs
    /// from the product of `shape`.
    pub fn new(data: &'a [T], shape: &[usize], time_axis: usize) -> Result<Self> {
        let layout = Layout::new(shape, time_axis)?;
        ensure_same_len("grid buffer", layout.size(), data.len())?;
        Ok(Self { data, layout })
    }

    /// A single time series treated as a one-dimensional field
    pub fn from_series(data: &'a [T]) -> Self {
        Self {
            data,
            layout: Layout {
                shape: vec![data.len()],
                time_axis: 0,
                stride: 1,
            },
        }
    }

    /// The field's geometry
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The underlying buffer
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Copy lane `lane` out as a contiguous series
    pub fn lane(&self, lane: usize) -> Vec<T> {
        self.layout
            .lane_indices(lane)
            .map(|index| self.data[index])
            .collect()
    }
}
