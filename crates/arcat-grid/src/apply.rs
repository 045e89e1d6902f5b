//! Apply a categorization scheme to every lane of a field
//!
//! Each lane is categorized independently; no state is shared between
//! lanes or between calls, so lanes run in any order. With the `parallel`
//! feature they are distributed over the rayon thread pool.

use crate::field::{GridField, Layout};
use arcat_core::{CategorizationConfig, Category, Error, Result};
use arcat_scheme::{CategorizationResult, Categorizer, Scheme};
use num_traits::Float;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Element type of an output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Integer categories
    Integer,
    /// Same float type as the input field
    Float,
}

/// Name and element type of one output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputChannel {
    pub name: &'static str,
    pub kind: ChannelKind,
}

/// The channels produced for every input field, in output order
pub const OUTPUT_CHANNELS: [OutputChannel; 4] = [
    OutputChannel {
        name: "category",
        kind: ChannelKind::Integer,
    },
    OutputChannel {
        name: "cumulative_ivt",
        kind: ChannelKind::Float,
    },
    OutputChannel {
        name: "event_ivt",
        kind: ChannelKind::Float,
    },
    OutputChannel {
        name: "duration",
        kind: ChannelKind::Float,
    },
];

/// Categorized field, same shape as the input
#[derive(Debug, Clone, PartialEq)]
pub struct GridOutput<T> {
    layout: Layout,
    categories: Vec<Category>,
    cumulative_ivt: Vec<T>,
    event_ivt: Vec<T>,
    durations: Vec<T>,
}

impl<T: Float> GridOutput<T> {
    fn zeroed(layout: Layout) -> Self {
        let size = layout.size();
        Self {
            layout,
            categories: vec![0; size],
            cumulative_ivt: vec![T::zero(); size],
            event_ivt: vec![T::zero(); size],
            durations: vec![T::zero(); size],
        }
    }

    fn scatter(&mut self, lane: usize, result: &CategorizationResult<T>) {
        for (step, index) in self.layout.lane_indices(lane).enumerate() {
            self.categories[index] = result.categories()[step];
            self.cumulative_ivt[index] = result.cumulative_ivt()[step];
            self.event_ivt[index] = result.event_ivt()[step];
            self.durations[index] = result.durations()[step];
        }
    }

    /// Geometry shared with the input field
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The `category` channel
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// The `cumulative_ivt` channel
    pub fn cumulative_ivt(&self) -> &[T] {
        &self.cumulative_ivt
    }

    /// The `event_ivt` channel
    pub fn event_ivt(&self) -> &[T] {
        &self.event_ivt
    }

    /// The `duration` channel
    pub fn durations(&self) -> &[T] {
        &self.durations
    }

    /// Look up a floating-point channel by name
    pub fn float_channel(&self, name: &str) -> Option<&[T]> {
        match name {
            "cumulative_ivt" => Some(&self.cumulative_ivt),
            "event_ivt" => Some(&self.event_ivt),
            "duration" => Some(&self.durations),
            _ => None,
        }
    }
}

fn categorize_lane<T: Float>(
    field: &GridField<'_, T>,
    categorizer: &Categorizer,
    lane: usize,
) -> Result<CategorizationResult<T>> {
    categorizer
        .categorize(&field.lane(lane))
        .map_err(|err| match err {
            Error::InvalidInput(msg) => Error::InvalidInput(format!("lane {lane}: {msg}")),
            other => other,
        })
}

/// Categorize every lane of `field` with `categorizer`
///
/// The configuration is checked once up front; any invalid intensity fails
/// the whole call with the offending lane named, and no output is returned.
#[instrument(
    level = "debug",
    skip_all,
    fields(scheme = %categorizer.scheme(), lanes = field.layout().lane_count(), time_len = field.layout().time_len())
)]
pub fn apply_along_time<T>(
    field: &GridField<'_, T>,
    categorizer: &Categorizer,
) -> Result<GridOutput<T>>
where
    T: Float + Send + Sync,
{
    categorizer.config().validate()?;
    categorizer.config().log_warnings();
    let lanes = field.layout().lane_count();

    #[cfg(feature = "parallel")]
    let results: Vec<CategorizationResult<T>> = (0..lanes)
        .into_par_iter()
        .map(|lane| categorize_lane(field, categorizer, lane))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let results: Vec<CategorizationResult<T>> = (0..lanes)
        .map(|lane| categorize_lane(field, categorizer, lane))
        .collect::<Result<_>>()?;

    let mut output = GridOutput::zeroed(field.layout().clone());
    let mut events = 0;
    for (lane, result) in results.iter().enumerate() {
        events += result.event_count();
        output.scatter(lane, result);
    }
    debug!(events, "field categorized");

    Ok(output)
}

/// Categorize every lane of `field` with the selected scheme
pub fn apply_scheme<T>(
    field: &GridField<'_, T>,
    scheme: Scheme,
    config: &CategorizationConfig,
) -> Result<GridOutput<T>>
where
    T: Float + Send + Sync,
{
    apply_along_time(field, &Categorizer::new(scheme, *config))
}

/// Channel names and element types produced by [`apply_along_time`]
pub fn output_channels() -> &'static [OutputChannel] {
    &OUTPUT_CHANNELS
}
