//! Chart series: one independently chartable dataset returned by the
//! backend, and the canvas it is drawn on.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PayloadError;

/// A single series from the chart endpoint.
///
/// `config` is the whole series object, handed unchanged to the charting
/// library.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Property name in the response object.
    pub key: String,
    pub title: String,
    pub config: Value,
}

impl ChartSeries {
    /// Interpret one `key: value` property of the response.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::MissingTitle`] when `value` is not an object
    /// with a string `title`.
    pub fn from_entry(key: &str, value: &Value) -> Result<Self, PayloadError> {
        let title = value
            .as_object()
            .and_then(|obj| obj.get("title"))
            .and_then(Value::as_str)
            .ok_or_else(|| PayloadError::MissingTitle {
                key: key.to_owned(),
            })?;

        Ok(Self {
            key: key.to_owned(),
            title: title.to_owned(),
            config: value.clone(),
        })
    }

    /// Split a response object into per-entry results, in document order.
    ///
    /// A malformed entry does not invalidate its siblings.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::NotAnObject`] when the response is not a
    /// JSON object.
    pub fn parse_all(response: &Value) -> Result<Vec<Result<Self, PayloadError>>, PayloadError> {
        let map = response.as_object().ok_or(PayloadError::NotAnObject)?;
        Ok(map
            .iter()
            .map(|(key, value)| Self::from_entry(key, value))
            .collect())
    }
}

/// Pixel size of a chart canvas. A missing dimension keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

/// A `<canvas>` to create for one series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Element id; the series title. Not unique if titles repeat.
    pub id: String,
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    #[must_use]
    pub fn for_series(series: &ChartSeries, size: CanvasSize) -> Self {
        Self {
            id: series.title.clone(),
            width: size.width,
            height: size.height,
        }
    }
}
