//! Table parameters and their widget ranges

use serde::{Deserialize, Serialize};

use crate::color::TableColor;
use crate::constants::{DEFAULT_THICKNESS, DEFAULT_WIDTH};

/// Snapshot of every user-adjustable table parameter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableParameters {
    /// Top width along x
    pub width: f32,
    /// Top thickness along y ("height" in the control panel)
    pub thickness: f32,
    /// Top color
    pub color: TableColor,
}

impl Default for TableParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            thickness: DEFAULT_THICKNESS,
            color: TableColor::default(),
        }
    }
}

/// Range of a numeric slider
///
/// The store accepts any value; this is what the control panel offers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

/// Width slider range
pub const WIDTH_RANGE: ParameterRange = ParameterRange {
    min: 1.0,
    max: 5.0,
    step: 0.1,
    default: DEFAULT_WIDTH,
};

/// Thickness slider range
pub const THICKNESS_RANGE: ParameterRange = ParameterRange {
    min: 0.1,
    max: 0.3,
    step: 0.1,
    default: DEFAULT_THICKNESS,
};

impl ParameterRange {
    /// Whether `value` lies inside the range (bounds inclusive)
    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamp to the range and round to the nearest step from `min`
    pub fn snap(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max) as f64;
        let steps = ((clamped - self.min as f64) / self.step as f64).round();
        self.position(steps).clamp(self.min, self.max)
    }

    /// Value `steps` steps above `min`, computed on the decimal grid so that
    /// 1.0 + 13 * 0.1 comes out as the float nearest 2.3
    fn position(&self, steps: f64) -> f32 {
        let scale = 10f64.powi(self.decimals());
        let min = (self.min as f64 * scale).round();
        let step = (self.step as f64 * scale).round();
        ((min + steps * step) / scale) as f32
    }

    /// Decimal places needed to write `step`
    fn decimals(&self) -> i32 {
        let step = self.step as f64;
        (0..6)
            .find(|&places| {
                let scaled = step * 10f64.powi(places);
                (scaled - scaled.round()).abs() < 1e-6
            })
            .unwrap_or(6)
    }

    /// Number of distinct slider positions
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Every slider position from `min` to `max`
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.positions()).map(|i| self.position(i as f64).min(self.max))
    }

    /// Range as an inclusive float range, for widgets
    pub fn as_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min..=self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_defaults() {
        let params = TableParameters::default();
        assert_eq!(params.width, 2.0);
        assert_eq!(params.thickness, 0.1);
        assert_eq!(params.color, TableColor::Brown);
    }

    #[test]
    fn test_defaults_lie_inside_slider_ranges() {
        let params = TableParameters::default();
        assert!(WIDTH_RANGE.contains(params.width));
        assert!(THICKNESS_RANGE.contains(params.thickness));
    }

    #[test]
    fn test_snap_clamps_and_rounds() {
        assert_eq!(WIDTH_RANGE.snap(0.2), 1.0);
        assert_eq!(WIDTH_RANGE.snap(9.0), 5.0);
        assert_abs_diff_eq!(WIDTH_RANGE.snap(2.34), 2.3, epsilon = 1e-5);
        assert_abs_diff_eq!(THICKNESS_RANGE.snap(0.26), 0.3, epsilon = 1e-5);
        assert_eq!(THICKNESS_RANGE.snap(f32::NAN), THICKNESS_RANGE.default);
    }

    #[test]
    fn test_grid_values_are_exact_decimals() {
        for range in [WIDTH_RANGE, THICKNESS_RANGE] {
            for (i, value) in range.values().enumerate() {
                let literal: f32 = format!("{:.1}", range.min as f64 + i as f64 * 0.1)
                    .parse()
                    .unwrap();
                assert_eq!(value, literal);
                assert_eq!(range.snap(value), literal);
            }
        }
        assert_eq!(WIDTH_RANGE.snap(2.3), 2.3);
        assert_eq!(WIDTH_RANGE.snap(2.3000002), 2.3);
        assert_eq!(WIDTH_RANGE.snap(4.1), 4.1);
    }

    #[test]
    fn test_slider_positions() {
        assert_eq!(WIDTH_RANGE.positions(), 41);
        assert_eq!(THICKNESS_RANGE.positions(), 3);
        let values: Vec<f32> = THICKNESS_RANGE.values().collect();
        assert_eq!(values.len(), 3);
        assert_abs_diff_eq!(values[0], 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(values[2], 0.3, epsilon = 1e-6);
        assert!(WIDTH_RANGE.values().all(|v| WIDTH_RANGE.contains(v)));
    }

    #[test]
    fn test_parameters_serialize_with_color_name() {
        let params = TableParameters {
            width: 3.5,
            thickness: 0.2,
            color: TableColor::RoyalBlue,
        };
        let text = ron::to_string(&params).unwrap();
        assert!(text.contains("royalblue"));
        let back: TableParameters = ron::from_str(&text).unwrap();
        assert_eq!(back, params);
    }
}
