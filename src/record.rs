//! Detection records and their fixed-width rendering.
//!
//! A `Detection` is one row of source-extraction output: position, flux,
//! pixel area, peak flux, and elongation. The filter derives one extra
//! column, the instrumental magnitude, and renders all seven values in a
//! fixed column layout consumed by the downstream pipeline steps.

/// Smallest flux the magnitude conversion accepts. A non-positive flux has
/// no logarithm, so the conversion substitutes this constant instead.
pub const FLUX_MIN: f64 = 1.0;

/// One detection record: six measured fields, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub x: f64,
    pub y: f64,
    pub flux: f64,
    pub area: f64,
    pub flux_max: f64,
    pub elongation: f64,
}

impl Detection {
    pub fn new(x: f64, y: f64, flux: f64, area: f64, flux_max: f64, elongation: f64) -> Self {
        Self {
            x,
            y,
            flux,
            area,
            flux_max,
            elongation,
        }
    }

    /// Instrumental magnitude, `-2.5 * log10(flux)`.
    ///
    /// A non-positive flux falls back to [`FLUX_MIN`], which pins the
    /// fallback magnitude at `-0.0` regardless of the measured value.
    pub fn magnitude(&self) -> f64 {
        if self.flux > 0.0 {
            -2.5 * self.flux.log10()
        } else {
            -2.5 * FLUX_MIN.log10()
        }
    }

    /// Render the record plus its magnitude as one fixed-width line.
    ///
    /// Seven right-justified columns, newline-terminated, no separators
    /// beyond the width padding:
    /// `x` 8.2, `y` 8.2, `flux` 13.2, `area` 9.1, `flux_max` 10.2,
    /// `elongation` 6.2, `magnitude` 10.2.
    pub fn to_fixed_line(&self) -> String {
        format!(
            "{:8.2}{:8.2}{:13.2}{:9.1}{:10.2}{:6.2}{:10.2}\n",
            self.x,
            self.y,
            self.flux,
            self.area,
            self.flux_max,
            self.elongation,
            self.magnitude()
        )
    }
}
