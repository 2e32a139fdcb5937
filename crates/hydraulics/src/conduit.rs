//! Circular conduit sizing by diameter scan.

use serde::Serialize;
use tracing::debug;

use crate::manning::full_circular_capacity;

/// Slack added to the upper scan bound so that `d_max` itself is reached
/// despite floating-point steps.
const SCAN_SLACK: f64 = 1e-9;

/// A selected conduit diameter and its full-section capacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConduitDesign {
    diameter: f64,
    capacity: f64,
}

impl ConduitDesign {
    /// Selected diameter (m).
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Full-section capacity at the selected diameter (m³/s).
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Flow velocity when carrying `flow` full-bore (m/s).
    pub fn velocity(&self, flow: f64) -> f64 {
        let area = crate::geometry::circular_full_area(self.diameter);
        if area <= 0.0 { 0.0 } else { flow / area }
    }
}

/// Finds the smallest diameter in `min_diameter, min_diameter + step, ...,
/// <= max_diameter` whose full-section capacity meets or exceeds
/// `design_flow`.
///
/// This is a forward linear scan, not a bisection: diameters are treated as
/// a discrete commercial series and the first adequate one wins, so a
/// diameter whose capacity equals the demand exactly is accepted.
///
/// Returns `None` if no diameter in range is adequate, or if `step` is not
/// finite and positive.
pub fn size_circular_conduit(
    design_flow: f64,
    roughness: f64,
    slope: f64,
    min_diameter: f64,
    max_diameter: f64,
    step: f64,
) -> Option<ConduitDesign> {
    if !step.is_finite() || step <= 0.0 || !min_diameter.is_finite() || !max_diameter.is_finite()
    {
        return None;
    }

    // d = d_min + k * step avoids the drift of repeated addition.
    let mut k: u64 = 0;
    loop {
        let diameter = min_diameter + k as f64 * step;
        if diameter > max_diameter + SCAN_SLACK {
            break;
        }
        let capacity = full_circular_capacity(diameter, roughness, slope);
        if capacity >= design_flow {
            debug!(diameter, capacity, design_flow, "conduit diameter selected");
            return Some(ConduitDesign { diameter, capacity });
        }
        k += 1;
    }

    debug!(
        design_flow,
        min_diameter, max_diameter, "no diameter in range meets demand"
    );
    None
}
