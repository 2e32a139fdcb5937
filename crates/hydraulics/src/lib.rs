//! Steady-uniform flow hydraulics for circular conduits and open channels.
//!
//! # Pipeline
//!
//! 1. **Geometry**: trapezoidal sections ([`ChannelSection`]) degenerate to
//!    rectangular (`z = 0`) and triangular (`b = 0`) shapes.
//! 2. **Direct formulas**: [`conveyance`], [`froude_number`],
//!    [`bed_shear_stress`], [`full_circular_capacity`].
//! 3. **Sizing**: [`size_circular_conduit`] scans commercial diameters;
//!    [`normal_depth`], [`critical_depth`] and [`required_base_width`] invert
//!    Manning / Froude by bisection.
//!
//! Direct formulas never fail: degenerate inputs (dry channel, zero slope)
//! yield `0.0`, `NaN` or `inf` by convention. Searches that cannot find a
//! solution return `None`.
//!
//! # Glossary
//!
//! - **n**: Manning roughness coefficient
//! - **S**: longitudinal slope (m/m)
//! - **z**: side slope, horizontal : vertical
//! - **R**: hydraulic radius A/P
//! - **D**: hydraulic depth A/T
//!
//! # Quick Start
//!
//! ```
//! use pluvia_hydraulics::{ChannelSection, conveyance, normal_depth, size_circular_conduit};
//!
//! let section = ChannelSection::new(2.0, 0.0, 1.0);
//! let q = conveyance(section.area(), section.wetted_perimeter(), 0.001, 0.013);
//! assert!((q - 3.07).abs() < 0.03);
//!
//! let y = normal_depth(q, 2.0, 0.0, 0.001, 0.013).unwrap();
//! assert!((y - 1.0).abs() < 1e-3);
//!
//! let design = size_circular_conduit(0.3, 0.013, 0.01, 0.1, 2.0, 0.1).unwrap();
//! assert!((design.diameter() - 0.5).abs() < 1e-9);
//! ```

mod channel;
mod conduit;
mod constants;
mod error;
mod geometry;
mod manning;
mod material;

pub use channel::{
    BASE_WIDTH_RANGE, ChannelDesign, DEPTH_RANGE, SearchRange, analyse_channel, critical_depth,
    critical_depth_in, normal_depth, normal_depth_in, required_base_width, required_base_width_in,
};
pub use conduit::{ConduitDesign, size_circular_conduit};
pub use constants::{GRAVITY, WATER_DENSITY};
pub use error::HydraulicsError;
pub use geometry::{ChannelSection, circular_full_area, circular_full_hydraulic_radius};
pub use manning::{FlowRegime, bed_shear_stress, conveyance, froude_number, full_circular_capacity};
pub use material::Material;
