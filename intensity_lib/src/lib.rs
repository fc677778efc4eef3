//! This crate maintains a piecewise-constant "intensity" function over an
//! ordered axis, and supports range updates on it.
//!
//! The function is stored as a list of breakpoints `(position, intensity)`.
//! Each breakpoint gives the intensity for all values between its own
//! position (included) and the position of the next breakpoint (excluded).
//! Before the first breakpoint, and after the last one, the intensity is 0.
//!
//! ```text
//!   intensity
//!      2 |          [----)
//!      1 |     [----)    [----)
//!      0 |-----)              [--------
//!        +-----+----+----+----+-------->
//!             10   20   30   40
//!
//!   breakpoints: [[10,1],[20,2],[30,1],[40,0]]
//! ```
//!
//! Two kinds of updates are supported on a half-open range `[from, to)`:
//!
//!  |Mode               |Effect
//!  |-------------------|----------------------------------------------
//!  |[`UpdateMode::Add`]|adds the amount to the current intensity
//!  |[`UpdateMode::Set`]|replaces the current intensity with the amount
//!
//! After every update, the list is normalized: positions are strictly
//! increasing, the last breakpoint has a zero intensity, no leading
//! breakpoint has a zero intensity, and no two consecutive breakpoints share
//! the same intensity.  As a result, two lists that describe the same
//! function always have the same breakpoints.
//!
//! Invalid requests (for instance `to < from`) are returned as
//! [`errors::Error`] values and leave the list untouched.

pub mod breakpoints;
pub mod errors;
pub mod intensity_list;
pub mod operations;

pub use crate::breakpoints::{Breakpoint, Segment};
pub use crate::errors::Error;
pub use crate::intensity_list::{IntensityList, UpdateMode};
pub use crate::operations::Operation;
