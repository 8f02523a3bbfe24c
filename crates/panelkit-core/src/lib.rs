//! panelkit core types
//!
//! This crate provides the foundational types shared by the panelkit layout
//! engine and its front ends:
//!
//! - **Geometry**: points, sizes, bounds and axes ([`geometry`] module)
//! - **Footprints**: the inside/outside footprint model and the [`footprint::Part`]
//!   contract parts must fulfil ([`footprint`] module)
//! - **Colors**: CSS color handling for debug views ([`color::Color`])

pub mod color;
pub mod footprint;
pub mod geometry;
