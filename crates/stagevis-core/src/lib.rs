//! Stagevis Core Types and Definitions
//!
//! This crate provides the drawing layer used by stagevis to turn a problem
//! description into an SVG image. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Shape primitives and the append-only [`draw::Canvas`]

pub mod color;
pub mod draw;
pub mod geometry;
