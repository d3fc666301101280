//! bezel engine crate.
//!
//! Corner-aware border and fill geometry for UI items: outlines with
//! independently square, round or sliced corners, borders with any subset of
//! sides visible, channel-stepped color math, the style model and its
//! document form, and a recording surface with CPU tessellation.
//!
//! # Drawing an item
//!
//! ```rust
//! use bezel_engine::border::{draw_border, fill_background};
//! use bezel_engine::coords::{Corner, CornerModel, CornerType, Rect, Sides};
//! use bezel_engine::paint::{Argb, Paint, Stroke};
//! use bezel_engine::scene::DrawList;
//!
//! let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
//! let corners = CornerModel { radius: 10, ..CornerModel::default() }.with(Corner::TopLeft, CornerType::Round);
//!
//! let mut list = DrawList::new();
//! fill_background(&mut list, rect, &Paint::Solid(Argb::rgb(240, 240, 240)), &corners, None).unwrap();
//! draw_border(&mut list, rect, &corners, Sides::TOP | Sides::LEFT, &Stroke::solid(Argb::rgb(0, 0, 0)), None).unwrap();
//!
//! assert_eq!(list.fills().count(), 1);
//! assert_eq!(list.strokes().count(), 5);
//! ```

pub mod border;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod persist;
pub mod render;
pub mod scene;
pub mod style;
