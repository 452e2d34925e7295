//! A pixel-grid shape-tracking engine.
//!
//! `recorte` maintains a set of colored shapes over a fixed-size 2D canvas.
//! Each shape owns a sparse raster and a tight bounding box; the board keeps
//! a per-cell occupancy index (front = topmost). Two operations do the heavy
//! lifting:
//!
//! - [`Board::move_shape`] translates a shape in place, sweeping its raster
//!   in an order that never overwrites a source cell before reading it and
//!   updating per-cell ownership as it goes;
//! - [`Board::cut_through`] flattens overlaps destructively — every cell
//!   keeps only its topmost shape — and re-derives the connected components
//!   of every shape that lost cells, so a shape can survive, split into
//!   several shapes, or vanish.
//!
//! Component labeling runs in a single row-major pass with a union-find over
//! provisional labels; whether diagonal contact joins components is an
//! explicit [`Connectivity`] choice.
//!
//! Rendering, pointer-to-cell translation, and frame timing are the caller's
//! business: the board exposes read-only snapshots ([`Board::topmost_color_at`],
//! [`Board::topmost_shape_at`], [`Board::shape`]) for them.
//!
//! # Examples
//!
//! ```
//! use recorte::{Board, Color};
//!
//! let mut board = Board::new(10, 10);
//! let square = board.make_new_shape_with_color(
//!     |x, y| x < 3 && y < 3,
//!     Color::rgb(200, 40, 40),
//! );
//! let circle = board.make_new_shape_with_color(
//!     |x, y| x.abs_diff(5).pow(2) + y.abs_diff(5).pow(2) <= 4,
//!     Color::rgb(40, 40, 200),
//! );
//!
//! board.move_shape(square, 2, 2).unwrap();
//! board.cut_through();
//!
//! // The square moved last, so it won the overlap.
//! assert_eq!(board.topmost_shape_at(3, 3), Some(square));
//! assert!(!board.shape_raster_at(circle, 3, 3));
//! ```

mod board;
mod bounds;
mod color;
mod components;
mod error;
mod grid;
mod id;
mod raster;
mod shape;

pub use board::Board;
pub use bounds::Bounds;
pub use color::Color;
pub use components::{ComponentMap, Connectivity};
pub use error::{Axis, ConsistencyError, MoveError};
pub use id::ShapeId;
pub use shape::Shape;
