//! # chart-carousel
//!
//! Slide carousel with a synchronized thumbnail strip.
//!
//! This crate provides platform-agnostic navigation logic for:
//! - Stepping forward and backward through slides, wrapping at either end
//! - Jumping directly to a slide from its thumbnail
//! - Keeping a fixed-width thumbnail window in view without overscrolling
//! - Binding the whole thing to a document (with optional web support)
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for [`CarouselConfig`]
//! - `toml` - Load [`CarouselConfig`] from TOML
//! - `web` - Enable DOM binding via `web-sys`
//!
//! ## Example
//!
//! ```rust,ignore
//! use chart_carousel::{CarouselController, Direction};
//!
//! // Any type implementing SlideView can be driven
//! let mut carousel = CarouselController::new(my_view);
//!
//! carousel.advance(Direction::Next);
//! carousel.select_thumbnail(3);
//! assert_eq!(carousel.current_index(), 3);
//! ```

mod config;
mod controller;
mod error;
mod view;
mod window;

#[cfg(feature = "web")]
pub mod web;

pub use config::CarouselConfig;
pub use controller::{CarouselController, Direction};
pub use error::CarouselError;
pub use view::SlideView;
pub use window::{ThumbnailWindow, WindowMove};

#[cfg(feature = "web")]
pub use web::ChartCarousel;
