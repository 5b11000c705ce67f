//! User interface for Bookworm
//!
//! This crate provides the UI layer: serializable component props that the
//! frontend renders, two-way value bindings, and the star rating control.
//!
//! # Modules
//!
//! - [`theme`] - Color representation and system colors
//! - [`tokens`] - Design tokens (spacing)
//! - [`components`] - UI component library
//! - [`binding`] - Two-way bindings to caller-owned values
//! - [`rating`] - Star rating control
//!
//! # Example
//!
//! ```rust
//! use app_ui::{Binding, Glyph, RatingConfig, RatingControl, StateBinding};
//!
//! let rating = StateBinding::new(0);
//! let control = RatingControl::new(
//!     RatingConfig::default()
//!         .with_label("Rating")
//!         .with_off_image(Glyph::system("star")),
//! );
//!
//! let view = control.render(&rating);
//! let handler = view.slot(3).and_then(|slot| slot.handler()).unwrap();
//! control.dispatch(handler, &rating).unwrap();
//! assert_eq!(rating.get(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod binding;
pub mod components;
pub mod rating;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use binding::{Binding, ChannelBinding, ConstantBinding, FnBinding, RatingChanged, StateBinding};

pub use components::{
    ComponentId, Container, Element, EventHandler, FlexDirection, Glyph, Icon, Text,
};

pub use rating::{RatingConfig, RatingControl, RatingError, RatingSlot, RatingView};

pub use theme::{system, Color};
