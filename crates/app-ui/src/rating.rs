//! Star rating control
//!
//! Renders `maximum_rating` tappable icons in a single row, highlights the
//! ones up to the bound rating and writes the tapped slot number back
//! through the [`Binding`].
//!
//! ```rust
//! use app_ui::binding::{Binding, StateBinding};
//! use app_ui::rating::{RatingConfig, RatingControl};
//!
//! let rating = StateBinding::new(4);
//! let control = RatingControl::new(RatingConfig::default());
//!
//! let view = control.render(&rating);
//! assert_eq!(view.on_count(), 4);
//!
//! view.slots[1].tap(&rating);
//! assert_eq!(rating.get(), 2);
//! ```

use crate::binding::Binding;
use crate::components::{ComponentId, Container, Element, EventHandler, Glyph, Icon, Text};
use crate::theme::{system, Color};
use crate::tokens::spacing;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Default component ID, used as the event handler prefix
pub const DEFAULT_RATING_ID: &str = "rating";

/// Symbol shown for selected slots unless overridden
pub const DEFAULT_ON_GLYPH: &str = "star.fill";

/// Default number of slots
pub const DEFAULT_MAXIMUM_RATING: i64 = 5;

/// Largest `maximum_rating` accepted from a JSON configuration
pub const MAX_CONFIGURED_SLOTS: i64 = 100;

const SELECT_SEGMENT: &str = ".select.";

/// Rating routing errors
#[derive(Debug, Error)]
pub enum RatingError {
    /// Handler ID was not produced by this control
    #[error("Unknown event handler: {0}")]
    UnknownHandler(String),

    /// Slot number is not rendered
    #[error("Slot {number} is outside 1..={maximum}")]
    SlotOutOfRange {
        /// Requested slot
        number: i64,
        /// Configured maximum rating
        maximum: i64,
    },

    /// Configuration asks for more slots than a host may request
    #[error("Configured maximum rating {maximum} exceeds {limit}")]
    TooManySlots {
        /// Requested maximum rating
        maximum: i64,
        /// Accepted upper bound
        limit: i64,
    },

    /// Configuration could not be parsed
    #[error("Invalid rating configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for rating operations
pub type Result<T> = std::result::Result<T, RatingError>;

// =============================================================================
// Configuration
// =============================================================================

/// Display options for a [`RatingControl`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Gap between adjacent row elements
    pub space_between: f32,
    /// Leading text; omitted when empty
    pub label: String,
    /// Number of selectable slots
    pub maximum_rating: i64,
    /// Glyph for unselected slots (falls back to `on_image`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub off_image: Option<Glyph>,
    /// Glyph for selected slots
    pub on_image: Glyph,
    /// Tint for unselected slots
    pub off_colour: Color,
    /// Tint for selected slots
    pub on_colour: Color,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            space_between: spacing::SPACE_RATING,
            label: String::new(),
            maximum_rating: DEFAULT_MAXIMUM_RATING,
            off_image: None,
            on_image: Glyph::system(DEFAULT_ON_GLYPH),
            off_colour: system::GRAY.to_string(),
            on_colour: system::YELLOW.to_string(),
        }
    }
}

impl RatingConfig {
    /// Parse a host-supplied JSON configuration; missing fields keep defaults
    ///
    /// Rejects a `maximum_rating` above [`MAX_CONFIGURED_SLOTS`]. Configs
    /// built in code are not bounded.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check_slot_limit()?;
        Ok(config)
    }

    fn check_slot_limit(&self) -> Result<()> {
        if self.maximum_rating > MAX_CONFIGURED_SLOTS {
            tracing::warn!(maximum = self.maximum_rating, "rating configuration rejected");
            return Err(RatingError::TooManySlots {
                maximum: self.maximum_rating,
                limit: MAX_CONFIGURED_SLOTS,
            });
        }
        Ok(())
    }

    /// Set the gap between row elements
    pub fn with_space_between(mut self, space: f32) -> Self {
        self.space_between = space;
        self
    }

    /// Set the leading label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the number of slots
    pub fn with_maximum_rating(mut self, maximum: i64) -> Self {
        self.maximum_rating = maximum;
        self
    }

    /// Set the glyph for unselected slots
    pub fn with_off_image(mut self, glyph: Glyph) -> Self {
        self.off_image = Some(glyph);
        self
    }

    /// Set the glyph for selected slots
    pub fn with_on_image(mut self, glyph: Glyph) -> Self {
        self.on_image = glyph;
        self
    }

    /// Set the tint for unselected slots
    pub fn with_off_colour(mut self, colour: impl Into<Color>) -> Self {
        self.off_colour = colour.into();
        self
    }

    /// Set the tint for selected slots
    pub fn with_on_colour(mut self, colour: impl Into<Color>) -> Self {
        self.on_colour = colour.into();
        self
    }

    /// Whether slot `number` is highlighted at `rating`
    pub fn is_on(number: i64, rating: i64) -> bool {
        number <= rating
    }

    /// Glyph for slot `number` at `rating`
    pub fn glyph_for(&self, number: i64, rating: i64) -> &Glyph {
        if Self::is_on(number, rating) {
            &self.on_image
        } else {
            self.off_image.as_ref().unwrap_or(&self.on_image)
        }
    }

    /// Tint for slot `number` at `rating`
    pub fn tint_for(&self, number: i64, rating: i64) -> &Color {
        if Self::is_on(number, rating) {
            &self.on_colour
        } else {
            &self.off_colour
        }
    }
}

// =============================================================================
// Rendered Output
// =============================================================================

/// One rendered slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSlot {
    /// 1-based slot number; also the value written on tap
    pub number: i64,
    /// Whether the slot is highlighted
    pub is_on: bool,
    /// Icon the host draws
    pub icon: Icon,
}

impl RatingSlot {
    /// Tap handler: write this slot's number through the binding
    ///
    /// The write happens even when the value is already equal.
    pub fn tap(&self, binding: &impl Binding) {
        let previous = binding.get();
        binding.set(self.number);
        tracing::debug!(previous, rating = self.number, "rating slot tapped");
    }

    /// Event handler ID the host reports back on tap
    pub fn handler(&self) -> Option<&str> {
        self.icon.on_press.as_deref()
    }
}

/// Description produced by one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingView {
    /// Control ID
    pub id: ComponentId,
    /// Gap between adjacent elements
    pub gap: f32,
    /// Leading label, present only when non-empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<Text>,
    /// Slots in ascending order
    pub slots: Vec<RatingSlot>,
}

impl RatingView {
    /// Row contents in display order: label first, then icons
    pub fn elements(&self) -> Vec<Element> {
        self.label
            .iter()
            .cloned()
            .map(Element::from)
            .chain(self.slots.iter().map(|slot| Element::from(slot.icon.clone())))
            .collect()
    }

    /// Single horizontal row holding every element
    pub fn to_container(&self) -> Container {
        let row = Container::row().with_id(self.id.clone()).with_gap(self.gap);
        let row = match &self.label {
            Some(label) => row.child(label.clone()),
            None => row,
        };
        row.with_children(self.slots.iter().map(|slot| slot.icon.clone()))
    }

    /// Serialize the row for the frontend
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_container())?)
    }

    /// Look up a slot by number
    pub fn slot(&self, number: i64) -> Option<&RatingSlot> {
        self.slots.iter().find(|slot| slot.number == number)
    }

    /// Number of highlighted slots
    pub fn on_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_on).count()
    }
}

// =============================================================================
// Control
// =============================================================================

/// Stateless star rating widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingControl {
    /// Component ID
    pub id: ComponentId,
    /// Display options
    #[serde(default)]
    pub config: RatingConfig,
}

impl Default for RatingControl {
    fn default() -> Self {
        Self::new(RatingConfig::default())
    }
}

impl RatingControl {
    /// Create a control with the given options
    pub fn new(config: RatingConfig) -> Self {
        Self {
            id: DEFAULT_RATING_ID.to_string(),
            config,
        }
    }

    /// Parse a control (ID plus options) from JSON, bounded like
    /// [`RatingConfig::from_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let control: Self = serde_json::from_str(json)?;
        control.config.check_slot_limit()?;
        Ok(control)
    }

    /// Set the component ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Slot numbers rendered by this control; empty when the maximum is below 1
    pub fn slot_numbers(&self) -> RangeInclusive<i64> {
        1..=self.config.maximum_rating
    }

    /// Event handler ID attached to slot `number`
    pub fn handler_for(&self, number: i64) -> EventHandler {
        format!("{}{}{}", self.id, SELECT_SEGMENT, number)
    }

    /// Build the row for the binding's current value
    pub fn render(&self, binding: &impl Binding) -> RatingView {
        let rating = binding.get();
        let config = &self.config;

        let label = if config.label.is_empty() {
            None
        } else {
            Some(Text::new(config.label.clone()).with_id(format!("{}.label", self.id)))
        };

        let slots: Vec<RatingSlot> = self
            .slot_numbers()
            .map(|number| {
                let icon = Icon::new(config.glyph_for(number, rating).clone())
                    .with_id(format!("{}.slot.{}", self.id, number))
                    .with_color(config.tint_for(number, rating).clone())
                    .on_press(self.handler_for(number));
                RatingSlot {
                    number,
                    is_on: RatingConfig::is_on(number, rating),
                    icon,
                }
            })
            .collect();

        tracing::trace!(
            id = %self.id,
            rating,
            slots = slots.len(),
            labelled = label.is_some(),
            "rendered rating row"
        );

        RatingView {
            id: self.id.clone(),
            gap: config.space_between,
            label,
            slots,
        }
    }

    /// Route a tap on slot `number`; returns the value written
    pub fn select(&self, number: i64, binding: &impl Binding) -> Result<i64> {
        if !self.slot_numbers().contains(&number) {
            tracing::warn!(id = %self.id, number, "tap on slot that is not rendered");
            return Err(RatingError::SlotOutOfRange {
                number,
                maximum: self.config.maximum_rating,
            });
        }

        let previous = binding.get();
        binding.set(number);
        tracing::debug!(id = %self.id, previous, rating = number, "rating selected");
        Ok(number)
    }

    /// Route a tap by the event handler ID the host received
    pub fn dispatch(&self, handler: &str, binding: &impl Binding) -> Result<i64> {
        let number = self.parse_handler(handler).ok_or_else(|| {
            tracing::warn!(id = %self.id, handler, "unrecognised rating handler");
            RatingError::UnknownHandler(handler.to_string())
        })?;
        self.select(number, binding)
    }

    /// Only IDs spelled exactly as [`Self::handler_for`] writes them match
    fn parse_handler(&self, handler: &str) -> Option<i64> {
        let number: i64 = handler
            .strip_prefix(self.id.as_str())?
            .strip_prefix(SELECT_SEGMENT)?
            .parse()
            .ok()?;
        (handler == self.handler_for(number)).then_some(number)
    }
}
