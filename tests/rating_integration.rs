//! Rating control integration tests
//!
//! Drives the control the way a host frontend does: render, serialize,
//! route taps back by handler ID, render again.

use bookworm::app_ui::{
    Binding, ChannelBinding, Element, FnBinding, Glyph, RatingChanged, RatingConfig,
    RatingControl, RatingError, StateBinding,
};
use std::cell::RefCell;

/// Book record owning the rating, as the add-book screen does
#[derive(Debug, Default)]
struct Book {
    title: String,
    rating: i64,
}

#[test]
fn test_host_round_trip_through_json_handlers() {
    bookworm::init_tracing();

    let control = RatingControl::new(RatingConfig::default().with_label("Rating"));
    let rating = StateBinding::new(4);

    let rendered = control.render(&rating).to_json().unwrap();
    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    let children = json["children"].as_array().unwrap();
    assert_eq!(children.len(), 6);
    assert_eq!(children[0]["type"], "text");

    // Host reports a tap on the second icon
    let handler = children[2]["on_press"].as_str().unwrap();
    assert_eq!(control.dispatch(handler, &rating).unwrap(), 2);

    let view = control.render(&rating);
    assert_eq!(view.on_count(), 2);
}

#[test]
fn test_fn_binding_over_owner_model() {
    let book = RefCell::new(Book {
        title: "Dune".to_string(),
        rating: 3,
    });
    let binding = FnBinding::new(|| book.borrow().rating, |v| book.borrow_mut().rating = v);
    let control = RatingControl::default();

    let view = control.render(&binding);
    assert_eq!(view.on_count(), 3);

    view.slot(5).unwrap().tap(&binding);
    assert_eq!(book.borrow().rating, 5);
    assert_eq!(book.borrow().title, "Dune");
}

#[test]
fn test_out_of_range_value_renders_without_clamping() {
    let control = RatingControl::default();
    let rating = StateBinding::new(99);

    assert_eq!(control.render(&rating).on_count(), 5);
    assert_eq!(rating.get(), 99);

    rating.set(-2);
    assert_eq!(control.render(&rating).on_count(), 0);
    assert_eq!(rating.get(), -2);
}

#[test]
fn test_custom_glyphs_and_tints() {
    let control = RatingControl::new(
        RatingConfig::default()
            .with_maximum_rating(3)
            .with_on_image(Glyph::asset("heart.fill"))
            .with_off_image(Glyph::asset("heart"))
            .with_on_colour("#FF2D55")
            .with_off_colour("#C7C7CC"),
    );
    let view = control.render(&StateBinding::new(1));

    let icons: Vec<(String, String)> = view
        .elements()
        .into_iter()
        .filter_map(|element| match element {
            Element::Icon(icon) => Some((icon.glyph.name().to_string(), icon.color.unwrap_or_default())),
            _ => None,
        })
        .collect();

    assert_eq!(
        icons,
        vec![
            ("heart.fill".to_string(), "#FF2D55".to_string()),
            ("heart".to_string(), "#C7C7CC".to_string()),
            ("heart".to_string(), "#C7C7CC".to_string()),
        ]
    );
}

#[test]
fn test_zero_slots_have_no_tap_targets() {
    let control = RatingControl::new(RatingConfig::default().with_maximum_rating(0).with_label("None"));
    let rating = StateBinding::new(0);
    let view = control.render(&rating);

    assert_eq!(view.elements().len(), 1);
    assert!(matches!(
        control.dispatch("rating.select.1", &rating),
        Err(RatingError::SlotOutOfRange { .. })
    ));
}

#[tokio::test]
async fn test_channel_binding_owner_loop() {
    let control = RatingControl::default();
    let (binding, mut changes) = ChannelBinding::channel(4);
    let mut model = Book {
        title: "Emma".to_string(),
        rating: 4,
    };

    control.render(&binding).slots[1].tap(&binding);

    let change = changes.recv().await.unwrap();
    assert_eq!(change, RatingChanged { previous: 4, value: 2 });
    model.rating = change.value;

    let view = control.render(&binding.with_snapshot(model.rating));
    assert_eq!(view.on_count(), 2);
    assert!(!view.slot(3).unwrap().is_on);
}
