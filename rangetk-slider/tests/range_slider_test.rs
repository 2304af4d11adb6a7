use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use nalgebra::Vector2;
use rangetk_core::redraw::Redraw;
use rangetk_core::signal::Signal;
use rangetk_slider::config::SliderConfig;
use rangetk_slider::drag::DragController;
use rangetk_slider::event::{RangeEvent, RangeProperty, Thumb};
use rangetk_slider::model::RangeSlider;
use rangetk_slider::track::Track;

fn record_events(slider: &mut RangeSlider) -> Rc<RefCell<Vec<RangeEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    slider.on_event(move |event| sink.borrow_mut().push(*event));
    events
}

#[test]
fn test_full_drag_session_over_configured_slider() {
    let config = SliderConfig::from_toml(
        "minimum = 0.0\nmaximum = 200.0\nlower_value = 40.0\nupper_value = 160.0\nstep_size = 10.0",
    )
    .expect("valid config");
    let mut slider = config.build();
    let events = record_events(&mut slider);

    // A 200px track over a 0..200 range: 1px per value unit.
    let mut drag = DragController::new(Track::new(Vector2::new(0.0, 0.0), 200.0));

    // Press near the lower thumb and pull it right, past a grid point.
    let flags = drag.begin(&slider, Vector2::new(50.0, 4.0));
    assert_eq!(flags, Redraw::LOWER_THUMB);

    let flags = drag.drag_to(&mut slider, Vector2::new(73.0, 4.0));
    assert_eq!(flags, Redraw::LOWER_THUMB | Redraw::TRACK);
    assert_eq!(slider.lower_value(), 70.0);

    // Release.
    let flags = drag.end(&slider);
    assert_eq!(flags, Redraw::LOWER_THUMB);
    assert!(!drag.is_dragging());

    assert_eq!(
        events.borrow().as_slice(),
        &[
            RangeEvent::DragStarted(Thumb::Lower),
            RangeEvent::Value {
                property: RangeProperty::LowerValue,
                old: 40.0,
                new: 70.0,
            },
            RangeEvent::DragCompleted(Thumb::Lower),
        ]
    );
}

#[test]
fn test_config_file_loads_and_builds() {
    let test_dir = std::env::temp_dir().join("rangetk_config_test");
    if test_dir.exists() {
        fs::remove_dir_all(&test_dir).unwrap();
    }
    fs::create_dir_all(&test_dir).unwrap();
    let config_path = test_dir.join("slider.toml");

    fs::write(
        &config_path,
        "minimum = -1.0\nmaximum = 1.0\nlower_value = -0.5\nupper_value = 0.5\nstep_size = 0.25\n",
    )
    .unwrap();

    let config = SliderConfig::from_file(&config_path).expect("config should load");
    let slider = config.build();

    assert_eq!(slider.minimum(), -1.0);
    assert_eq!(slider.maximum(), 1.0);
    assert_eq!(slider.values(), (-0.5, 0.5));
    assert_eq!(slider.step_size(), 0.25);

    fs::remove_dir_all(&test_dir).unwrap();
}

#[test]
fn test_config_merge_precedence_end_to_end() {
    let mut config = SliderConfig::from_toml("minimum = 0.0\nmaximum = 100.0\nstep_size = 1.0")
        .expect("base config");
    let user = SliderConfig::from_toml("maximum = 50.0\nupper_value = 45.0").expect("user config");

    config.merge(user);
    let slider = config.build();

    assert_eq!(slider.maximum(), 50.0);
    assert_eq!(slider.upper_value(), 45.0);
    assert_eq!(slider.step_size(), 1.0);
}

#[test]
fn test_shrinking_bounds_notifies_affected_values() {
    let mut slider = RangeSlider::new().with_values(20.0, 90.0);
    let events = record_events(&mut slider);

    slider.set_maximum(60.0);

    assert_eq!(
        events.borrow().as_slice(),
        &[
            RangeEvent::Value {
                property: RangeProperty::Maximum,
                old: 100.0,
                new: 60.0,
            },
            RangeEvent::Value {
                property: RangeProperty::UpperValue,
                old: 90.0,
                new: 60.0,
            },
        ]
    );
}

#[test]
fn test_signal_handle_observes_drag() {
    let mut slider = RangeSlider::new().with_values(20.0, 80.0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = seen.clone();
        slider
            .lower_signal()
            .subscribe(Rc::new(move |change| seen.borrow_mut().push((change.old, change.new))));
    }

    let mut drag = DragController::new(Track::new(Vector2::new(0.0, 0.0), 100.0));
    drag.begin(&slider, Vector2::new(25.0, 0.0));
    drag.drag_to(&mut slider, Vector2::new(40.0, 0.0));
    drag.end(&slider);

    assert_eq!(seen.borrow().as_slice(), &[(20.0, 40.0)]);
}

#[test]
fn test_escape_hatch_and_recovery() {
    let mut slider = RangeSlider::new().with_clamping(false);

    slider.set_minimum(100.0);
    slider.set_maximum(0.0);
    slider.set_lower_value(250.0);
    slider.set_upper_value(-250.0);
    assert_eq!(slider.values(), (250.0, -250.0));

    // Restore a sane range, then leave the escape hatch.
    slider.set_minimum(0.0);
    slider.set_maximum(100.0);
    slider.set_clamping_enabled(true);

    let (lower, upper) = slider.values();
    assert!(slider.minimum() <= lower);
    assert!(lower <= upper);
    assert!(upper <= slider.maximum());
}

#[test]
fn test_mapped_view_derives_display_label() {
    let slider = RangeSlider::new().with_values(25.0, 75.0);
    let label = slider.lower_signal().map(|value| format!("{value:.1}"));

    assert_eq!(*label.get(), "25.0");
}
