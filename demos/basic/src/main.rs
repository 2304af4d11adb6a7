use rangetk::prelude::*;

fn main() {
    env_logger::init();

    let mut slider = RangeSlider::new()
        .with_range(0.0, 10.0)
        .with_values(2.0, 8.0)
        .with_step(0.5);

    slider.on_event(|event| match event {
        RangeEvent::Value { property, old, new } => {
            println!("{property:?}: {old} -> {new}");
        },
        RangeEvent::Clamping { new, .. } => println!("clamping enabled: {new}"),
        RangeEvent::DragStarted(thumb) => println!("grabbed {thumb:?}"),
        RangeEvent::DragCompleted(thumb) => println!("released {thumb:?}"),
    });

    slider.set_lower_value(3.5);

    // Coerces to the maximum.
    slider.set_upper_value(12.0);

    // Pulls the upper thumb inward.
    slider.set_maximum(6.0);

    // Dropped with a warning (run with RUST_LOG=warn to see it).
    slider.set_lower_value(f64::NAN);

    let (lower, upper) = slider.values();
    println!("final: {lower}..{upper} of {}..{}", slider.minimum(), slider.maximum());
}
