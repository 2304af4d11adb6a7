use rangetk::prelude::*;

fn main() {
    env_logger::init();

    let mut slider = RangeSlider::new().with_values(20.0, 80.0).with_step(5.0);
    slider.on_event(|event| println!("event: {event:?}"));

    // A 400px track; the gesture layer would feed real cursor positions.
    let mut drag = DragController::new(Track::new(Vector2::new(0.0, 0.0), 400.0));

    let flags = drag.begin(&slider, Vector2::new(90.0, 10.0));
    println!("begin -> {flags:?}");

    for x in [140.0, 200.0, 260.0] {
        let flags = drag.drag_to(&mut slider, Vector2::new(x, 12.0));
        println!("drag_to {x} -> {flags:?}");
    }

    let flags = drag.end(&slider);
    println!("end -> {flags:?}");

    println!("values: {:?}", slider.values());
}
