//! Animated counter

use cs_branch::animation::count_up::DEFAULT_DURATION_MS;
use cs_branch::animation::reveal::REVEAL_THRESHOLD;
use cs_branch::animation::CountUp;
use leptos::*;

use crate::dom::{self, VisibilityWatch};

/// Counts from 0 up to `end` once the number scrolls into view
#[component]
pub fn CountUpNumber(
    end: u32,
    #[prop(optional)] suffix: &'static str,
    #[prop(default = DEFAULT_DURATION_MS)] duration_ms: f64,
) -> impl IntoView {
    let node = create_node_ref::<html::Span>();
    let (value, set_value) = create_signal(0u32);
    let frame = store_value(None::<AnimationFrameRequestHandle>);
    let watch = store_value(None::<VisibilityWatch>);
    let counter = CountUp::new(end).with_duration(duration_ms);

    node.on_load(move |el| {
        let observed = VisibilityWatch::observe(&el, REVEAL_THRESHOLD, None, move || {
            animate(counter, dom::now_ms(), set_value, frame)
        });
        watch.set_value(observed);
    });

    on_cleanup(move || {
        if let Some(handle) = frame.get_value() {
            handle.cancel();
        }
        watch.with_value(|w| {
            if let Some(w) = w {
                w.disconnect();
            }
        });
    });

    view! {
        <span node_ref=node>{value}{suffix}</span>
    }
}

fn animate(
    counter: CountUp,
    start: f64,
    set_value: WriteSignal<u32>,
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
) {
    let handle = request_animation_frame_with_handle(move || {
        let elapsed = dom::now_ms() - start;
        set_value.set(counter.value_at(elapsed));
        if !counter.is_finished(elapsed) {
            animate(counter, start, set_value, frame);
        }
    })
    .ok();
    frame.set_value(handle);
}
