//! Hero typewriter

use std::time::Duration;

use cs_branch::animation::{Typewriter, JITTER_MAX_MS};
use leptos::*;

use crate::dom;

/// Types and deletes `words` in a loop with a human-looking cadence
#[component]
pub fn TypewriterText(words: &'static [&'static str]) -> impl IntoView {
    let machine = store_value(Typewriter::new(words));
    let (text, set_text) = create_signal(machine.with_value(|m| m.text()));
    let timer = store_value(None::<TimeoutHandle>);

    schedule(machine, set_text, timer);
    on_cleanup(move || {
        if let Some(handle) = timer.get_value() {
            handle.clear();
        }
    });

    view! {
        <span class="text-[#FFB347] inline-block min-w-[200px]">
            {text}
            <span class="animate-pulse text-white">"|"</span>
        </span>
    }
}

fn schedule(
    machine: StoredValue<Typewriter<'static>>,
    set_text: WriteSignal<&'static str>,
    timer: StoredValue<Option<TimeoutHandle>>,
) {
    let delay = machine.with_value(|m| m.delay_ms(dom::jitter(JITTER_MAX_MS)));
    let handle = set_timeout_with_handle(
        move || {
            machine.update_value(|m| m.tick());
            set_text.set(machine.with_value(|m| m.text()));
            schedule(machine, set_text, timer);
        },
        Duration::from_millis(u64::from(delay)),
    )
    .ok();
    timer.set_value(handle);
}
