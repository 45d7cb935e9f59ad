use std::sync::{Arc, Mutex};

use leptos::{ev, html, prelude::*};
use leptos_use::{
    use_event_listener_with_options, use_intersection_observer_with_options, use_window,
    UseEventListenerOptions, UseIntersectionObserverOptions,
};

use crate::{
    config::SiteConfig,
    visibility::{VisibilityPolicy, VisibilityState},
};

const SECTIONS: [(&str, &str); 7] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#qualification", "Qualification"),
    ("#internship", "Internship"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar(anchor: NodeRef<html::Section>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let policy = StoredValue::new(Arc::new(Mutex::new(VisibilityPolicy::with_jitter_guard(
        0.0,
        config.jitter_guard_px,
    ))));
    let (state, set_state) = signal(policy.with_value(|p| {
        p.lock()
            .expect("should be able to lock navbar policy")
            .snapshot()
    }));
    let (menu_open, set_menu_open) = signal(false);

    let apply = move |f: &dyn Fn(&mut VisibilityPolicy) -> VisibilityState| {
        let next = policy.with_value(|p| {
            f(&mut *p.lock().expect("should be able to lock navbar policy"))
        });
        set_state(next);
    };

    // start from wherever the page is scrolled to at mount
    Effect::new(move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        apply(&|p| p.on_mount(scroll_y));
    });

    let _ = use_event_listener_with_options(
        use_window(),
        ev::scroll,
        move |_| {
            let scroll_y = window().scroll_y().unwrap_or_default();
            apply(&|p| p.on_scroll(scroll_y));
        },
        UseEventListenerOptions::default().passive(true),
    );

    use_intersection_observer_with_options(
        anchor,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                let intersecting = entry.is_intersecting();
                apply(&|p| p.on_anchor(intersecting));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![config.anchor_threshold]),
    );

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 left-0 w-full flex items-center justify-between px-6 py-4 z-50 transition-transform duration-300 {}",
                if state.get().visible { "translate-y-0" } else { "-translate-y-full" },
            )
        }>
            <div class="flex items-center space-x-2">
                <span class="w-8 h-8 rounded-full bg-gradient-to-r from-pink-500 to-blue-500 flex items-center justify-center font-bold">
                    "R"
                </span>
                <div class="text-2xl font-bold text-white hidden sm:block">"Rithish"</div>
            </div>
            <div class="block lg:absolute lg:left-1/2 lg:transform lg:-translate-x-1/2">
                <button
                    on:click=move |_| set_menu_open(true)
                    class="text-3xl text-white focus:outline-none"
                    aria-label="Open menu"
                >
                    "☰"
                </button>
            </div>
            <div class="hidden lg:block">
                <a
                    href="#contact"
                    class="bg-gradient-to-r from-pink-500 to-blue-500 text-white px-5 py-2 rounded-full font-medium shadow-lg hover:opacity-90 transition-opacity duration-300"
                >
                    "Reach out"
                </a>
            </div>
        </nav>
        <OverlayMenu open=menu_open on_close=move |_| set_menu_open(false) />
    }
}

#[component]
fn OverlayMenu(open: ReadSignal<bool>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center bg-black/90 backdrop-blur">
                <button
                    on:click=move |_| on_close.run(())
                    class="absolute top-6 right-6 text-3xl text-white"
                    aria-label="Close menu"
                >
                    "✕"
                </button>
                <ul class="space-y-6 text-center">
                    {SECTIONS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a
                                        href=href
                                        on:click=move |_| on_close.run(())
                                        class="text-4xl font-semibold text-white hover:text-pink-400 transition-colors duration-300"
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </Show>
    }
}
