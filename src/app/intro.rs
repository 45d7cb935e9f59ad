use leptos::prelude::*;

use crate::config::SiteConfig;

const GREETINGS: [&str; 4] = ["Hello", "Namaste", "Hola", "Bonjour"];

/// Full-screen greeting shown before the page. Calls `on_finish` once the
/// configured intro time has passed, or immediately on skip.
#[component]
pub fn IntroAnimation(#[prop(into)] on_finish: Callback<()>) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let (index, set_index) = signal(0usize);

    Effect::new(move |_| {
        let step = config.intro() / GREETINGS.len() as u32;
        let mut handles = (1..GREETINGS.len())
            .filter_map(|i| set_timeout_with_handle(move || set_index(i), step * i as u32).ok())
            .collect::<Vec<_>>();
        handles.extend(set_timeout_with_handle(move || on_finish.run(()), config.intro()).ok());
        // a skip unmounts the intro before these fire
        on_cleanup(move || handles.into_iter().for_each(|h| h.clear()));
    });

    view! {
        <div class="fixed inset-0 z-[100] flex flex-col items-center justify-center bg-black text-white">
            <h1 class="text-5xl md:text-7xl font-bold tracking-tight animate-pulse">
                {move || GREETINGS[index.get() % GREETINGS.len()]}
            </h1>
            <button
                on:click=move |_| on_finish.run(())
                class="absolute bottom-10 text-sm text-gray-400 hover:text-white transition-colors"
            >
                "Skip intro"
            </button>
        </div>
    }
}
