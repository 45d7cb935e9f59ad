use leptos::{html, prelude::*};

/// The hero section. Its visibility pins the navbar open.
#[component]
pub fn Home(anchor: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section
            id="home"
            node_ref=anchor
            class="w-full h-screen relative flex items-center justify-center bg-black overflow-hidden"
        >
            <div class="relative z-10 max-w-4xl mx-auto px-6 text-center">
                <p class="text-lg text-gray-400 mb-2">"Hi, I'm"</p>
                <h1 class="text-5xl sm:text-7xl font-extrabold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-[#1cd8d2] via-[#00bf8f] to-[#302b63]">
                    "Rithish R Achar"
                </h1>
                <p class="mt-4 text-xl sm:text-2xl font-semibold text-white/90">
                    "Full Stack Developer"
                </p>
                <p class="mt-4 text-gray-300 max-w-2xl mx-auto">
                    "I build responsive web applications and the APIs behind them."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#projects"
                        class="rounded-lg bg-white text-black font-semibold px-6 py-3 hover:bg-gray-200 transition"
                    >
                        "View my work"
                    </a>
                    <a
                        href="#contact"
                        class="rounded-lg border border-white/20 bg-white/10 text-white px-6 py-3 hover:bg-white/20 transition"
                    >
                        "Get in touch"
                    </a>
                </div>
            </div>
        </section>
    }
}
