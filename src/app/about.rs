use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("Experience", "Fresher"),
    ("Speciality", "Full Stack Development"),
    ("Focus", "Backend Development & APIs"),
];

const GLOWS: [&str; 3] = [
    "-top-10 -left-10 w-[360px] h-[360px] opacity-20 blur-[12px]",
    "bottom-0 right-10 w-[420px] h-[420px] opacity-15 blur-[140px] delay-300",
    "top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[220px] h-[220px] opacity-10 blur-[100px]",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section
            id="about"
            class="w-full min-h-screen flex items-center justify-center relative bg-black text-white overflow-hidden"
        >
            <div class="absolute inset-0 pointer-events-none">
                {GLOWS
                    .into_iter()
                    .map(|c| {
                        view! {
                            <div class=format!(
                                "absolute rounded-full bg-gradient-to-r from-[#302b63] via-[#00bf8f] to-[#1cd8d2] animate-pulse {c}",
                            ) />
                        }
                    })
                    .collect_view()}
            </div>
            <div class="relative z-10 max-w-6xl w-full mx-auto px-6 md:px-10 lg:px-12 py-20 flex flex-col gap-12">
                <div class="flex flex-col md:flex-row items-center md:items-stretch gap-8">
                    <div class="relative w-[160px] h-[160px] md:w-[200px] md:h-[200px] rounded-2xl overflow-hidden shadow-2xl bg-gradient-to-br from-[#1cd8d2]/20 to-[#302b63]/20 border border-[#1cd8d2]/25 flex items-center justify-center text-6xl font-bold">
                        "RA"
                    </div>
                    <div class="flex-1 flex flex-col justify-center text-center md:text-left">
                        <h2 class="text-4xl sm:text-5xl font-extrabold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-[#1cd8d2] via-[#00bf8f] to-[#1cd8d2]">
                            "Rithish R Achar"
                        </h2>
                        <p class="mt-2 text-lg sm:text-xl font-semibold">"Full Stack Developer"</p>
                        <p class="mt-4 text-gray-300 leading-relaxed text-base sm:text-lg max-w-2xl md:max-w-3xl">
                            "I'm a passionate Full Stack Developer with expertise in building dynamic and responsive web applications. I love turning ideas into reality using code and am always eager to learn new technologies and improve my skills."
                        </p>
                        <div class="mt-6 grid grid-cols-2 sm:grid-cols-3 gap-3 sm:gap-4 max-w-xl">
                            {STATS
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="rounded-xl border border-white/10 bg-white/5 px-4 py-3 text-center">
                                            <div class="text-sm text-gray-400">{label}</div>
                                            <div class="text-base font-semibold">{value}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="mt-6 flex flex-col sm:flex-row gap-3 sm:gap-4 justify-center md:justify-start">
                            <a
                                href="#projects"
                                class="inline-flex items-center justify-center rounded-lg bg-white text-black font-semibold px-5 py-3 hover:bg-gray-200 transition"
                            >
                                "View Projects"
                            </a>
                            <a
                                href="#contact"
                                class="inline-flex items-center justify-center rounded-lg border border-white/20 bg-white/10 text-white px-5 py-3 hover:bg-white/20 transition"
                            >
                                "Get in Touch"
                            </a>
                        </div>
                    </div>
                </div>
                <div class="text-center md:text-left">
                    <h3 class="text-2xl sm:text-3xl font-bold mb-3">"About Me"</h3>
                    <p class="text-gray-300 leading-relaxed text-base sm:text-lg">
                        "I'm a dedicated Full Stack Developer with a passion for crafting dynamic and responsive web applications. With a strong foundation in both front-end and back-end technologies, I thrive on turning complex problems into elegant solutions. I enjoy collaborating with teams to bring innovative ideas to life and am always eager to embrace new challenges."
                    </p>
                </div>
            </div>
        </section>
    }
}
