use chrono::Datelike;
use leptos::prelude::*;

const LINKS: [(&str, &str); 3] = [
    ("#home", "Back to top"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

fn copyright_year(build_time: &str) -> Option<i32> {
    chrono::DateTime::parse_from_rfc3339(build_time)
        .ok()
        .map(|t| t.year())
}

#[component]
pub fn Footer() -> impl IntoView {
    let notice = match copyright_year(env!("BUILD_TIME")) {
        Some(year) => format!("© {year} Rithish R Achar. All rights reserved."),
        None => "© Rithish R Achar. All rights reserved.".to_string(),
    };

    view! {
        <footer class="relative overflow-hidden bg-black">
            <div class="relative z-10 px-4 sm:px-8 lg:px-10 py-16 md:py-20 flex flex-col items-center text-center space-y-6">
                <h1 class="font-semibold leading-none text-white text-center select-none text-4xl sm:text-5xl md:text-6xl">
                    "Rithish R Achar"
                </h1>
                <div class="h-[3px] w-24 md:w-32 rounded-full bg-gradient-to-r from-[#0d58cc] via-cyan-300 to-emerald-400" />
                <div class="flex gap-5 text-lg">
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class="text-gray-300 hover:text-white transition-colors duration-200"
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-gray-300 italic max-w-xl">
                    "\"Success is when preparation meets opportunity.\""
                </p>
                <p class="text-xs text-gray-400">{notice}</p>
            </div>
        </footer>
    }
}
