use leptos::{html, prelude::*};

use super::scroll::use_scroll_progress;
use crate::motion::{Parallax, ScrollOffsets};

const ROLE: &str = "Full-Stack Developer Intern";
const COMPANY: &str = "Accolade Tech Solutions, Mangalore";
const DURATION: &str = "Nov 2024 - Jan 2025";
const TECH: [&str; 5] = ["React", "Node.js", "MongoDB", "Express", "CI/CD"];
const DESCRIPTION: &str = "Worked on a MERN-based License Management System used for internal workflow automation. Built RESTful endpoints with Node.js/Express, JWT authentication, and responsive React dashboards for user management. Structured and optimized MongoDB schemas, added server-side validation, and improved API response times through efficient querying and middleware. Contributed to CI/CD automation with GitHub Actions, helped containerize the application with Docker, and took part in code reviews and debugging sessions.";
const CERTIFICATE: &str = "/internship-certificate.jpg";

fn tech_tags(class: &'static str) -> impl IntoView {
    TECH.into_iter()
        .map(|t| view! { <span class=class>{t}</span> })
        .collect_view()
}

#[component]
pub fn Internship() -> impl IntoView {
    let scene_ref = NodeRef::<html::Div>::new();
    let progress = use_scroll_progress(scene_ref, ScrollOffsets::CROSSING);
    let parallax = move || Parallax::at(progress.get()).style();

    view! {
        <section id="internship" class="relative bg-black text-white py-16">
            <div node_ref=scene_ref class="container mx-auto px-6">
                <h2 class="text-5xl md:text-6xl font-bold mb-12 text-center">{ROLE}</h2>

                <div class="hidden md:flex gap-8 items-start flex-row">
                    <div class="flex-shrink-0 w-2/5" style=parallax>
                        <img
                            src=CERTIFICATE
                            alt="Internship Certificate"
                            class="w-full h-auto object-cover rounded-lg shadow-2xl"
                        />
                        <p class="mt-3 text-xs text-gray-400 text-center">
                            "Certificate of completion, Accolade Tech Solutions"
                        </p>
                    </div>
                    <div class="flex-1 rounded-2xl p-8 bg-gradient-to-b from-white/4 to-white/2 border border-white/6 shadow-2xl">
                        <p class="text-base text-gray-400 mb-4 font-semibold">
                            <span class="font-medium text-gray-200">{COMPANY}</span>
                            <span class="mx-2">"|"</span>
                            <span class="whitespace-nowrap">{DURATION}</span>
                        </p>
                        <p class="text-base text-gray-300 leading-relaxed mb-6 text-justify">
                            {DESCRIPTION}
                        </p>
                        <div class="flex flex-wrap gap-2">
                            {tech_tags(
                                "text-sm px-3 py-1 rounded-full bg-black/30 border border-white/6 text-gray-200",
                            )}
                        </div>
                        <div class="mt-6 flex items-center gap-4">
                            <a
                                href=CERTIFICATE
                                target="_blank"
                                rel="noreferrer"
                                class="inline-block px-4 py-2 rounded-md bg-white/6 border border-white/8 text-sm hover:bg-white/10 transition"
                            >
                                "View Certificate"
                            </a>
                            <a
                                href=CERTIFICATE
                                download="internship-certificate.jpg"
                                class="inline-block px-4 py-2 rounded-md bg-gradient-to-r from-green-500/20 to-blue-500/10 text-sm border border-white/6 transition"
                            >
                                "Download"
                            </a>
                        </div>
                    </div>
                </div>

                <div class="md:hidden flex flex-col gap-6">
                    <div class="rounded-2xl overflow-hidden border border-white/8 shadow-lg">
                        <img
                            src=CERTIFICATE
                            alt="Internship Certificate"
                            class="w-full h-56 object-cover"
                        />
                    </div>
                    <div class="rounded-2xl p-5 bg-gradient-to-b from-white/4 to-white/2 border border-white/6 shadow-lg">
                        <p class="text-xs text-gray-400 mb-3">
                            <span class="font-medium text-gray-200">{COMPANY}</span>
                            <span class="mx-2">"|"</span>
                            <span class="whitespace-nowrap">{DURATION}</span>
                        </p>
                        <p class="text-gray-300 leading-relaxed mb-4">{DESCRIPTION}</p>
                        <div class="flex flex-wrap gap-2 mb-4">
                            {tech_tags(
                                "text-xs px-3 py-1 rounded-full bg-black/30 border border-white/6 text-gray-200",
                            )}
                        </div>
                        <div class="flex gap-3">
                            <a
                                href=CERTIFICATE
                                target="_blank"
                                rel="noreferrer"
                                class="px-3 py-1 rounded-md bg-white/6 border border-white/8 text-sm"
                            >
                                "View"
                            </a>
                            <a
                                href=CERTIFICATE
                                download="internship-certificate.jpg"
                                class="px-3 py-1 rounded-md bg-gradient-to-r from-green-500/20 to-blue-500/10 text-sm border border-white/6"
                            >
                                "Download"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
