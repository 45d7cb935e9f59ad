use leptos::prelude::*;

struct Project {
    title: &'static str,
    summary: &'static str,
    tech: &'static [&'static str],
    link: Option<&'static str>,
}

const PROJECTS: [Project; 2] = [
    Project {
        title: "License Management System",
        summary: "MERN application for internal workflow automation with JWT authentication, role-based dashboards and CI/CD through GitHub Actions.",
        tech: &["React", "Node.js", "Express", "MongoDB", "Docker"],
        link: None,
    },
    Project {
        title: "Portfolio Site",
        summary: "This site: scroll-driven animated sections, a hide-on-scroll navbar and a contact form backed by an email relay.",
        tech: &["Rust", "Leptos", "Axum", "Tailwind CSS"],
        link: Some("#home"),
    },
];

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="w-full min-h-screen bg-black text-white py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl sm:text-5xl font-bold text-center mb-12">"Projects"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <article class="rounded-2xl p-6 bg-gray-900/80 border border-gray-700/70 shadow-lg flex flex-col hover:-translate-y-1 transition-transform">
                                    <h3 class="text-xl font-semibold mb-2">{p.title}</h3>
                                    <p class="text-gray-300 leading-relaxed flex-1">{p.summary}</p>
                                    <div class="flex flex-wrap gap-2 mt-4">
                                        {p
                                            .tech
                                            .iter()
                                            .map(|t| {
                                                view! {
                                                    <span class="text-xs px-3 py-1 rounded-full bg-black/30 border border-white/10">
                                                        {*t}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    {p
                                        .link
                                        .map(|href| {
                                            view! {
                                                <a href=href class="mt-4 text-sm text-[#1cd8d2] hover:underline">
                                                    "Take a look →"
                                                </a>
                                            }
                                        })}
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
