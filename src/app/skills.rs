use leptos::prelude::*;

const SKILL_GROUPS: [(&str, &[&str]); 4] = [
    ("Frontend", &["React", "JavaScript", "HTML", "CSS", "Tailwind CSS"]),
    ("Backend", &["Node.js", "Express", "REST APIs", "JWT Auth"]),
    ("Databases", &["MongoDB", "MySQL"]),
    ("Tooling", &["Git", "GitHub Actions", "Docker", "Postman"]),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="w-full min-h-screen bg-black text-white py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-4xl sm:text-5xl font-bold text-center mb-12">"Skills"</h2>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                    {SKILL_GROUPS
                        .into_iter()
                        .map(|(group, skills)| {
                            view! {
                                <div class="rounded-2xl p-6 bg-white/5 border border-white/10">
                                    <h3 class="text-xl font-semibold mb-4">{group}</h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .iter()
                                            .map(|s| {
                                                view! {
                                                    <span class="text-sm px-3 py-1 rounded-full bg-black/30 border border-white/10 text-gray-200">
                                                        {*s}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
