use leptos::{either::Either, html, prelude::*};

use super::scroll::{use_layout, use_scroll_progress};
use crate::{
    layout::Layout,
    motion::{ItemMotion, Progress, ScrollOffsets, Segment, Thresholds},
};

struct TimelineEntry {
    title: &'static str,
    institution: &'static str,
    duration: &'static str,
    description: &'static str,
}

static QUALIFICATIONS: [TimelineEntry; 4] = [
    TimelineEntry {
        title: "Master of Computer Applications (MCA)",
        institution: "Shree Devi Institute of Technology",
        duration: "Feb 2024 - Nov 2025 (CGPA: 9.22)",
        description: "Completed MCA with a focus on full-stack development, cloud computing and data analytics. Built practical projects and maintained strong academic performance (CGPA 9.22).",
    },
    TimelineEntry {
        title: "Bachelor of Computer Applications (BCA)",
        institution: "Sri Bhuvanendra College, Karkala",
        duration: "June 2021 - Nov 2023 (72.11%)",
        description: "Completed BCA with solid foundations in programming and databases. Completed web development and backend integration projects.",
    },
    TimelineEntry {
        title: "Pre-University Course (PUC)",
        institution: "Shri Bhuvanendra PU College",
        duration: "2018 - 2019 (74.5%)",
        description: "PUC (Science with Computer Science), strong performance in core subjects and active in extracurriculars.",
    },
    TimelineEntry {
        title: "Secondary School Leaving Certificate (SSLC)",
        institution: "Jnana Sudha High School",
        duration: "2017 - 2018 (79.52%)",
        description: "Completed SSLC with good academic record and participation in school activities.",
    },
];

// scroll distance given to each entry, in viewport heights
const DESKTOP_VH_PER_ITEM: usize = 120;
const MOBILE_VH_PER_ITEM: usize = 160;

fn scene_style(layout: Layout, items: usize) -> String {
    let per_item = match layout {
        Layout::Desktop => DESKTOP_VH_PER_ITEM,
        Layout::Mobile => MOBILE_VH_PER_ITEM,
    };
    format!("height: {}vh; min-height: 120vh;", per_item * items)
}

/// Sticky timeline: the scene is several screens tall and pinned while the
/// user scrolls through it; each entry animates in over its own slice of the
/// overall progress.
#[component]
pub fn Qualification() -> impl IntoView {
    let scene_ref = NodeRef::<html::Div>::new();
    let layout = use_layout();
    let progress = use_scroll_progress(scene_ref, ScrollOffsets::PINNED);
    let thresholds = Thresholds::new(QUALIFICATIONS.len());

    let items = move |layout: Layout| {
        QUALIFICATIONS
            .iter()
            .zip(thresholds.segments())
            .enumerate()
            .map(|(index, (entry, segment))| {
                view! { <TimelineItem entry index segment progress layout /> }
            })
            .collect_view()
    };

    view! {
        <section id="qualification" class="relative bg-black text-white">
            <div
                node_ref=scene_ref
                style=move || scene_style(layout.get(), QUALIFICATIONS.len())
                class="relative"
            >
                <div class="sticky top-0 h-screen flex flex-col">
                    <h2 class="text-4xl sm:text-5xl font-semibold mt-5 text-center">
                        "Qualification"
                    </h2>
                    <div class="flex flex-1 items-center justify-center px-6 pb-10">
                        {move || match layout.get() {
                            Layout::Desktop => {
                                Either::Left(
                                    view! {
                                        <div class="relative w-full max-w-7xl">
                                            <div class="relative h-[6px] bg-white/15 rounded">
                                                <div
                                                    class="absolute left-0 top-0 h-[6px] bg-white rounded origin-left"
                                                    style=move || {
                                                        format!("width: {};", progress.get().as_css_percent())
                                                    }
                                                />
                                            </div>
                                            <div class="relative flex justify-between mt-0">
                                                {items(Layout::Desktop)}
                                            </div>
                                        </div>
                                    },
                                )
                            }
                            Layout::Mobile => {
                                Either::Right(
                                    view! {
                                        <div class="relative w-full max-w-md">
                                            <div class="absolute left-0 top-0 bottom-0 w-[6px] bg-white/15 rounded">
                                                <div
                                                    class="absolute top-0 left-0 w-[6px] bg-white rounded origin-top"
                                                    style=move || {
                                                        format!("height: {};", progress.get().as_css_percent())
                                                    }
                                                />
                                            </div>
                                            <div class="relative flex flex-col gap-10 ml-10 mt-6 pb-28">
                                                {items(Layout::Mobile)}
                                            </div>
                                        </div>
                                    },
                                )
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(
    entry: &'static TimelineEntry,
    index: usize,
    segment: Segment,
    progress: Signal<Progress>,
    layout: Layout,
) -> impl IntoView {
    let motion = move || ItemMotion::at(progress.get(), segment, index, layout);
    let above = index % 2 == 0;

    match layout {
        Layout::Desktop => Either::Left(view! {
            <div class="relative flex flex-1 justify-center items-center min-w-0">
                <div
                    class="z-10 w-7 h-7 rounded-full bg-white shadow-[0_0_0_8px_rgba(255,255,255,0.1)]"
                    style=move || motion().marker_style()
                />
                <div
                    class=if above {
                        "absolute -top-8 w-[3px] h-10 bg-white/40"
                    } else {
                        "absolute -bottom-8 w-[3px] h-10 bg-white/40"
                    }
                    style=move || format!("opacity: {:.3};", motion().opacity)
                />
                <article
                    class=if above {
                        "absolute bottom-12 bg-gray-900/80 backdrop-blur border border-gray-700/70 rounded-xl p-7 w-[320px] max-w-[90vw] shadow-lg"
                    } else {
                        "absolute top-12 bg-gray-900/80 backdrop-blur border border-gray-700/70 rounded-xl p-7 w-[320px] max-w-[90vw] shadow-lg"
                    }
                    style=move || motion().card_style()
                >
                    <h3 class="text-xl font-semibold leading-tight">{entry.title}</h3>
                    <p class="text-sm text-gray-400 mt-2 mb-3 leading-relaxed">
                        <span class="break-words">{entry.institution}</span>
                        <span class="mx-2">"|"</span>
                        <span class="whitespace-nowrap">{entry.duration}</span>
                    </p>
                    <p class="text-md text-gray-300 break-words leading-relaxed">
                        {entry.description}
                    </p>
                </article>
            </div>
        }),
        Layout::Mobile => Either::Right(view! {
            <div class="relative flex items-start">
                <div
                    class="absolute -left-[14px] top-3 z-10 w-7 h-7 rounded-full bg-white shadow-[0_0_0_8px_rgba(255,255,255,0.1)]"
                    style=move || motion().marker_style()
                />
                <article
                    class="bg-gray-900/80 backdrop-blur border border-gray-700/70 rounded-xl p-5 w-[90vw] max-w-sm ml-6 shadow-lg"
                    style=move || motion().card_style()
                >
                    <h3 class="text-lg font-semibold break-words leading-tight">{entry.title}</h3>
                    <p class="text-xs text-gray-400 mt-2 mb-3 break-words leading-relaxed">
                        <span class="break-words">{entry.institution}</span>
                        <span class="mx-2">"|"</span>
                        <span class="whitespace-nowrap">{entry.duration}</span>
                    </p>
                    <p class="text-sm text-gray-300 break-words leading-relaxed">
                        {entry.description}
                    </p>
                </article>
            </div>
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_height_scales_with_items() {
        assert_eq!(
            scene_style(Layout::Desktop, 4),
            "height: 480vh; min-height: 120vh;"
        );
        assert_eq!(
            scene_style(Layout::Mobile, 4),
            "height: 640vh; min-height: 120vh;"
        );
    }
}
