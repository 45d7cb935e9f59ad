mod about;
mod contact;
mod footer;
mod home;
mod internship;
mod intro;
mod navbar;
mod projects;
mod qualification;
mod scroll;
mod skills;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use about::About;
use contact::Contact;
use footer::Footer;
use home::Home;
use internship::Internship;
use intro::IntroAnimation;
use navbar::Navbar;
use projects::Projects;
use qualification::Qualification;
use skills::Skills;

pub use contact::send_contact_message;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Rithish R Achar - Full Stack Developer portfolio"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title text="Rithish R Achar - Portfolio" />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The single-page portfolio, shown once the intro has finished.
#[component]
fn Portfolio() -> impl IntoView {
    let (intro_done, set_intro_done) = signal(false);
    let home_ref = NodeRef::<html::Section>::new();

    view! {
        <Show
            when=move || intro_done.get()
            fallback=move || view! { <IntroAnimation on_finish=move |_| set_intro_done(true) /> }
        >
            <div class="relative gradient text-white scroll-smooth">
                <Navbar anchor=home_ref />
                <Home anchor=home_ref />
                <About />
                <Skills />
                <Projects />
                <Qualification />
                <Internship />
                <Contact />
                <Footer />
            </div>
        </Show>
    }
}
