use leptos::prelude::*;
use leptos_meta::Title;

use crate::view_state::{Section, ViewState, HERO_TEXT};

use super::contact::ContactSection;
use super::reveal::{delayed_fade_style, HeroLetters, RevealSection};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Education />
        <TechStack />
        <Projects />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = expect_context::<ViewState>();

    view! {
        <RevealSection
            section=Section::Home
            class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-900 to-slate-800 px-4 relative overflow-hidden"
        >
            <div class="text-center z-10">
                <div class="mb-4 text-7xl font-bold">
                    <HeroLetters text=HERO_TEXT />
                </div>
                <p
                    class="text-2xl text-slate-400 mb-8 font-light"
                    style=move || delayed_fade_style(state.is_revealed(Section::Home), 1.2)
                >
                    "Full Stack Developer"
                </p>
                <div
                    class="flex justify-center space-x-6"
                    style=move || delayed_fade_style(state.is_revealed(Section::Home), 1.5)
                >
                    <a
                        href="https://github.com"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-teal-300 hover:text-white text-2xl"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a
                        href="https://www.linkedin.com/in/sumit-dey-39b9a6181/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-teal-300 hover:text-white text-2xl"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href="https://www.instagram.com/sumit.d_e_y/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="text-teal-300 hover:text-white text-2xl"
                        aria-label="Instagram Profile"
                    >
                        "📷"
                    </a>
                    <a
                        href="mailto:sumitdey9434@gmail.com"
                        class="text-teal-300 hover:text-white text-2xl"
                        aria-label="Email"
                    >
                        "✉"
                    </a>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <RevealSection section=Section::About class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-8 text-center">"About Me"</h2>
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <img src="/profile.jpg" alt="Profile" class="rounded-lg shadow-lg" />
                    <div>
                        <p class="leading-relaxed mb-6 text-gray-600 dark:text-gray-300">
                            "I'm a passionate Full Stack Developer with 5 years of experience in building web applications. I specialize in React, Node.js, and modern web technologies. I love creating elegant solutions to complex problems and am always eager to learn new technologies."
                        </p>
                        <p class="leading-relaxed text-gray-600 dark:text-gray-300">
                            "When I'm not coding, you can find me exploring new technologies, contributing to open-source projects, or sharing my knowledge through technical blog posts."
                        </p>
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <RevealSection section=Section::Education class="py-20 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Education"</h2>
                <div class="p-6 rounded-lg shadow-md bg-white dark:bg-gray-800">
                    <h3 class="text-xl font-semibold">
                        "Bachelor in Technology in Computer Science and Engineering"
                    </h3>
                    <p class="mt-1 text-gray-600 dark:text-gray-300">
                        "Government College of Engineering and Textile Technology, Serampore"
                    </p>
                    <p class="mt-2 text-sm text-gray-500">"2022 - 2026"</p>
                    <p class="mt-3 text-gray-600 dark:text-gray-300">
                        "Currently pursuing B.Tech in Computer Science and Engineering."
                    </p>
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn TechStack() -> impl IntoView {
    let categories = [
        ("Frontend", "React, TypeScript, Tailwind"),
        ("Backend", "Node.js, Express"),
        ("Database", "MongoDB, PostgreSQL"),
        ("Languages", "Java, C++, Python"),
    ];

    view! {
        <RevealSection section=Section::Tech class="py-20 px-4 bg-white dark:bg-gray-800">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Tech Stack"</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {categories
                        .into_iter()
                        .map(|(name, tools)| {
                            view! {
                                <div class="p-6 rounded-lg shadow-md text-center bg-white dark:bg-gray-700">
                                    <h3 class="font-semibold">{name}</h3>
                                    <p class="text-sm text-gray-600 dark:text-gray-300">{tools}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <RevealSection section=Section::Projects class="py-20 px-4 bg-gray-50 dark:bg-gray-900">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-4xl font-bold mb-12 text-center">"Featured Projects"</h2>
                <div class="grid md:grid-cols-2 gap-8">
                    <ProjectCard
                        title="E-Commerce Platform"
                        description="A full-featured e-commerce platform built with React, Node.js, and MongoDB."
                        tags=&["React", "Node.js"]
                    />
                    <ProjectCard
                        title="Task Management App"
                        description="A collaborative task management application with real-time updates."
                        tags=&["TypeScript", "Firebase"]
                    />
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="rounded-lg shadow-lg overflow-hidden bg-white dark:bg-gray-800">
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{title}</h3>
                <p class="mb-4 text-gray-600 dark:text-gray-300">{description}</p>
                <div class="flex space-x-2">
                    {tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 rounded text-sm bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-200">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
