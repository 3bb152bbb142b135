//! Site footer

use chrono::Datelike;
use cs_branch::catalog::data::LOGO_FULL;
use leptos::*;
use leptos_router::*;

use crate::components::{Icon, IconKind};

const EXPLORE_LINKS: &[&str] = &["IEEE Global", "IEEE India", "IEEE Kalasalingam"];

const FOOTER_SOCIALS: &[IconKind] = &[
    IconKind::Instagram,
    IconKind::Linkedin,
    IconKind::Github,
    IconKind::Mail,
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="bg-[#0D0D0D] text-[#9CA3AF] py-16 border-t border-gray-900 font-sans">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 text-center md:text-left">
                    // Brand
                    <div class="flex flex-col items-center md:items-start space-y-6">
                        <div class="bg-white p-3 rounded-xl inline-block shadow-lg">
                            <img src=LOGO_FULL alt="IEEE CS Logo" class="h-10 w-auto" />
                        </div>
                        <p class="text-sm italic text-gray-400">
                            "\"Empowering the future of Computing\""
                        </p>
                        <div class="text-sm font-semibold text-white">
                            "Kalasalingam Academy of Research and Education"
                        </div>
                    </div>

                    // Explore
                    <div class="flex flex-col items-center">
                        <h3 class="font-bold text-lg text-white mb-6 uppercase tracking-widest">
                            "Explore Our Club"
                        </h3>
                        <ul class="space-y-4 text-sm">
                            {EXPLORE_LINKS
                                .iter()
                                .map(|label| {
                                    view! {
                                        <li>
                                            <a href="#" class="hover:text-[#FFC83C] transition-colors">
                                                {*label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    // Contact
                    <div class="flex flex-col items-center md:items-end">
                        <h3 class="font-bold text-lg text-white mb-6 uppercase tracking-widest">
                            "Contact"
                        </h3>
                        <div class="space-y-2 text-sm md:text-right">
                            <p>"Open for collaborations and project ideas."</p>
                            <A href="/contact#contact-form" class="text-[#FFB347] hover:underline">
                                "Reach out to us."
                            </A>
                            <div class="pt-4 text-gray-400">
                                <p>"Kalasalingam Academy of"</p>
                                <p>"Research and Education"</p>
                                <p>"Krishnankoil, Tamil Nadu"</p>
                            </div>
                        </div>
                        <div class="flex space-x-4 mt-8">
                            {FOOTER_SOCIALS
                                .iter()
                                .map(|kind| {
                                    view! {
                                        <a href="#" class="text-white hover:text-[#FFC83C] transition-colors">
                                            <Icon kind=*kind />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="mt-16 pt-8 border-t border-gray-900 text-center text-xs text-gray-600">
                    {format!(
                        "© Copyright {} IEEE - all rights reserved. Use of this website signifies your agreement to the IEEE Terms and Conditions.",
                        year,
                    )}
                    <br />
                    "A public charity, IEEE is the world's largest technical professional organization dedicated to advancing technology for the benefit of humanity."
                </div>
            </div>
        </footer>
    }
}
