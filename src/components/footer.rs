use yew::prelude::*;

use crate::components::header::capitalize;
use crate::content;
use crate::scroll::{self, FOOTER_SECTIONS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-content">
                <div class="footer-section">
                    <div class="logo">
                        <div class="logo-icon">{"P"}</div>
                        <span>{"Pardeep"}</span>
                    </div>
                </div>

                <div class="footer-section">
                    <h3>{"Navigation"}</h3>
                    <div class="footer-links">
                        { for FOOTER_SECTIONS.into_iter().map(|section| {
                            let onclick = Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                scroll::scroll_to_section(section);
                            });
                            html! {
                                <a
                                    key={section}
                                    href={format!("#{section}")}
                                    class="footer-link"
                                    {onclick}
                                >
                                    {capitalize(section)}
                                </a>
                            }
                        }) }
                    </div>
                </div>

                <div class="footer-section">
                    <h3>{"Connect"}</h3>
                    <div class="footer-links">
                        <a
                            href={content::GITHUB_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="footer-link"
                        >
                            {"GitHub"}
                        </a>
                        <a
                            href={content::LINKEDIN_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="footer-link"
                        >
                            {"LinkedIn"}
                        </a>
                        <a href={content::EMAIL_URL} class="footer-link">
                            {"Email"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{"© 2024 Pardeep Sharma. All rights reserved."}</p>
            </div>
        </footer>
    }
}
