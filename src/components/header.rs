use yew::prelude::*;

use crate::scroll::{self, NAV_SECTIONS};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// True once the page has scrolled past the hero threshold.
    pub visible: bool,
    /// Id of the section currently in the viewport.
    pub active_section: AttrValue,
}

fn nav_onclick(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(target);
    })
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class={classes!("portfolio-header", props.visible.then(|| "visible"))}>
            <div class="header-content">
                <a href="#hero" class="logo" onclick={nav_onclick("hero")}>
                    <div class="logo-icon">{"P"}</div>
                    <span>{"Pardeep"}</span>
                </a>

                <nav>
                    { for NAV_SECTIONS.into_iter().map(|section| {
                        let active = props.active_section.as_str() == section;
                        html! {
                            <a
                                key={section}
                                href={format!("#{section}")}
                                class={classes!("nav-link", active.then(|| "active"))}
                                onclick={nav_onclick(section)}
                            >
                                {capitalize(section)}
                            </a>
                        }
                    }) }
                </nav>

                <a href="#contact" class="header-cta" onclick={nav_onclick("contact")}>
                    {"Let's Talk"}
                </a>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalizes_section_labels() {
        assert_eq!(capitalize("about"), "About");
        assert_eq!(capitalize("testimonials"), "Testimonials");
        assert_eq!(capitalize(""), "");
    }
}
