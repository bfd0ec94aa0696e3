use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::sections::{
    AboutSection, EducationSection, ExperienceSection, HeroSection, InternshipsSection,
    ProjectsSection, SkillsSection,
};
use crate::components::testimonials::TestimonialsSection;
use crate::scroll;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let header_visible = use_state(|| false);
    let active_section = use_state(|| AttrValue::from("hero"));

    // Scroll listener and section observer live exactly as long as the page.
    // The effect runs once after the sections are mounted; its cleanup drops
    // the observer (which unobserves everything it registered) and removes
    // the scroll listener.
    {
        let header_visible = header_visible.clone();
        let active_section = active_section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    header_visible.set(scroll::header_visible(y));
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                let on_active = Callback::from(move |id: String| {
                    active_section.set(AttrValue::from(id));
                });
                let observer =
                    scroll::SectionObserver::observe(&document, &scroll::SECTION_IDS, on_active);

                move || {
                    drop(observer);
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="portfolio-container">
            <style>{PAGE_STYLE}</style>
            <Header visible={*header_visible} active_section={(*active_section).clone()} />
            <HeroSection />
            <AboutSection />
            <TestimonialsSection />
            <ExperienceSection />
            <ProjectsSection />
            <SkillsSection />
            <EducationSection />
            <InternshipsSection />
            <ContactSection />
            <Footer />
        </div>
    }
}

const PAGE_STYLE: &str = r#"
:root {
    --primary-color: #6366f1;
    --secondary-color: #10b981;
    --gray-500: #6b7280;
    --gray-600: #4b5563;
    --border-radius: 12px;
    --space-sm: 0.75rem;
    --space-md: 1.5rem;
}

.portfolio-container {
    font-family: 'Inter', system-ui, sans-serif;
    color: #111827;
}

.portfolio-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 100;
    padding: 1rem 2rem;
    background: transparent;
    opacity: 0;
    transform: translateY(-100%);
    transition: all 0.3s ease;
}

.portfolio-header.visible {
    opacity: 1;
    transform: translateY(0);
    background: rgba(255, 255, 255, 0.9);
    backdrop-filter: blur(12px);
    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}

.header-content {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-link {
    margin: 0 0.75rem;
    color: var(--gray-600);
    text-decoration: none;
    font-weight: 500;
}

.nav-link.active {
    color: var(--primary-color);
}

body[data-active-section="hero"] .portfolio-header .logo {
    color: var(--primary-color);
}

.content-section {
    max-width: 1200px;
    margin: 0 auto;
    padding: 6rem 2rem;
    opacity: 0;
    transform: translateY(2rem);
    transition: opacity 0.6s ease, transform 0.6s ease;
}

.content-section.visible,
.hero.visible {
    opacity: 1;
    transform: translateY(0);
}

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 6rem 2rem 2rem;
    opacity: 0;
    transition: opacity 0.6s ease;
}

.section-header {
    text-align: center;
    margin-bottom: 3rem;
}

.section-label {
    color: var(--primary-color);
    font-weight: 600;
    text-transform: uppercase;
    font-size: 0.85rem;
    letter-spacing: 0.1em;
}

.card {
    background: #fff;
    border-radius: var(--border-radius);
    padding: 2rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
}

.experience-grid,
.projects-grid {
    display: grid;
    gap: 2rem;
}

.skills-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
    gap: 1.5rem;
}

.skill-card {
    text-align: center;
    padding: 1.5rem 1rem;
    border-radius: var(--border-radius);
    background: #fff;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.05);
    color: var(--primary-color);
}

.tech-tag {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 999px;
    background: rgba(99, 102, 241, 0.1);
    color: var(--primary-color);
    font-size: 0.8rem;
}

.tag-row {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.card-block {
    margin-bottom: 1.5rem;
}

.card-block-title {
    font-size: 1rem;
    color: var(--primary-color);
    margin-bottom: 0.75rem;
    font-weight: 600;
}

.experience-meta {
    font-size: 0.9rem;
    color: var(--gray-500);
    margin-top: 0.25rem;
}

.coursework-text {
    color: var(--gray-600);
    font-size: 0.9rem;
    line-height: 1.6;
}

.slider-container {
    position: relative;
    max-width: 720px;
    margin: 0 auto;
    padding: 0 3rem;
}

.slider-controls {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    background: #fff;
    border-radius: 50%;
    width: 2.5rem;
    height: 2.5rem;
    cursor: pointer;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
}

.slider-prev { left: 0; }
.slider-next { right: 0; }

.slider-dots {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 1.5rem;
}

.slider-dot {
    width: 0.6rem;
    height: 0.6rem;
    border-radius: 50%;
    background: rgba(99, 102, 241, 0.25);
    cursor: pointer;
}

.slider-dot.active {
    background: var(--primary-color);
}

.testimonial-author {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-top: 1.5rem;
}

.testimonial-avatar {
    width: 56px;
    height: 56px;
    border-radius: 50%;
    object-fit: cover;
}

.contact-form {
    max-width: 560px;
    margin: 0 auto;
}

.form-group {
    margin-bottom: 1rem;
}

.form-input {
    width: 100%;
    padding: 0.85rem 1rem;
    border: 1px solid #e5e7eb;
    border-radius: var(--border-radius);
    font: inherit;
}

.btn-primary {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.85rem 1.75rem;
    border: none;
    border-radius: var(--border-radius);
    background: var(--primary-color);
    color: #fff;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
}

.btn-primary:disabled {
    opacity: 0.6;
    cursor: not-allowed;
}

.form-status {
    text-align: center;
    margin-top: var(--space-md);
    padding: var(--space-sm);
    border-radius: var(--border-radius);
}

.form-status-success {
    color: var(--secondary-color);
    background: rgba(16, 185, 129, 0.1);
    border: 1px solid rgba(16, 185, 129, 0.2);
}

.form-status-error {
    color: #ef4444;
    background: rgba(239, 68, 68, 0.1);
    border: 1px solid rgba(239, 68, 68, 0.2);
}

.floating-card {
    position: absolute;
    background: #fff;
    border-radius: var(--border-radius);
    padding: 0.75rem 1rem;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    animation: float 6s ease-in-out infinite;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}

.footer {
    background: #111827;
    color: #e5e7eb;
    padding: 3rem 2rem 1.5rem;
}

.footer-content {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 2rem;
}

.footer-link {
    display: block;
    color: #9ca3af;
    text-decoration: none;
    margin-bottom: 0.5rem;
}

.footer-bottom {
    text-align: center;
    margin-top: 2rem;
    font-size: 0.85rem;
    color: var(--gray-500);
}
"#;
