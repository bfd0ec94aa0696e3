//! Render-only page sections. These carry no state of their own; everything
//! they show comes straight from `content`. The section ids are what the
//! visibility tracker observes, so they must stay in sync with
//! `scroll::SECTION_IDS`.

use yew::prelude::*;

use crate::content;
use crate::scroll;

#[derive(Properties, PartialEq)]
struct FloatingCardProps {
    children: Children,
    class: &'static str,
    delay: u32,
}

#[function_component(FloatingCard)]
fn floating_card(props: &FloatingCardProps) -> Html {
    html! {
        <div
            class={classes!("floating-card", props.class)}
            style={format!("animation-delay: {}s", props.delay)}
        >
            { props.children.clone() }
        </div>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-content">
                <div class="hero-text">
                    <div class="hero-badge">
                        <div class="hero-badge-dot"></div>
                        {"Available for opportunities"}
                    </div>

                    <h1 class="hero-title">{"Pardeep Sharma"}</h1>
                    <h2 class="hero-subtitle">{"QA Automation Engineer"}</h2>

                    <p class="hero-description">
                        {"A motivated and detail-oriented QA professional with a passion for \
                          ensuring software quality, identifying issues, and providing excellent \
                          user support. Specialized in manual testing, automation, and delivering \
                          robust solutions."}
                    </p>

                    <div class="hero-actions">
                        <a
                            href="#contact"
                            class="btn-primary"
                            onclick={scroll_link("contact")}
                        >
                            {"Get In Touch"}
                            <span>{"→"}</span>
                        </a>
                        <a
                            href="#projects"
                            class="btn-secondary"
                            onclick={scroll_link("projects")}
                        >
                            {"View My Work"}
                        </a>
                    </div>
                </div>

                <div class="hero-visual">
                    <div class="hero-image-container">
                        <img
                            src={content::PORTRAIT_URL}
                            alt="Pardeep Sharma"
                            class="hero-image"
                        />
                    </div>

                    <FloatingCard class="floating-card-1" delay={0}>
                        <div class="card-icon">{"🧪"}</div>
                        <div class="card-text">{"Automation"}</div>
                    </FloatingCard>
                    <FloatingCard class="floating-card-2" delay={2}>
                        <div class="card-icon">{"⚡"}</div>
                        <div class="card-text">{"API Testing"}</div>
                    </FloatingCard>
                    <FloatingCard class="floating-card-3" delay={4}>
                        <div class="card-icon">{"🐛"}</div>
                        <div class="card-text">{"Bug Detection"}</div>
                    </FloatingCard>
                </div>
            </div>
        </section>
    }
}

fn scroll_link(target: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(target);
    })
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    html! {
        <section id="about" class="content-section">
            <div class="section-header">
                <div class="section-label">{"Get to know me"}</div>
                <h2 class="section-title">{"About Me"}</h2>
                <p class="section-description">
                    {"Motivated and detail-oriented professional seeking opportunities in \
                      Quality Assurance (QA) and Product Support."}
                </p>
            </div>

            <div class="card">
                <p>
                    {"I possess a solid foundation in manual testing, test case creation, bug \
                      tracking, and basic automation. I am skilled at identifying issues, \
                      collaborating with teams, and assisting users through technical \
                      troubleshooting."}
                </p>
                <br />
                <p>
                    {"My enthusiasm lies in gaining hands-on experience in collaborative \
                      environments where I can contribute to building reliable, high-quality \
                      software products. With experience across various testing methodologies \
                      and tools, I bring a systematic approach to quality assurance while \
                      maintaining attention to detail and strong problem-solving capabilities."}
                </p>
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    html! {
        <section id="skills" class="content-section">
            <div class="section-header">
                <div class="section-label">{"What I Do"}</div>
                <h2 class="section-title">{"Skills & Expertise"}</h2>
                <p class="section-description">
                    {"Technologies and methodologies I work with"}
                </p>
            </div>

            <div class="skills-grid">
                { for content::SKILLS.iter().map(|skill| html! {
                    <div key={skill.name} class="skill-card">
                        <div class="skill-icon">
                            <svg
                                width="32"
                                height="32"
                                viewBox="0 0 24 24"
                                fill="none"
                                xmlns="http://www.w3.org/2000/svg"
                            >
                                <path
                                    d={skill.icon_path}
                                    stroke="currentColor"
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                            </svg>
                        </div>
                        <h3 class="skill-name">{skill.name}</h3>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    html! {
        <section id="experience" class="content-section">
            <div class="section-header">
                <div class="section-label">{"My Journey"}</div>
                <h2 class="section-title">{"Work Experience"}</h2>
                <p class="section-description">
                    {"Professional experience in quality assurance and product support"}
                </p>
            </div>

            <div class="experience-grid">
                { for content::EXPERIENCES.iter().map(|exp| html! {
                    <div key={exp.title} class="card experience-card">
                        <div class="experience-header">
                            <div>
                                <h3 class="experience-title">{exp.title}</h3>
                                <div class="experience-company">{exp.company}</div>
                            </div>
                            <div class="experience-period">
                                {format!("{} • {}", exp.period, exp.location)}
                            </div>
                        </div>

                        <p class="experience-description">{exp.description}</p>

                        <ul class="experience-achievements">
                            { for exp.achievements.iter().map(|a| html! { <li>{*a}</li> }) }
                        </ul>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(ProjectsSection)]
pub fn projects_section() -> Html {
    html! {
        <section id="projects" class="content-section">
            <div class="section-header">
                <div class="section-label">{"My Work"}</div>
                <h2 class="section-title">{"Featured Projects"}</h2>
                <p class="section-description">
                    {"A showcase of testing projects and quality assurance work"}
                </p>
            </div>

            <div class="projects-grid">
                { for content::PROJECTS.iter().map(|project| html! {
                    <div key={project.title} class="project-card">
                        <img src={project.image} alt={project.title} class="project-image" />
                        <div class="project-content">
                            <h3 class="project-title">{project.title}</h3>
                            <p class="project-description">{project.description}</p>

                            <div class="project-tech">
                                { for project.tech.iter().map(|t| html! {
                                    <span key={*t} class="tech-tag">{*t}</span>
                                }) }
                            </div>

                            <a
                                href={project.link}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="project-link"
                            >
                                {"View Details →"}
                            </a>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
pub fn education_section() -> Html {
    html! {
        <section id="education" class="content-section">
            <div class="section-header">
                <div class="section-label">{"Academic Background"}</div>
                <h2 class="section-title">{"Education"}</h2>
                <p class="section-description">
                    {"My educational journey in computer science and technology"}
                </p>
            </div>

            <div class="experience-grid">
                { for content::EDUCATION.iter().map(|edu| html! {
                    <div key={edu.institution} class="card experience-card">
                        <div class="experience-header">
                            <div>
                                <h3 class="experience-title">{edu.institution}</h3>
                                <div class="experience-company">{edu.degree}</div>
                                <div class="experience-meta">{edu.location}</div>
                            </div>
                            <div class="experience-period">
                                {format!("{} • Grade: {}", edu.period, edu.grade)}
                            </div>
                        </div>

                        <p class="experience-description">{edu.description}</p>

                        <div class="card-block">
                            <h4 class="card-block-title">{"Key Subjects"}</h4>
                            <div class="tag-row">
                                { for edu.key_subjects.iter().map(|s| html! {
                                    <span key={*s} class="tech-tag">{*s}</span>
                                }) }
                            </div>
                        </div>

                        <div class="card-block">
                            <h4 class="card-block-title">{"Key Achievements"}</h4>
                            <ul class="experience-achievements">
                                { for edu.achievements.iter().map(|a| html! { <li>{*a}</li> }) }
                            </ul>
                        </div>

                        <div>
                            <h4 class="card-block-title">{"Relevant Coursework"}</h4>
                            <p class="coursework-text">{edu.relevant_coursework}</p>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(InternshipsSection)]
pub fn internships_section() -> Html {
    html! {
        <section id="internships" class="content-section">
            <div class="section-header">
                <div class="section-label">{"Learning Experience"}</div>
                <h2 class="section-title">{"Internships & Training"}</h2>
                <p class="section-description">
                    {"Professional development and hands-on learning experiences"}
                </p>
            </div>

            <div class="experience-grid">
                { for content::INTERNSHIPS.iter().map(|internship| html! {
                    <div key={internship.title} class="card experience-card">
                        <div class="experience-header">
                            <div>
                                <h3 class="experience-title">{internship.title}</h3>
                                <div class="experience-company">{internship.company}</div>
                                <div class="experience-meta">
                                    {format!("{} • {}", internship.kind, internship.location)}
                                </div>
                            </div>
                            <div class="experience-period">
                                {format!("{} • {}", internship.period, internship.duration)}
                            </div>
                        </div>

                        <p class="experience-description">{internship.description}</p>

                        <div class="card-block">
                            <h4 class="card-block-title">{"Key Responsibilities"}</h4>
                            <ul class="experience-achievements">
                                { for internship.responsibilities.iter().take(3).map(|r| html! {
                                    <li>{*r}</li>
                                }) }
                            </ul>
                        </div>

                        <div class="card-block">
                            <h4 class="card-block-title">{"Technologies Used"}</h4>
                            <div class="tag-row">
                                { for internship.technologies.iter().take(6).map(|t| html! {
                                    <span key={*t} class="tech-tag">{*t}</span>
                                }) }
                            </div>
                        </div>

                        <div>
                            <h4 class="card-block-title">{"Key Projects"}</h4>
                            <ul class="experience-achievements">
                                { for internship.projects.iter().map(|p| html! { <li>{*p}</li> }) }
                            </ul>
                        </div>
                    </div>
                }) }
            </div>
        </section>
    }
}
