use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselAction};
use crate::content;

/// Wall-clock gap between automatic slide advances.
const AUTOPLAY_MS: u32 = 5_000;

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let carousel = use_reducer(|| Carousel::new(content::TESTIMONIALS.len()));
    let autoplay_handle = use_mut_ref(|| None::<Interval>);

    // Auto-advance while mounted. The interval handle lives in a RefCell so
    // the cleanup closure can drop it on unmount; after that no tick can
    // touch component state. Missed ticks while backgrounded are not made up,
    // and manual prev/next/dot selection does not restart the timer, so a
    // tick can land right after a click (matches the source page).
    {
        let carousel = carousel.clone();
        let autoplay_handle = autoplay_handle.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(AUTOPLAY_MS, move || {
                    carousel.dispatch(CarouselAction::Next);
                });
                *autoplay_handle.borrow_mut() = Some(interval);

                move || {
                    autoplay_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let current = carousel.index();
    let testimonial = &content::TESTIMONIALS[current];

    html! {
        <section id="testimonials" class="content-section">
            <div class="section-header">
                <div class="section-label">{"What People Say"}</div>
                <h2 class="section-title">{"Testimonials"}</h2>
                <p class="section-description">
                    {"Feedback from colleagues, mentors, and collaborators"}
                </p>
            </div>

            <div class="slider-container testimonials-slider">
                <div class="testimonial-slide active">
                    <div class="testimonial-content">
                        <p class="testimonial-text">{testimonial.text}</p>
                        <div class="testimonial-author">
                            <img
                                src={testimonial.image}
                                alt={testimonial.name}
                                class="testimonial-avatar"
                            />
                            <div class="testimonial-info">
                                <h4>{testimonial.name}</h4>
                                <p class="testimonial-role">{testimonial.role}</p>
                                <p class="testimonial-company">{testimonial.company}</p>
                            </div>
                        </div>
                    </div>
                </div>

                <button class="slider-controls slider-prev" onclick={on_prev}>{"←"}</button>
                <button class="slider-controls slider-next" onclick={on_next}>{"→"}</button>

                <div class="slider-dots">
                    { for content::TESTIMONIALS.iter().enumerate().map(|(i, _)| {
                        let carousel = carousel.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            carousel.dispatch(CarouselAction::JumpTo(i));
                        });
                        html! {
                            <div
                                key={i}
                                class={classes!("slider-dot", (i == current).then_some("active"))}
                                {onclick}
                            />
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
