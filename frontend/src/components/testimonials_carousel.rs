use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;
use log::warn;

use crate::interactive::carousel::{Carousel, Testimonial, TICK_MS};

pub enum CarouselAction {
    Tick,
    Next,
    Previous,
    GoTo(usize),
    PointerEnter,
    PointerLeave,
    ToggleAutoplay,
    /// The slide list changed length; start over on the first slide.
    Reset(usize),
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut carousel = (*self).clone();
        match action {
            CarouselAction::Tick => {
                carousel.tick();
            }
            CarouselAction::Next => carousel.go_to_next(),
            CarouselAction::Previous => carousel.go_to_previous(),
            CarouselAction::GoTo(index) => {
                if let Err(e) = carousel.go_to_slide(index) {
                    warn!("Ignoring dot click: {}", e);
                    return self;
                }
            }
            CarouselAction::PointerEnter => carousel.pointer_enter(),
            CarouselAction::PointerLeave => carousel.pointer_leave(),
            CarouselAction::ToggleAutoplay => carousel.toggle_autoplay(),
            CarouselAction::Reset(len) => {
                if len == carousel.len() {
                    return self;
                }
                carousel = Carousel::new(len);
            }
        }
        carousel.into()
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsCarouselProps {
    pub testimonials: Rc<Vec<Testimonial>>,
    pub on_hover: Callback<bool>,
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel(props: &TestimonialsCarouselProps) -> Html {
    let len = props.testimonials.len();
    let carousel = use_reducer(move || Carousel::new(len));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(move |len| {
            dispatcher.dispatch(CarouselAction::Reset(*len));
            || ()
        }, len);
    }

    // One interval per playing stretch; dropping it on pause or unmount
    // cancels the browser timer.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(move |playing| {
            let interval = playing.then(|| {
                Interval::new(TICK_MS, move || dispatcher.dispatch(CarouselAction::Tick))
            });
            move || drop(interval)
        }, carousel.is_autoplaying());
    }

    let Some(current) = props.testimonials.get(carousel.current_index()) else {
        return html! {};
    };

    let on_enter = {
        let carousel = carousel.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::PointerEnter);
            on_hover.emit(true);
        })
    };
    let on_leave = {
        let carousel = carousel.clone();
        let on_hover = props.on_hover.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.dispatch(CarouselAction::PointerLeave);
            on_hover.emit(false);
        })
    };
    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };
    let on_toggle = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::ToggleAutoplay))
    };

    let image = if current.image.is_empty() {
        "/assets/placeholder.svg".to_string()
    } else {
        current.image.clone()
    };

    html! {
        <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <style>
                {r#"
                    .carousel {
                        position: relative;
                        max-width: 56rem;
                        margin: 3rem auto 0;
                    }
                    .carousel-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        background: rgba(31, 41, 55, 0.5);
                        border: 1px solid #374151;
                        padding: 3rem;
                        min-height: 400px;
                        text-align: center;
                    }
                    .carousel-slide {
                        animation: slideIn 0.5s ease-in-out;
                    }
                    @keyframes slideIn {
                        from { opacity: 0; transform: translateX(50px); }
                        to { opacity: 1; transform: translateX(0); }
                    }
                    .carousel-quote-mark {
                        font-size: 4rem;
                        line-height: 1;
                        color: rgba(0, 238, 255, 0.3);
                    }
                    .carousel-content {
                        font-size: 1.4rem;
                        font-style: italic;
                        color: #d1d5db;
                        line-height: 1.7;
                        margin: 1.5rem 0 2rem;
                    }
                    .carousel-stars {
                        color: #00ff66;
                        letter-spacing: 0.25rem;
                        margin-bottom: 1.5rem;
                    }
                    .carousel-avatar {
                        width: 80px;
                        height: 80px;
                        border-radius: 50%;
                        border: 4px solid rgba(0, 238, 255, 0.3);
                        box-shadow: 0 10px 15px rgba(0, 238, 255, 0.2);
                    }
                    .carousel-name { font-size: 1.25rem; font-weight: 700; color: #fff; }
                    .carousel-role { color: #00eeff; font-weight: 500; }
                    .carousel-company { color: #9ca3af; font-size: 0.875rem; }
                    .carousel-arrow {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        padding: 0.75rem;
                        border-radius: 50%;
                        background: rgba(55, 65, 81, 0.5);
                        border: 1px solid #4b5563;
                        color: #fff;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .carousel-arrow:hover { transform: translateY(-50%) scale(1.1); }
                    .carousel-arrow.left { left: 1rem; }
                    .carousel-arrow.right { right: 1rem; }
                    .carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .carousel-dot {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        border: none;
                        background: #4b5563;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .carousel-dot.active {
                        background: #00eeff;
                        box-shadow: 0 0 12px rgba(0, 238, 255, 0.5);
                    }
                    .carousel-footer {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .carousel-progress {
                        flex: 1;
                        height: 4px;
                        border-radius: 9999px;
                        background: #374151;
                        overflow: hidden;
                    }
                    .carousel-progress-bar {
                        height: 100%;
                        background: linear-gradient(to right, #00eeff, #00ff66);
                        transition: width 0.1s linear;
                    }
                    .carousel-toggle {
                        background: none;
                        border: 1px solid #4b5563;
                        border-radius: 9999px;
                        color: #d1d5db;
                        padding: 0.25rem 0.75rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="carousel-card">
                <div class="carousel-slide">
                    <div class="carousel-quote-mark">{ "\u{201C}" }</div>
                    <blockquote class="carousel-content">
                        { format!("\"{}\"", current.content) }
                    </blockquote>
                    <div class="carousel-stars">
                        { ("★".repeat(current.stars())) }
                    </div>
                    <img class="carousel-avatar" src={image} alt={current.name.clone()} width="80" height="80" />
                    <h4 class="carousel-name">{ &current.name }</h4>
                    <p class="carousel-role">{ &current.role }</p>
                    <p class="carousel-company">{ &current.company }</p>
                </div>
                if carousel.has_controls() {
                    <>
                        <button class="carousel-arrow left" onclick={on_prev} aria-label="Previous testimonial">{ "‹" }</button>
                        <button class="carousel-arrow right" onclick={on_next} aria-label="Next testimonial">{ "›" }</button>
                    </>
                }
            </div>
            if carousel.has_controls() {
                <>
                <div class="carousel-dots">
                    { for (0..carousel.len()).map(|index| {
                        let onclick = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button
                                class={classes!("carousel-dot", (index == carousel.current_index()).then(|| "active"))}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                                {onclick}
                            />
                        }
                    }) }
                </div>
                <div class="carousel-footer">
                    <div class="carousel-progress">
                        <div class="carousel-progress-bar" style={format!("width: {}%;", carousel.progress())} />
                    </div>
                    <button class="carousel-toggle" onclick={on_toggle}>
                        { if carousel.autoplay_enabled() { "Pause" } else { "Play" } }
                    </button>
                </div>
                </>
            }
        </div>
    }
}
