use std::cell::{Cell, RefCell};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::prelude::*;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use gloo_timers::callback::Timeout;
use chrono::Datelike;
use log::error;

use crate::components::{
    contact_form::ContactFormView,
    custom_cursor::CustomCursor,
    nav::Nav,
    notification::{ToastAction, ToastQueue, Toaster},
    particle_background::ParticleBackground,
    project_card::ProjectCard,
    tech_icon::TechIcon,
    testimonials_carousel::TestimonialsCarousel,
};
use crate::content::{self, OWNER_EMAIL, OWNER_NAME, PROJECTS, SOCIAL_LINKS, TECH_STACK};
use crate::interactive::contact_form::Notice;
use crate::interactive::cursor::{is_mobile_width, CursorVariant};
use crate::interactive::scroll_spy::{ScrollSpy, SECTIONS};

/// Scroll events closer together than this collapse into one recompute.
const SCROLL_THROTTLE_MS: u32 = 16;

type SectionRefs = [NodeRef; SECTIONS.len()];

fn measure_sections(spy: &mut ScrollSpy, refs: &SectionRefs) {
    for (id, node) in SECTIONS.iter().zip(refs.iter()) {
        if let Some(element) = node.cast::<HtmlElement>() {
            spy.register_section(
                id,
                f64::from(element.offset_top()),
                f64::from(element.offset_height()),
            );
        }
    }
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let spy = use_mut_ref(|| ScrollSpy::new(&SECTIONS));
    let refs = use_memo(|_| SectionRefs::default(), ());
    let force_update = use_force_update();
    let cursor_variant = use_state(CursorVariant::default);
    let dark_mode = use_state(|| true);
    let toasts = use_reducer(ToastQueue::default);
    let testimonials = use_memo(|_| content::testimonials(), ());
    let (window_width, _) = use_window_size();
    let is_mobile = is_mobile_width(window_width);

    // Scroll-spy: measure on mount, then recompute at most once per
    // throttle window. Listener and pending timeout go away on unmount.
    {
        let spy = spy.clone();
        let refs = refs.clone();
        let force_update = force_update.clone();
        use_effect_with_deps(move |_| {
            measure_sections(&mut spy.borrow_mut(), &refs);

            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let armed = Rc::new(Cell::new(false));

            let scroll_callback = {
                let pending = pending.clone();
                Closure::wrap(Box::new(move || {
                    if armed.get() {
                        return;
                    }
                    armed.set(true);

                    let armed = armed.clone();
                    let spy = spy.clone();
                    let refs = refs.clone();
                    let force_update = force_update.clone();
                    let timeout = Timeout::new(SCROLL_THROTTLE_MS, move || {
                        armed.set(false);
                        let scroll_y = web_sys::window()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        let changed = {
                            let mut spy = spy.borrow_mut();
                            measure_sections(&mut spy, &refs);
                            spy.on_scroll(scroll_y)
                        };
                        if changed {
                            force_update.force_update();
                        }
                    });
                    *pending.borrow_mut() = Some(timeout);
                }) as Box<dyn FnMut()>)
            };

            let window = web_sys::window();
            if let Some(window) = &window {
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    error!("Failed to attach scroll listener: {:?}", e);
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                pending.borrow_mut().take();
            }
        }, ());
    }

    let on_navigate = {
        let spy = spy.clone();
        let refs = refs.clone();
        let force_update = force_update.clone();
        Callback::from(move |id: &'static str| {
            let target = {
                let mut spy = spy.borrow_mut();
                measure_sections(&mut spy, &refs);
                spy.scroll_to_section(id)
            };
            force_update.force_update();
            if let Some(top) = target {
                smooth_scroll_to(top);
            }
        })
    };

    let on_toggle_menu = {
        let spy = spy.clone();
        let force_update = force_update.clone();
        Callback::from(move |_: ()| {
            spy.borrow_mut().toggle_mobile_menu();
            force_update.force_update();
        })
    };

    let on_toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: ()| dark_mode.set(!*dark_mode))
    };

    let on_hover = {
        let cursor_variant = cursor_variant.clone();
        Callback::from(move |hovering: bool| {
            cursor_variant.set(if hovering {
                CursorVariant::Hover
            } else {
                CursorVariant::Default
            });
        })
    };
    let enter = on_hover.reform(|_: MouseEvent| true);
    let leave = on_hover.reform(|_: MouseEvent| false);

    let on_notify = {
        let toasts = toasts.dispatcher();
        Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::from_notice(notice)))
    };

    let on_dismiss = {
        let toasts = toasts.dispatcher();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    let copy_email = {
        let toasts = toasts.dispatcher();
        Callback::from(move |_: MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(OWNER_EMAIL);
            let toasts = toasts.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => toasts.dispatch(ToastAction::Push {
                        title: "Email copied!".to_string(),
                        description: "Email address copied to clipboard".to_string(),
                        destructive: false,
                    }),
                    Err(e) => error!("Clipboard write failed: {:?}", e),
                }
            });
        })
    };

    let scroll_to_top = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));
    let view_work = on_navigate.reform(|_: MouseEvent| "projects");

    let (active, menu_open) = {
        let spy = spy.borrow();
        (spy.active().to_string(), spy.is_mobile_menu_open())
    };
    let year = chrono::Utc::now().year();

    html! {
        <div class={classes!("portfolio", if *dark_mode { "dark-theme" } else { "light-theme" })}>
            <style>{ PAGE_CSS }</style>
            if !is_mobile {
                <CustomCursor variant={*cursor_variant} />
            }

            <Nav
                active={active}
                menu_open={menu_open}
                dark_mode={*dark_mode}
                on_navigate={on_navigate.clone()}
                {on_toggle_menu}
                {on_toggle_theme}
                on_hover={on_hover.clone()}
            />

            <section id="home" class="hero" ref={refs[0].clone()}>
                <ParticleBackground />
                <div class="hero-content">
                    <h1>
                        <span class="gradient-text">{ "Full Stack Developer" }</span>
                    </h1>
                    <p class="hero-tagline">{ "Turning ideas into reality through code." }</p>
                    <button class="primary-button" onclick={view_work}
                        onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                        { "View My Work" }
                    </button>
                </div>
            </section>

            <section id="projects" class="page-section" ref={refs[1].clone()}>
                <div class="section-heading">
                    <h2><span class="gradient-text">{ "My Projects" }</span></h2>
                    <p>{ "Check out some of my recent work and personal projects." }</p>
                </div>
                <div class="projects-grid">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectCard key={project.id} project={project.clone()} {index} on_hover={on_hover.clone()} />
                    }) }
                </div>
            </section>

            <section id="tech" class="page-section alt" ref={refs[2].clone()}>
                <div class="section-heading">
                    <h2><span class="gradient-text">{ "Tech Stack" }</span></h2>
                    <p>{ "Technologies and tools I work with on a daily basis." }</p>
                </div>
                <div class="tech-categories">
                    { for TECH_STACK.iter().enumerate().map(|(category_index, category)| html! {
                        <div class="tech-category">
                            <h3>{ category.name }</h3>
                            <div class="tech-grid">
                                { for category.items.iter().enumerate().map(|(index, tech)| html! {
                                    <TechIcon
                                        tech={tech.clone()}
                                        {index}
                                        {category_index}
                                        on_hover={on_hover.clone()}
                                    />
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section id="about" class="page-section" ref={refs[3].clone()}>
                <div class="section-heading">
                    <h2><span class="gradient-text">{ "About Me" }</span></h2>
                </div>
                <div class="about-grid">
                    <div class="about-photo" onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                        <img src="/assets/me.png" alt={OWNER_NAME} width="400" height="400" />
                    </div>
                    <div class="about-text">
                        <p>
                            { format!("Hi there! I'm {}, a passionate Full Stack Developer with a love for creating beautiful, functional, and user-friendly web applications.", OWNER_NAME) }
                        </p>
                        <p>
                            { "With over 2 years of experience in web development, I specialize in building modern web applications using the latest technologies. I'm passionate about clean code, performance optimization, and creating exceptional user experiences." }
                        </p>
                        <p>
                            { "When I'm not coding, you can find me exploring new technologies, reading books, or enjoying outdoor activities." }
                        </p>
                    </div>
                </div>
                <TestimonialsCarousel testimonials={testimonials.clone()} on_hover={on_hover.clone()} />
            </section>

            <section class="page-section alt social">
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|social| {
                        let tile = html! {
                            <div class="social-tile" onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                                <img src={social.icon} alt="" width="24" height="24" />
                                <span>{ social.label }</span>
                            </div>
                        };
                        match social.url {
                            Some(url) => html! {
                                <a href={url} target="_blank" rel="noopener noreferrer">{ tile }</a>
                            },
                            None => html! {
                                <button class="social-copy" onclick={copy_email.clone()}>{ tile }</button>
                            },
                        }
                    }) }
                </div>
            </section>

            <section id="contact" class="page-section" ref={refs[4].clone()}>
                <div class="section-heading">
                    <h2><span class="gradient-text">{ "Get In Touch" }</span></h2>
                    <p>{ "Have a project in mind or just want to say hello? Feel free to reach out!" }</p>
                </div>
                <ContactFormView {on_notify} on_hover={on_hover.clone()} />
            </section>

            <footer class="footer">
                <p>{ format!("© {} {}. All rights reserved.", year, OWNER_NAME) }</p>
                <p class="footer-quote">
                    { "\"Code is like humor. When you have to explain it, it's bad.\" – Cory House" }
                </p>
                <button class="scroll-top" onclick={scroll_to_top} aria-label="Back to top"
                    onmouseenter={enter} onmouseleave={leave}>
                    { "⌃" }
                </button>
            </footer>

            <Toaster toasts={toasts.toasts.clone()} {on_dismiss} />
        </div>
    }
}

const PAGE_CSS: &str = r#"
    .portfolio {
        min-height: 100vh;
        background: #030712;
        color: #fff;
        transition: background-color 0.3s, color 0.3s;
        cursor: none;
    }
    .portfolio.light-theme {
        background: #f9fafb;
        color: #111827;
    }
    .portfolio button, .portfolio a { cursor: none; }
    .gradient-text {
        background: linear-gradient(to right, #00eeff, #00ff66);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .top-nav {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 40;
        backdrop-filter: blur(12px);
        background: rgba(3, 7, 18, 0.8);
        border-bottom: 1px solid #1f2937;
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { color: #00ff66; font-weight: 700; font-size: 1.5rem; }
    .nav-links { display: flex; gap: 2rem; }
    .nav-link {
        background: none;
        border: none;
        color: #9ca3af;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-size: 0.875rem;
        transition: color 0.2s;
    }
    .nav-link:hover, .nav-link.active { color: #00ff66; }
    .nav-actions { display: flex; gap: 1rem; align-items: center; }
    .theme-toggle, .burger-menu {
        background: rgba(31, 41, 55, 0.6);
        border: 1px solid #374151;
        border-radius: 9999px;
        color: #fff;
        width: 2.25rem;
        height: 2.25rem;
    }
    .burger-menu { display: none; }
    .mobile-menu {
        display: flex;
        flex-direction: column;
        padding: 1rem 1.5rem;
        border-top: 1px solid #1f2937;
    }
    .nav-link.mobile { text-align: left; padding: 0.5rem 0; }
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }
    .hero-content {
        position: relative;
        z-index: 10;
        text-align: center;
        padding: 0 1.5rem;
    }
    .hero h1 { font-size: clamp(2.5rem, 7vw, 4.5rem); font-weight: 800; margin-bottom: 1.5rem; }
    .hero-tagline { font-size: 1.25rem; color: #9ca3af; margin-bottom: 2.5rem; }
    .primary-button {
        padding: 0.85rem 2rem;
        border-radius: 9999px;
        border: none;
        background: linear-gradient(to right, #00eeff, #00ff66);
        color: #030712;
        font-weight: 600;
    }
    .page-section { position: relative; padding: 5rem 1.5rem; }
    .page-section.alt { background: rgba(17, 24, 39, 0.5); }
    .section-heading { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
    .section-heading h2 { font-size: 2.5rem; font-weight: 700; margin-bottom: 1rem; }
    .section-heading p { color: #9ca3af; }
    .projects-grid {
        max-width: 80rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
        gap: 2rem;
    }
    .project-card {
        background: rgba(17, 24, 39, 0.7);
        border: 1px solid #1f2937;
        border-radius: 0.75rem;
        overflow: hidden;
        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.3);
        animation: fadeUp 0.6s ease-out both;
        transition: transform 0.2s;
    }
    .project-card:hover { transform: translateY(-5px); }
    .project-image { position: relative; height: 12rem; overflow: hidden; }
    .project-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s;
    }
    .project-card:hover .project-image img { transform: scale(1.1); }
    .project-image-fade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, #111827, transparent);
        opacity: 0.6;
    }
    .project-body { padding: 1.5rem; }
    .project-title { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
    .project-card:hover .project-title { color: #00ff66; }
    .project-description { color: #9ca3af; margin-bottom: 1rem; }
    .project-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
    .project-tag {
        padding: 0.25rem 0.5rem;
        font-size: 0.75rem;
        border-radius: 9999px;
        background: #1f2937;
        color: #00eeff;
        border: 1px solid rgba(0, 238, 255, 0.2);
    }
    .project-links { display: flex; gap: 1rem; }
    .project-links a { color: #fff; font-size: 0.875rem; text-decoration: none; }
    .project-links a:hover { color: #00ff66; }
    .tech-categories { max-width: 64rem; margin: 0 auto; display: grid; gap: 3rem; }
    .tech-category h3 {
        text-transform: capitalize;
        color: #00eeff;
        font-size: 1.25rem;
        margin-bottom: 1.5rem;
    }
    .tech-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(110px, 1fr));
        gap: 1.5rem;
    }
    .tech-icon { position: relative; animation: popIn 0.4s ease-out both; }
    .tech-icon-tile {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: rgba(31, 41, 55, 0.5);
        border: 1px solid #374151;
        transition: all 0.2s;
    }
    .tech-icon-tile:hover {
        transform: scale(1.05);
        border-color: rgba(0, 238, 255, 0.5);
        box-shadow: 0 0 20px rgba(0, 238, 255, 0.2);
    }
    .tech-icon-tile span { font-size: 0.875rem; color: #d1d5db; }
    .tech-tooltip {
        position: absolute;
        top: -3rem;
        left: 50%;
        transform: translateX(-50%);
        background: #111827;
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(0, 238, 255, 0.3);
        white-space: nowrap;
        z-index: 10;
    }
    .tech-tooltip p { font-size: 0.75rem; color: #00eeff; margin: 0; }
    .about-grid {
        max-width: 64rem;
        margin: 0 auto;
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .about-photo img {
        width: 100%;
        height: auto;
        border-radius: 1rem;
        border: 2px solid rgba(0, 238, 255, 0.3);
    }
    .about-text p { color: #d1d5db; line-height: 1.75; margin-bottom: 1rem; }
    .social-links { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; }
    .social-links a, .social-copy {
        background: none;
        border: none;
        color: inherit;
        text-decoration: none;
    }
    .social-tile {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.5rem;
        transition: transform 0.2s;
    }
    .social-tile:hover { transform: scale(1.1); }
    .social-tile img {
        padding: 1rem;
        border-radius: 9999px;
        background: #1f2937;
        border: 1px solid #374151;
    }
    .social-tile span { font-size: 0.875rem; color: #9ca3af; }
    .contact-form {
        max-width: 42rem;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
    .contact-field label {
        display: block;
        font-size: 0.875rem;
        color: #d1d5db;
        margin-bottom: 0.5rem;
    }
    .contact-input {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border-radius: 0.5rem;
        background: #1f2937;
        border: 1px solid #374151;
        color: #fff;
        outline: none;
    }
    .contact-input:focus { border-color: #00eeff; box-shadow: 0 0 0 2px rgba(0, 238, 255, 0.2); }
    .contact-input.invalid { border-color: #ef4444; }
    .contact-error { color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem; }
    .contact-submit {
        padding: 0.85rem;
        border-radius: 0.5rem;
        border: none;
        background: linear-gradient(to right, #00eeff, #00ff66);
        color: #030712;
        font-weight: 600;
    }
    .contact-submit:disabled { opacity: 0.6; }
    .footer {
        position: relative;
        padding: 3rem 1.5rem;
        border-top: 1px solid #1f2937;
        text-align: center;
        color: #9ca3af;
    }
    .footer-quote { font-style: italic; font-size: 0.875rem; margin-top: 0.5rem; }
    .scroll-top {
        position: absolute;
        right: 2rem;
        top: -1.25rem;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 9999px;
        background: #1f2937;
        border: 1px solid #374151;
        color: #00ff66;
    }
    @keyframes fadeUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes popIn {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    @media (max-width: 768px) {
        .portfolio, .portfolio button, .portfolio a { cursor: auto; }
        .nav-links { display: none; }
        .burger-menu { display: inline-block; }
        .about-grid, .contact-row { grid-template-columns: 1fr; }
    }
"#;
