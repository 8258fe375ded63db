use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::callback::Interval;

use crate::interactive::particles::{ParticleField, TICK_MS};

pub struct Tick;

impl Reducible for ParticleField {
    type Action = Tick;

    fn reduce(self: Rc<Self>, _: Self::Action) -> Rc<Self> {
        let mut field = (*self).clone();
        field.tick();
        field.into()
    }
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let field = use_reducer(|| ParticleField::generate(&mut rand::thread_rng()));

    {
        let dispatcher = field.dispatcher();
        use_effect_with_deps(move |_| {
            let interval = Interval::new(TICK_MS, move || dispatcher.dispatch(Tick));
            move || drop(interval)
        }, ());
    }

    html! {
        <div class="particle-background">
            <style>
                {r#"
                    .particle-background {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .particle-gradient {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, #030712, #111827, #030712);
                    }
                    .particle-grid {
                        position: absolute;
                        inset: 0;
                        opacity: 0.2;
                        background-image:
                            linear-gradient(to right, #00eeff 1px, transparent 1px),
                            linear-gradient(to bottom, #00eeff 1px, transparent 1px);
                        background-size: 40px 40px;
                    }
                    .particle {
                        position: absolute;
                        border-radius: 50%;
                        animation-name: particlePulse;
                        animation-timing-function: ease-in-out;
                        animation-iteration-count: infinite;
                    }
                    @keyframes particlePulse {
                        0%, 100% { opacity: 0.2; }
                        50% { opacity: 0.8; }
                    }
                    .particle-glow {
                        position: absolute;
                        width: 50%;
                        height: 50%;
                        opacity: 0.05;
                        filter: blur(150px);
                        border-radius: 50%;
                    }
                    .particle-glow.cyan { top: 25%; left: 25%; background: #00eeff; }
                    .particle-glow.green { bottom: 25%; right: 25%; background: #00ff66; }
                "#}
            </style>
            <div class="particle-gradient"></div>
            <div class="particle-grid"></div>
            { for field.particles().iter().map(|p| {
                let style = format!(
                    "left: {}%; top: {}%; width: {}px; height: {}px; background-color: {}; box-shadow: 0 0 {}px {}; animation-duration: {}s;",
                    p.x, p.y, p.size, p.size, p.color, p.size * 2.0, p.color, p.glow_secs
                );
                html! { <div key={p.id} class="particle" {style}></div> }
            }) }
            <div class="particle-glow cyan"></div>
            <div class="particle-glow green"></div>
        </div>
    }
}
