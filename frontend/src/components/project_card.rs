use yew::prelude::*;

use crate::content::Project;

#[derive(Properties, PartialEq)]
pub struct ProjectCardProps {
    pub project: Project,
    pub index: usize,
    pub on_hover: Callback<bool>,
}

#[function_component(ProjectCard)]
pub fn project_card(props: &ProjectCardProps) -> Html {
    let project = &props.project;
    let enter = props.on_hover.reform(|_: MouseEvent| true);
    let leave = props.on_hover.reform(|_: MouseEvent| false);
    // Stagger the fade-in the same way across the grid.
    let style = format!("animation-delay: {:.1}s;", props.index as f64 * 0.1);

    html! {
        <div class="project-card" {style}>
            <div class="project-image">
                <img src={project.image} alt={project.title} width="600" height="400" />
                <div class="project-image-fade"></div>
            </div>
            <div class="project-body">
                <h3 class="project-title">{ project.title }</h3>
                <p class="project-description">{ project.description }</p>
                <div class="project-tags">
                    { for project.technologies.iter().map(|tech| html! {
                        <span class="project-tag">{ *tech }</span>
                    }) }
                </div>
                <div class="project-links">
                    <a href={project.demo_url} target="_blank" rel="noopener noreferrer"
                        onmouseenter={enter.clone()} onmouseleave={leave.clone()}>
                        { "↗ Live Demo" }
                    </a>
                    <a href={project.github_url} target="_blank" rel="noopener noreferrer"
                        onmouseenter={enter} onmouseleave={leave}>
                        { "⌥ Source Code" }
                    </a>
                </div>
            </div>
        </div>
    }
}
