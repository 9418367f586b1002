use yew::prelude::*;

use crate::config::ProjectsBlock;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: ProjectsBlock,
}

/// "Notable Projects" block; only some variants carry it.
#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    let projects = &props.projects;

    html! {
        <section id="projects" class="page-section projects">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{ &projects.heading }</h2>
                    <p>{ &projects.intro }</p>
                </div>
                <div class="card-grid">
                    { for projects.items.iter().map(|project| html! {
                        <div class="card project-card">
                            <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                            <div class="project-vehicle">{ &project.vehicle }</div>
                            <h3>{ &project.title }</h3>
                            <p>{ &project.description }</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .project-card {
                    padding: 0 0 1.5rem;
                    overflow: hidden;
                }
                .project-card img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                }
                .project-card h3, .project-card p, .project-vehicle {
                    padding: 0 1.5rem;
                }
                .project-vehicle {
                    margin-top: 1rem;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: var(--accent);
                }
                "#}
            </style>
        </section>
    }
}
