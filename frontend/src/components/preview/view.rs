//! View rendering for the preview route: a status line followed by the
//! template's sections in the current section order.

use common::model::template::{Section, Template};
use common::preview::PreviewState;
use yew::prelude::*;

use super::helpers::render_markdown;
use super::state::{LoadStatus, TemplatePreviewComponent};

pub fn view(
    component: &TemplatePreviewComponent,
    _ctx: &Context<TemplatePreviewComponent>,
) -> Html {
    let state = component.bridge.state();
    let scope = component.bridge.scope();

    html! {
        <div
            class="preview-root"
            data-vendor={scope.vendor_id.clone()}
            data-page={scope.page.as_str()}
        >
            { build_status(&component.status, state.template.is_some()) }
            { for state.template.as_ref().map(|template| build_storefront(template, state)) }
        </div>
    }
}

fn build_storefront(template: &Template, state: &PreviewState) -> Html {
    let sections = state.ordered_sections();

    html! {
        <main class="storefront">
            <h1 class="storefront-title">{ template.title.clone() }</h1>
            { for sections.into_iter().map(|section| build_section(template, section)) }
        </main>
    }
}

/// Only shown while nothing can be rendered yet, or when the fetch failed.
fn build_status(status: &LoadStatus, has_template: bool) -> Html {
    match status {
        LoadStatus::Loading if !has_template => html! {
            <div class="preview-status">{ "Loading preview…" }</div>
        },
        LoadStatus::Failed(err) => html! {
            <div class="preview-status preview-error" title={err.clone()}>
                { "The saved template could not be loaded; showing live edits only." }
            </div>
        },
        _ => html! {},
    }
}

fn build_section(template: &Template, section: &Section) -> Html {
    let body = Html::from_html_unchecked(render_markdown(&section.body).into());
    let image = section
        .image_id
        .as_deref()
        .and_then(|id| template.image(id))
        .map(|image| {
            html! {
                <img class="section-image" src={image.data_url()} alt={section.heading.clone()} />
            }
        });

    html! {
        <section class="storefront-section" key={section.id.clone()} id={section.id.clone()}>
            if !section.heading.is_empty() {
                <h2>{ section.heading.clone() }</h2>
            }
            { for image }
            <div class="section-body">{ body }</div>
        </section>
    }
}
