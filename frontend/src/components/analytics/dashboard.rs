use common::analytics::AnalyticsSource;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::context::ContextHandle;
use yew::prelude::*;

use super::provider::{expect_analytics_source, AnalyticsSourceContext};

pub enum Msg {
    ContextChanged(AnalyticsSourceContext),
}

/// Scope selector and the query the dashboards issue for it.
///
/// Must be mounted inside `AnalyticsSourceProvider`.
pub struct AnalyticsDashboard {
    context: AnalyticsSourceContext,
    _handle: ContextHandle<AnalyticsSourceContext>,
}

impl Component for AnalyticsDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (context, handle) = expect_analytics_source(
            ctx.link(),
            ctx.link().callback(Msg::ContextChanged),
            "AnalyticsDashboard",
        );
        Self {
            context,
            _handle: handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ContextChanged(context) => {
                self.context = context;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let context = &self.context;
        let single_option = context.options().len() == 1;

        let on_source = {
            let set_source = context.set_source.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                if let Ok(source) = select.value().parse::<AnalyticsSource>() {
                    set_source.emit(source);
                }
            })
        };

        let on_template_id = {
            let set_template_id = context.set_template_id.clone();
            Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                set_template_id.emit(input.value().trim().to_string());
            })
        };

        html! {
            <div class="analytics-root">
                <div class="analytics-scope">
                    <label>
                        { "Source" }
                        <select onchange={on_source} disabled={single_option}>
                            { for context.options().iter().map(|option| html! {
                                <option
                                    value={option.value.as_str()}
                                    selected={option.value == context.source()}
                                >
                                    { option.label }
                                </option>
                            }) }
                        </select>
                    </label>
                    if context.source() == AnalyticsSource::Template {
                        <label>
                            { "Template" }
                            <input
                                type="text"
                                value={context.template_id().to_string()}
                                onchange={on_template_id}
                            />
                        </label>
                    }
                </div>
                <pre class="analytics-query">
                    { format!("/api/analytics?{}", context.query().to_query_string()) }
                </pre>
            </div>
        }
    }
}
