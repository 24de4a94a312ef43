use common::analytics::{
    require_context, AnalyticsQuery, AnalyticsSource, AnalyticsSourceState, SourceOption,
    SourceRepository,
};
use common::error::StorageError;
use common::model::role::Role;
use yew::context::ContextHandle;
use yew::html::Scope;
use yew::prelude::*;

use crate::storage::BrowserStore;

/// What consumers see: a snapshot of the scope plus its two setters.
#[derive(Clone, PartialEq)]
pub struct AnalyticsSourceContext {
    pub state: AnalyticsSourceState,
    pub set_source: Callback<AnalyticsSource>,
    pub set_template_id: Callback<String>,
}

impl AnalyticsSourceContext {
    pub fn source(&self) -> AnalyticsSource {
        self.state.source()
    }

    pub fn template_id(&self) -> &str {
        self.state.template_id()
    }

    pub fn options(&self) -> &'static [SourceOption] {
        self.state.options()
    }

    pub fn query(&self) -> AnalyticsQuery {
        self.state.query()
    }
}

/// Subscribes a component to the analytics source context.
///
/// # Panics
/// When no `AnalyticsSourceProvider` is mounted above the component. There
/// is deliberately no default scope to fall back to.
pub fn expect_analytics_source<C: Component>(
    link: &Scope<C>,
    on_change: Callback<AnalyticsSourceContext>,
    consumer: &'static str,
) -> (AnalyticsSourceContext, ContextHandle<AnalyticsSourceContext>) {
    match require_context(link.context::<AnalyticsSourceContext>(on_change), consumer) {
        Ok(found) => found,
        Err(err) => panic!("{err}"),
    }
}

pub enum Msg {
    SetSource(AnalyticsSource),
    SetTemplateId(String),
}

#[derive(Properties, PartialEq)]
pub struct AnalyticsSourceProviderProps {
    pub role: Role,
    #[prop_or_default]
    pub children: Html,
}

pub struct AnalyticsSourceProvider {
    state: AnalyticsSourceState,
    repository: SourceRepository<BrowserStore>,
    set_source: Callback<AnalyticsSource>,
    set_template_id: Callback<String>,
}

impl Component for AnalyticsSourceProvider {
    type Message = Msg;
    type Properties = AnalyticsSourceProviderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let repository = SourceRepository::new(BrowserStore);
        let mut state = AnalyticsSourceState::restore(&repository, ctx.props().role);
        report(state.reconcile(&repository));

        Self {
            state,
            repository,
            set_source: ctx.link().callback(Msg::SetSource),
            set_template_id: ctx.link().callback(Msg::SetTemplateId),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.state.clone();
        match msg {
            Msg::SetSource(source) => report(self.state.set_source(&self.repository, source)),
            Msg::SetTemplateId(template_id) => {
                report(self.state.set_template_id(&self.repository, template_id))
            }
        }
        self.state != before
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        report(self.state.set_role(&self.repository, ctx.props().role));
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let context = AnalyticsSourceContext {
            state: self.state.clone(),
            set_source: self.set_source.clone(),
            set_template_id: self.set_template_id.clone(),
        };

        html! {
            <ContextProvider<AnalyticsSourceContext> {context}>
                { ctx.props().children.clone() }
            </ContextProvider<AnalyticsSourceContext>>
        }
    }
}

fn report(result: Result<(), StorageError>) {
    if let Err(err) = result {
        gloo_console::warn!(format!("analytics source not persisted: {err}"));
    }
}
