use common::model::role::Role;
use common::model::user::SessionUser;
use common::storage::{KeyValueStore, SESSION_USER_KEY};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::{html, Component, Context, Html};

use crate::components::analytics::{AnalyticsDashboard, AnalyticsSourceProvider};
use crate::components::preview::TemplatePreviewComponent;
use crate::routes::Route;
use crate::storage::BrowserStore;

pub enum Msg {
    SessionChanged,
}

pub struct App {
    route: Route,
    role: Role,
    /// Another tab logging in or out rewrites the session key; the role that
    /// scopes analytics follows it.
    _session_listener: Option<EventListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let session_listener = web_sys::window().map(|window| {
            EventListener::new(&window, "storage", move |event| {
                let is_session = event
                    .dyn_ref::<StorageEvent>()
                    .and_then(StorageEvent::key)
                    .is_none_or(|key| key == SESSION_USER_KEY);
                if is_session {
                    link.send_message(Msg::SessionChanged);
                }
            })
        });

        Self {
            route: Route::current(),
            role: session_role(),
            _session_listener: session_listener,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged => {
                let role = session_role();
                let changed = role != self.role;
                self.role = role;
                changed
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.route {
            Route::Analytics => html! {
                <AnalyticsSourceProvider role={self.role}>
                    <AnalyticsDashboard />
                </AnalyticsSourceProvider>
            },
            Route::Preview { vendor_id, page } => html! {
                <TemplatePreviewComponent vendor_id={vendor_id.clone()} page={*page} />
            },
            Route::NotFound => html! {
                <div class="not-found">{ "Page not found" }</div>
            },
        }
    }
}

fn session_role() -> Role {
    let raw = BrowserStore.get_or_absent(SESSION_USER_KEY);
    SessionUser::from_stored(raw.as_deref())
        .map(|user| user.role)
        .unwrap_or_default()
}
