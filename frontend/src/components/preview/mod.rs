//! Live template preview route.
//!
//! Renders one vendor storefront page from a server snapshot, then keeps it in
//! sync with the editor window through `message` events.
//!
//! Responsibilities
//! - On first render, subscribe to `message` on `window` and fetch the snapshot.
//! - Feed every message through `PreviewBridge`, which drops anything not
//!   addressed to this vendor and page.
//! - Drop the subscription on unmount so no listener outlives the route.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::TemplatePreviewProps;
pub use state::TemplatePreviewComponent;

impl Component for TemplatePreviewComponent {
    type Message = Msg;
    type Properties = TemplatePreviewProps;

    fn create(ctx: &Context<Self>) -> Self {
        TemplatePreviewComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props() == old_props {
            return false;
        }
        self.remount(ctx.props());
        helpers::load_snapshot(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            self.listener = helpers::subscribe(ctx);
            helpers::load_snapshot(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.listener.take();
    }
}
