use crate::app::App;

mod app;
mod components;
mod config;
mod routes;
mod storage;
mod toast;

fn main() {
    yew::Renderer::<App>::new().render();
}
