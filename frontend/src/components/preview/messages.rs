use common::model::template::Template;
use wasm_bindgen::JsValue;

pub enum Msg {
    SnapshotLoaded(Template),
    SnapshotFailed(String),
    /// Raw `message` event; `data` is decoded only after its origin is accepted.
    Inbound { origin: String, data: JsValue },
}
