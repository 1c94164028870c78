use chrono::{DateTime, Utc};
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// Local storage slot of a persisted value.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    /// Stored value, or the default when it is missing or malformed.
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).unwrap_or_else(|err| {
            log::debug!("Nothing usable stored at {}: {:?}", T::KEY, err);
            T::default()
        })
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub title: AttrValue,
    /// Hides the dialog.
    pub on_close: Callback<()>,
    /// Extra footer button shown before "Close".
    #[prop_or_default]
    pub action: Option<(AttrValue, Callback<()>)>,
    #[prop_or_default]
    pub children: Html,
}

/// Dialog attached to `document.body` instead of the place where it's used.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let action = props.action.as_ref().map(|(label, callback)| {
        let onclick = callback.reform(|_: MouseEvent| ());
        html! { <button class="primary" {onclick}>{label.clone()}</button> }
    });

    let dialog = html! {
        <dialog open=true>
            <article>
                <h2>{props.title.clone()}</h2>
                {props.children.clone()}
                <footer>
                    {action}
                    <button onclick={on_close}>{"Close"}</button>
                </footer>
            </article>
        </dialog>
    };

    create_portal(dialog, gloo::utils::body().into())
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let mut bytes = [0; 8];
    for byte in &mut bytes {
        *byte = (256. * random()) as u8;
    }
    u64::from_be_bytes(bytes)
}

pub(crate) fn utc_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
