use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::observer::ViewportObserver;
use super::section::{SectionConfig, SectionView};

#[derive(Properties, PartialEq)]
pub struct ViewportProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the page's single [`ViewportObserver`] and feeds it scroll and resize events.
#[function_component(ViewportProvider)]
pub fn viewport_provider(props: &ViewportProviderProps) -> Html {
    let observer = use_state(ViewportObserver::new);

    {
        let observer = (*observer).clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::wrap(Box::new(move || {
                    observer.evaluate_all();
                }) as Box<dyn FnMut()>);

                if let Some(window) = window.as_ref() {
                    for event in ["scroll", "resize"] {
                        if window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                            .is_err()
                        {
                            warn!("could not listen for {} events", event);
                        }
                    }
                }

                move || {
                    if let Some(window) = window {
                        for event in ["scroll", "resize"] {
                            let _ = window
                                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
                        }
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ViewportObserver> context={(*observer).clone()}>
            { props.children.clone() }
        </ContextProvider<ViewportObserver>>
    }
}

/// Registers the returned node with the page observer for as long as the
/// calling component stays mounted. Outside a [`ViewportProvider`] the
/// section simply never animates.
#[hook]
pub fn use_in_view(config: SectionConfig) -> (NodeRef, SectionView) {
    let node = use_node_ref();
    let view = use_state_eq(SectionView::default);
    let observer = use_context::<ViewportObserver>();

    {
        let node = node.clone();
        let view = view.clone();
        use_effect_with_deps(
            move |(observer, config)| {
                let registration = observer.clone().map(|observer| {
                    let notify = Callback::from(move |next: SectionView| view.set(next));
                    let handle = observer.register(node, config.clone(), notify);
                    (observer, handle)
                });
                move || {
                    if let Some((observer, handle)) = registration {
                        observer.unregister(handle);
                    }
                }
            },
            (observer, config),
        );
    }

    (node, *view)
}
