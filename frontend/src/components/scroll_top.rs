use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::use_window_scroll;

/// Scroll offset past which the back-to-top button shows.
pub const SHOW_AFTER_PX: f64 = 100.0;

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Smoothly scrolls the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    if let Some(element) = element {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let visibility = if scroll_y > SHOW_AFTER_PX { "opacity-100 visible" } else { "opacity-0 invisible" };
    let onclick = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <button
            {onclick}
            class={classes!(
                "fixed", "bottom-4", "right-4", "z-40", "bg-gray-700", "text-white", "w-12", "h-12",
                "rounded-full", "shadow-lg", "flex", "items-center", "justify-center",
                "hover:bg-gray-600", "transition-all", "duration-300", visibility
            )}
        >
            <span class="sr-only">{"トップへ戻る"}</span>
            <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18" />
            </svg>
        </button>
    }
}
