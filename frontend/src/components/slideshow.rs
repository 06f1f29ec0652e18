use yew::prelude::*;
use yew_hooks::use_interval;

use crate::pages::content::{SLIDES, SLIDE_INTERVAL_MS};

/// Index of the slide after `current`, wrapping around.
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component(ImageSlideshow)]
pub fn image_slideshow() -> Html {
    let current = use_state(|| 0usize);

    {
        let current = current.clone();
        use_interval(
            move || current.set(next_slide(*current, SLIDES.len())),
            SLIDE_INTERVAL_MS,
        );
    }

    html! {
        <div class="relative w-full aspect-[1/1] sm:aspect-[16/10] md:aspect-[16/9] lg:aspect-[1/1] overflow-hidden rounded-lg shadow-lg">
            { for SLIDES.iter().enumerate().map(|(index, slide)| {
                let state = if *current == index { "opacity-100 translate-x-0" } else { "opacity-0 translate-x-full" };
                html! {
                    <div key={index} class={classes!("absolute", "w-full", "h-full", "transition-all", "duration-1000", state)}>
                        <img src={slide.src} alt={slide.alt} class="w-full h-full object-cover object-center" />
                    </div>
                }
            }) }

            <div class="absolute bottom-4 left-1/2 transform -translate-x-1/2 flex space-x-2 z-10">
                { for (0..SLIDES.len()).map(|index| {
                    let onclick = {
                        let current = current.clone();
                        Callback::from(move |_: MouseEvent| current.set(index))
                    };
                    let dot = if *current == index { "bg-white" } else { "bg-white/50" };
                    html! {
                        <button
                            key={index}
                            {onclick}
                            class={classes!("w-2", "h-2", "rounded-full", "transition-all", "duration-300", dot)}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::next_slide;

    #[test]
    fn slides_wrap_around() {
        assert_eq!(next_slide(0, 2), 1);
        assert_eq!(next_slide(1, 2), 0);
        assert_eq!(next_slide(0, 0), 0);
    }
}
