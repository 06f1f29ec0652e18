use yew::prelude::*;

use crate::pages::content::PALETTE;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

/// Centered section title with the pink underline accent.
#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="relative mb-8 md:mb-12 px-4">
            <h2 class="text-2xl md:text-3xl lg:text-4xl font-bold text-center text-black">
                <span class="relative inline-block pb-4">
                    { props.title.clone() }
                    <span class="absolute -bottom-2 left-0 w-full h-1 bg-[#FFC6BD]"></span>
                </span>
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p class={classes!("mt-6", "text-sm", "md:text-lg", "lg:text-xl", "text-center", PALETTE.base_text)}>
                            { subtitle.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
