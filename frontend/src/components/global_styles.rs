use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;

/// Keyframes the page's fade and blur transitions refer to by name.
#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            body {
                background: #fbfaf5;
            }

            @keyframes fadeIn {
                0% { opacity: 0; }
                100% { opacity: 1; }
            }

            @keyframes fadeInUp {
                0% { opacity: 0; transform: translateY(20px); }
                100% { opacity: 1; transform: translateY(0); }
            }

            @keyframes blurReveal {
                0% { opacity: 0; filter: blur(10px); }
                100% { opacity: 1; filter: blur(0); }
            }

            .blur-title {
                animation: blurReveal 2s ease-out 2s forwards;
            }
        "#)} />
    }
}
