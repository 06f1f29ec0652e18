use yew::prelude::*;
use yew_router::components::Link;

use crate::animator::{self, fade_in_up, use_in_view, FadeOffset, ViewportProvider};
use crate::components::scroll_top::{scroll_to_section, ScrollTopButton};
use crate::components::section_header::SectionHeader;
use crate::components::slideshow::ImageSlideshow;
use crate::components::staff_card::StaffCard;
use crate::config;
use crate::pages::content::{
    Benefit, ListingBody, APPLY_BUTTON_CLASS, BENEFITS, CONCERNS, FEATURES, JOB_LISTING, OWNER_MESSAGE, PALETTE, QA,
    QA_STAGGER_MS, REQUIREMENTS, SCHEDULE, SHORT_HOURS_PAY, SOLUTIONS, STAFF, STORE_ADDRESS, STORE_CLOSED,
    STORE_HOURS, STORE_PHONE,
};
use crate::Route;

const OWNER_SECTION_ID: &str = "owner";
const SECTION_BAND: &str = "py-16 md:py-24 bg-gradient-to-r from-[#D3B58D]/10 to-[#D3B58D]/5";

fn transition_delay(ms: u32) -> String {
    format!("transition-delay: {ms}ms;")
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <ViewportProvider>
            <div class={classes!("font-noto-sans", "relative", PALETTE.base_bg)}>
                <Hero />
                <ApplyButtons show_owner_link=true />
                <IntroVideo />
                <ConcernsSection />
                <FeaturesSection />
                <BenefitsSection />
                <StaffSection />
                <JobListingSection />
                <RequirementSection />
                <QaSection />
                <OwnerSection />
                <Footer />
                <ScrollTopButton />
            </div>
        </ViewportProvider>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="bg-[#fafafa] py-8 md:py-16 px-4 overflow-hidden">
            <div class="max-w-6xl mx-auto text-center">
                <div class="relative">
                    <video
                        src="/marouhead.MP4"
                        autoplay=true
                        muted=true
                        loop=true
                        playsinline=true
                        class="w-full h-[350px] md:h-[500px] object-cover rounded-lg shadow-lg"
                    />
                    <div class="absolute inset-0 bg-black/50 rounded-lg flex items-center justify-center">
                        <div class="text-white px-4 md:px-8 text-center space-y-8">
                            <p class="text-2xl md:text-4xl lg:text-5xl font-medium opacity-0 blur-sm blur-title">
                                <span class="inline-block">{"花屋併設の美容院 mallow（マロウ）"}</span>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
struct ApplyButtonsProps {
    #[prop_or_default]
    show_owner_link: bool,
}

#[function_component(ApplyButtons)]
fn apply_buttons(props: &ApplyButtonsProps) -> Html {
    let to_owner = Callback::from(|_: MouseEvent| scroll_to_section(OWNER_SECTION_ID));
    html! {
        <div class="flex flex-col sm:flex-row gap-4 items-center justify-center mt-8">
            <Link<Route> to={Route::Contact} classes={classes!(APPLY_BUTTON_CLASS)}>
                {"応募する"}
            </Link<Route>>
            if props.show_owner_link {
                <button
                    onclick={to_owner}
                    class="bg-[#06c755] text-white px-6 py-3 rounded-full hover:bg-[#059144] transition duration-300 text-sm sm:text-base sm:px-8 w-fit mx-auto sm:mx-0"
                >
                    {"代表永田からのメッセージを見る"}
                </button>
            }
        </div>
    }
}

#[function_component(IntroVideo)]
fn intro_video() -> Html {
    html! {
        <div class="mt-8 md:mt-12 px-4 max-w-6xl mx-auto">
            <div class="text-center mb-4 text-xl md:text-2xl font-medium text-gray-800">
                {"まずはこの3分動画をご覧ください"}
            </div>
            <div class="w-full aspect-video rounded-lg shadow-lg overflow-hidden">
                <video src="/nagatasann.MP4" controls=true class="w-full h-full object-cover" preload="metadata" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StepColumnProps {
    heading: AttrValue,
    heading_class: AttrValue,
    items: &'static [&'static str],
    item_class: AttrValue,
    arrow_class: AttrValue,
}

/// One column of the concern → solution comparison.
#[function_component(StepColumn)]
fn step_column(props: &StepColumnProps) -> Html {
    let (node, view) = use_in_view(animator::CONCERNS);
    let last = props.items.len().saturating_sub(1);

    html! {
        <div ref={node} class="p-2 md:p-6 rounded-lg">
            <h3 class={classes!("text-base", "md:text-xl", "font-bold", "text-center", "mb-3", "md:mb-6", props.heading_class.to_string())}>
                { props.heading.clone() }
            </h3>
            <div class="flex flex-col items-center gap-2 md:gap-4">
                { for props.items.iter().enumerate().map(|(index, item)| html! {
                    <>
                        <div
                            class={classes!(
                                props.item_class.to_string(),
                                "rounded-lg", "p-2", "md:p-4", "w-full", "text-center", "bg-white", "shadow-sm",
                                "text-xs", "md:text-base", "leading-relaxed", "whitespace-pre-line",
                                fade_in_up(view.in_view, 500, FadeOffset::Short)
                            )}
                            style={transition_delay(index as u32 * 150)}
                        >
                            { *item }
                        </div>
                        if index < last {
                            <div class={classes!(props.arrow_class.to_string())}>{"↓"}</div>
                        }
                    </>
                }) }
            </div>
        </div>
    }
}

#[function_component(ConcernsSection)]
fn concerns_section() -> Html {
    html! {
        <section class="py-16 md:py-24 mt-8 md:mt-12">
            <SectionHeader
                title="世の中の女性美容師さんが抱える悩み事、当サロンでは一切致しません"
                subtitle={Some(AttrValue::from("現場で女性美容師さんを困らせること"))}
            />
            <div class="max-w-6xl mx-auto px-4">
                <div class="grid grid-cols-2 gap-2 md:gap-8">
                    <StepColumn
                        heading="＜他店＞"
                        heading_class="text-gray-600"
                        items={CONCERNS}
                        item_class="border-2 border-gray-200"
                        arrow_class="text-gray-400 text-base md:text-2xl"
                    />
                    <StepColumn
                        heading="＜mallowの場合＞"
                        heading_class="text-[#FF998A]"
                        items={SOLUTIONS}
                        item_class="border-2 border-[#FF998A]"
                        arrow_class="text-[#FF998A] text-base md:text-2xl"
                    />
                </div>
            </div>
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    let (node, view) = use_in_view(animator::WIDE_BLOCK);

    html! {
        <div class="mt-4 bg-gradient-to-r from-[#D3B58D]/10 to-[#D3B58D]/5 rounded-3xl p-6 md:p-8 relative overflow-hidden">
            <div class="absolute inset-0 bg-white/50"></div>
            <div class="relative z-10">
                <SectionHeader title="mallowの特徴" />

                <div class="mt-8 md:mt-12 px-4 max-w-6xl mx-auto">
                    <div class={classes!("max-w-lg", "mx-auto", fade_in_up(view.in_view, 1000, FadeOffset::Short))}>
                        <ImageSlideshow />
                    </div>
                </div>

                <br />

                <div ref={node} class="text-base md:text-xl leading-relaxed text-center max-w-3xl mx-auto space-y-6">
                    { for FEATURES.iter().map(|feature| html! {
                        <div
                            class={classes!(
                                "bg-white", "rounded-lg", "p-6", "shadow-md", "border", "border-[#D3B58D]/20",
                                "hover:shadow-lg", fade_in_up(view.in_view, 700, FadeOffset::Short)
                            )}
                            style={transition_delay(feature.delay_ms)}
                        >
                            <span class="text-[#FF998A] font-bold text-lg">{ feature.mark }</span>
                            { feature.title }
                            <br />
                            <br />
                            <span class="text-gray-700 text-sm md:text-base">{ feature.body }</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BenefitCardProps {
    index: usize,
    /// Whether the surrounding block has faded in.
    shown: bool,
}

/// A benefit with its photo; overlay photos blur in one per delayed stage
/// every time the card scrolls back into view.
#[function_component(BenefitCard)]
fn benefit_card(props: &BenefitCardProps) -> Html {
    let benefit: &Benefit = &BENEFITS[props.index];
    let preset = if benefit.overlays.len() > 1 {
        animator::STAGGERED_REVEAL
    } else {
        animator::SINGLE_REVEAL
    };
    let (node, view) = use_in_view(preset);
    let image_class = "w-full h-[400px] md:h-[300px] rounded-lg object-cover";

    html! {
        <div
            ref={node}
            class={classes!("bg-white", "p-8", "rounded-lg", "shadow", fade_in_up(props.shown, 700, FadeOffset::Short))}
            style={transition_delay(benefit.delay_ms)}
        >
            <h3 class="text-2xl mb-4 font-bold">{ benefit.title }</h3>
            <div class="flex flex-col md:flex-row gap-4 md:gap-6">
                <div class="w-full md:w-[400px] flex-shrink-0 relative">
                    <img src={benefit.base_image} alt="スタッフの様子" class={image_class} />
                    { for benefit.overlays.iter().enumerate().map(|(stage, src)| html! {
                        <div class="absolute inset-0 overflow-hidden">
                            <img
                                src={*src}
                                alt={format!("スタッフの様子{}", stage + 2)}
                                class={classes!(image_class, "opacity-0")}
                                style={animator::blur_reveal_style(view.stage_revealed(stage))}
                            />
                        </div>
                    }) }
                </div>
                <p class="text-base md:text-lg leading-relaxed">{ benefit.body }</p>
            </div>
        </div>
    }
}

#[function_component(BenefitsSection)]
fn benefits_section() -> Html {
    let (node, view) = use_in_view(animator::WIDE_BLOCK);

    html! {
        <section class={SECTION_BAND}>
            <SectionHeader title="mallowで働くことで得られる事" subtitle={Some(AttrValue::from("あなたらしい働き方"))} />
            <div class="max-w-6xl mx-auto px-4">
                <div ref={node} class="space-y-8">
                    { for (0..BENEFITS.len()).map(|index| html! {
                        <BenefitCard key={index} {index} shown={view.in_view} />
                    }) }
                </div>

                <div class="mt-16">
                    <div class={classes!("bg-white", "p-8", "rounded-lg", "shadow", fade_in_up(view.in_view, 700, FadeOffset::Short))}>
                        <SectionHeader title="現場仕事の日のとある1日（早番）" />
                        <div class="max-w-2xl mx-auto">
                            <div class="space-y-4">
                                { for SCHEDULE.iter().map(|(time, activity)| html! {
                                    <div class="flex items-center gap-6 p-4 hover:bg-[#D3B58D]/5 rounded-lg transition-colors duration-300">
                                        <div class="w-24 flex-shrink-0">
                                            <span class="font-bold text-[#FF998A]">{ *time }</span>
                                        </div>
                                        <div class="flex-grow">
                                            <span class="text-gray-700">{ *activity }</span>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="mt-12">
                    <ApplyButtons />
                </div>
            </div>
        </section>
    }
}

#[function_component(StaffSection)]
fn staff_section() -> Html {
    let (node, view) = use_in_view(animator::BLOCK);
    html! {
        <section class="py-16 md:py-24">
            <SectionHeader title="働く仲間へインタビュー" subtitle={Some(AttrValue::from("スタッフの声"))} />
            <div ref={node} class={classes!("max-w-5xl", "mx-auto", "px-4", fade_in_up(view.in_view, 1000, FadeOffset::Long))}>
                <div class="space-y-8">
                    { for STAFF.iter().map(|profile| html! { <StaffCard {profile} /> }) }
                </div>
            </div>
        </section>
    }
}

fn salary_details() -> Html {
    html! {
        <div class="space-y-6">
            <div>
                <p class="font-medium mb-2">{"基本給"}</p>
                <p class="text-gray-600">{"スタイリスト：215,000円～＋手当"}</p>
            </div>
            <div>
                <p class="font-medium mb-2">{"歩合給例"}</p>
                <div class="bg-gray-50 p-4 rounded-lg">
                    <p class="font-medium">{"技術売上110万円の場合"}</p>
                    <p class="text-gray-600">{"110万-66万(基本給)÷1.1(消費税)×45%+23万(基本給)＝41万円"}</p>
                </div>
            </div>
            <div>
                <p class="font-medium mb-2">{"時短勤務の場合"}</p>
                <div class="space-y-2 text-gray-600">
                    { for SHORT_HOURS_PAY.iter().map(|(label, lines)| html! {
                        <>
                            <p>{ *label }</p>
                            <ul class="list-disc list-inside ml-4">
                                { for lines.iter().map(|line| html! { <li>{ *line }</li> }) }
                            </ul>
                        </>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(JobListingSection)]
fn job_listing_section() -> Html {
    html! {
        <section class={SECTION_BAND}>
            <SectionHeader title="募集要項" subtitle={Some(AttrValue::from("採用情報"))} />
            <div class="max-w-6xl mx-auto px-4">
                <div class="bg-white rounded-lg shadow-lg overflow-hidden">
                    { for JOB_LISTING.iter().enumerate().map(|(index, (title, body))| {
                        let stripe = if index % 2 == 0 { "bg-white" } else { "bg-gray-50" };
                        let content = match body {
                            ListingBody::Text(text) => html! { <p class="text-gray-600">{ *text }</p> },
                            ListingBody::Lines(lines) => html! {
                                <ul class="list-disc list-inside space-y-1 text-gray-600">
                                    { for lines.iter().map(|line| html! { <li>{ *line }</li> }) }
                                </ul>
                            },
                            ListingBody::Salary => salary_details(),
                        };
                        html! {
                            <div class={classes!("flex", "flex-col", "md:flex-row", "border-b", "border-gray-100", stripe)}>
                                <div class="w-full md:w-1/4 p-4 md:p-6 bg-[#D3B58D]/5">
                                    <h4 class="font-bold text-gray-800">{ *title }</h4>
                                </div>
                                <div class="w-full md:w-3/4 p-4 md:p-6">{ content }</div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(RequirementSection)]
fn requirement_section() -> Html {
    let (node, view) = use_in_view(animator::BLOCK);

    html! {
        <section class={SECTION_BAND}>
            <SectionHeader title="求める人材" subtitle={Some(AttrValue::from("私たちと一緒に働きませんか？"))} />
            <div class="max-w-6xl mx-auto px-4">
                <div ref={node} class={classes!("space-y-6", fade_in_up(view.in_view, 700, FadeOffset::Short))}>
                    { for REQUIREMENTS.iter().enumerate().map(|(index, (main, sub))| html! {
                        <div class="bg-white rounded-lg p-6 md:p-8 shadow-sm hover:shadow-md transition-all duration-300">
                            <div class="flex items-start space-x-4">
                                <div class="flex-shrink-0 mt-1">
                                    <div class="w-6 h-6 bg-[#FF998A]/20 rounded-full flex items-center justify-center">
                                        <span class="text-[#FF998A] text-sm font-medium">{ index + 1 }</span>
                                    </div>
                                </div>
                                <div class="space-y-2 w-full">
                                    <p class="text-base md:text-lg font-bold text-black">{ *main }</p>
                                    <p class="text-sm md:text-base text-gray-600">{ *sub }</p>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
                <div class="mt-12">
                    <ApplyButtons />
                </div>
            </div>
        </section>
    }
}

#[function_component(QaSection)]
fn qa_section() -> Html {
    let (node, view) = use_in_view(animator::BLOCK);

    html! {
        <section ref={node} id="qa" class="py-16 md:py-24">
            <SectionHeader title="よくあるご質問" subtitle={Some(AttrValue::from("Q&A"))} />
            <div class="max-w-6xl mx-auto px-4">
                <div class="space-y-4">
                    { for QA.iter().enumerate().map(|(index, (question, answer))| html! {
                        <details
                            class={classes!(
                                PALETTE.light_bg, "border", PALETTE.border, PALETTE.hover_bg,
                                "p-6", "rounded-lg", "shadow-sm", "group", "hover:shadow-md",
                                fade_in_up(view.in_view, 500, FadeOffset::Short)
                            )}
                            style={transition_delay(index as u32 * QA_STAGGER_MS)}
                        >
                            <summary class="text-lg md:text-xl font-medium cursor-pointer list-none flex justify-between items-center text-gray-800">
                                <span class="flex items-center gap-3">
                                    <span class="text-[#D3B58D]">{"Q."}</span>
                                    { *question }
                                </span>
                                <span class="transform group-open:rotate-180 transition-transform duration-300 text-[#D3B58D]">{"▼"}</span>
                            </summary>
                            <div class="mt-4 pl-6 text-gray-600 leading-relaxed">
                                <span class="text-[#D3B58D] font-medium">{"A."}</span>
                                <span class="ml-2">{ *answer }</span>
                            </div>
                        </details>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(OwnerSection)]
fn owner_section() -> Html {
    let (node, view) = use_in_view(animator::BLOCK);

    html! {
        <section id={OWNER_SECTION_ID} class="py-12 md:py-24 bg-gradient-to-r from-[#D3B58D]/10 to-[#D3B58D]/5">
            <SectionHeader title="オーナー挨拶" subtitle={Some(AttrValue::from("Message from Owner"))} />
            <div ref={node} class={classes!("max-w-5xl", "mx-auto", "px-4", "sm:px-6", fade_in_up(view.in_view, 1000, FadeOffset::Short))}>
                <div class="bg-white p-6 md:p-12 rounded-lg shadow-lg">
                    <div class="flex flex-col md:flex-row gap-6 md:gap-12">
                        <div class="md:w-1/3 flex flex-col items-center text-center">
                            <div class={classes!("w-40", "h-40", "md:w-64", "md:h-64", "overflow-hidden", "rounded-full", "border-4", "border-white", "shadow-md", "mb-4", PALETTE.accent_bg)}>
                                <img src="/image/nagata.jpg" alt="オーナーの写真" class="w-full h-full object-cover" />
                            </div>
                            <h3 class="text-xl font-bold mb-1">{"オーナー"}</h3>
                            <p class="text-gray-600 mb-6 md:mb-0">{"永田"}</p>
                        </div>
                        <div class="md:w-2/3">
                            { for OWNER_MESSAGE.iter().map(|paragraph| html! {
                                <p class="block mb-4 md:mb-6 text-gray-800 text-base md:text-lg leading-relaxed">{ *paragraph }</p>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="bg-[#333] text-white py-8 md:py-16 px-4">
            <div class="max-w-6xl mx-auto">
                <div class="grid md:grid-cols-2 gap-6 md:gap-8">
                    <div>
                        <h3 class="text-xl mb-4 flex items-center">
                            <i class="fab fa-instagram text-2xl mr-2"></i>
                            {"Instagram"}
                        </h3>
                        <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" class="text-2xl hover:text-[#4a90e2]">
                            <i class="fab fa-instagram"></i>
                            <span class="text-sm ml-2">{"代表永田"}</span>
                        </a>
                    </div>
                    <div>
                        <h3 class="text-xl mb-4">{"店舗情報"}</h3>
                        <div class="mb-4">
                            <img src="/image/zentai.jpg" alt="店舗外観" class="w-full h-auto rounded-lg" />
                        </div>
                        <p>{ format!("住所：{STORE_ADDRESS}") }</p>
                        <p>{ format!("電話：{STORE_PHONE}") }</p>
                        <p>
                            {"営業時間："}
                            { for STORE_HOURS.iter().map(|line| html! { <><br />{ *line }</> }) }
                        </p>
                        <p>{ format!("定休日：{STORE_CLOSED}") }</p>
                        <div class="mt-4 w-full h-[400px]">
                            <iframe
                                src={config::MAP_EMBED_URL}
                                width="100%"
                                height="100%"
                                style="border: 0;"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
