use yew::prelude::*;

use crate::pages::content::StaffProfile;

#[derive(Properties, PartialEq)]
pub struct StaffCardProps {
    pub profile: &'static StaffProfile,
}

impl PartialEq for StaffProfile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.image == other.image
    }
}

#[function_component(StaffCard)]
pub fn staff_card(props: &StaffCardProps) -> Html {
    let profile = props.profile;

    let media = match (profile.video_url, profile.instagram_url) {
        (Some(video), _) => html! {
            <div class="w-full aspect-video max-w-[500px] mx-auto">
                <video src={video} controls=true class="w-full h-full rounded-lg" preload="metadata" />
            </div>
        },
        (None, Some(instagram)) => html! {
            <div class="w-full aspect-[9/16] max-w-[280px] mx-auto">
                <iframe src={instagram} class="w-full h-full" frameborder="0" scrolling="no" />
            </div>
        },
        (None, None) => html! {},
    };

    html! {
        <div class="bg-[#f5f5f5] p-4 md:p-8 rounded-xl shadow-sm">
            <div class="bg-white/80 p-6 rounded-xl shadow-sm h-full flex flex-col">
                <div class="flex items-center space-x-2 mb-4">
                    <i class="fas fa-quote-left text-[#FF998A] text-xl"></i>
                </div>

                <div class="flex items-center mb-6">
                    <div class="w-24 h-24 md:w-28 md:h-28 overflow-hidden rounded-full border-4 border-white shadow-md mr-4 flex-shrink-0">
                        <img src={profile.image} alt={format!("スタッフ{}", profile.name)} class="w-full h-full object-cover" />
                    </div>
                    <div>
                        <p class="font-bold text-lg">{ profile.name }</p>
                        <p class="text-sm text-gray-600">{ profile.position }</p>
                    </div>
                </div>

                <div class="space-y-4 mb-6">
                    <p class="text-gray-700">{ profile.message }</p>
                </div>

                { media }
            </div>
        </div>
    }
}
