use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    #[prop_or(false)]
    pub compact: bool,
}

#[function_component(NoticeBanner)]
pub fn notice_banner(props: &NoticeProps) -> Html {
    html! {
        <div class={classes!("notice-banner", props.compact.then(|| "compact"))}>
            <div class="notice-icon">
                <div class="notice-pulse" />
                <span>{"!"}</span>
            </div>
            <div class="notice-text">
                <p class="notice-title">{"⚠️ هام - Important"}</p>
                <p class="notice-ar">{"يرجى إتمام سداد المبلغ المتبقي المستحق عبر أحد الخيارات التالية:"}</p>
                <p class="notice-en" dir="ltr">{"Please complete payment using one of the options below:"}</p>
            </div>
        </div>
    }
}
