use yew::prelude::*;

use crate::components::copy_row::CopyRow;
use crate::components::notice::NoticeBanner;
use crate::models::{CopyField, CopyKey, Panel};

#[derive(Properties, PartialEq)]
pub struct PaymentPanelProps {
    pub panel: Panel,
    pub expanded: bool,
    pub copied: Option<CopyKey>,
    pub on_toggle: Callback<Panel>,
    pub on_copy: Callback<CopyField>,
}

/// One accordion section. Collapsed panels render only their header.
#[function_component(PaymentPanel)]
pub fn payment_panel(props: &PaymentPanelProps) -> Html {
    let panel = props.panel;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(panel))
    };

    let chevron_style = if props.expanded {
        "transform: rotate(180deg);"
    } else {
        "transform: rotate(0deg);"
    };

    html! {
        <div class={classes!("payment-panel", props.expanded.then(|| "expanded"))} id={panel.id()}>
            <button class="panel-header" {onclick} aria-expanded={props.expanded.to_string()}>
                <div class="panel-title">
                    <p class="panel-title-ar">{panel.title_ar()}</p>
                    <p class="panel-title-en">{panel.title_en()}</p>
                </div>
                <span class="chevron" style={chevron_style}>{"⌄"}</span>
            </button>
            {
                if props.expanded {
                    html! {
                        <div class="panel-body">
                            {
                                if panel.shows_notice() {
                                    html! { <NoticeBanner compact={true} /> }
                                } else {
                                    html! {}
                                }
                            }
                            { for panel.fields().into_iter().map(|field| html! {
                                <CopyRow
                                    key={field.key.as_str()}
                                    {field}
                                    copied={props.copied == Some(field.key)}
                                    on_copy={props.on_copy.clone()}
                                />
                            }) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
