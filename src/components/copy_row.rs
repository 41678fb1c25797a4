use yew::prelude::*;

use crate::models::CopyField;

#[derive(Properties, PartialEq)]
pub struct CopyRowProps {
    pub field: CopyField,
    pub copied: bool,
    pub on_copy: Callback<CopyField>,
}

#[function_component(CopyRow)]
pub fn copy_row(props: &CopyRowProps) -> Html {
    let onclick = {
        let field = props.field;
        let on_copy = props.on_copy.clone();
        Callback::from(move |_: MouseEvent| on_copy.emit(field))
    };

    html! {
        <div class="copy-row">
            <label class="copy-label">{props.field.label}</label>
            <div class="copy-value-box">
                <code class="copy-value" dir="ltr">{props.field.value}</code>
                <button class="copy-button" {onclick} title="Copy">
                    <span class="copy-icon">{"⧉"}</span>
                    {
                        if props.copied {
                            html! { <span class="copied-badge">{"✓ Copied!"}</span> }
                        } else {
                            html! {}
                        }
                    }
                </button>
            </div>
        </div>
    }
}
