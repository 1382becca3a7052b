// Local / cloud tabs

use plantuml_preview_core::Mode;
use yew::prelude::*;

use crate::messages::{mode_label, tab_class};

#[derive(Properties, PartialEq)]
pub struct ModeTabsProps {
    pub active: Mode,
    pub on_select: Callback<Mode>,
}

#[function_component(ModeTabs)]
pub fn mode_tabs(props: &ModeTabsProps) -> Html {
    let render_tab = |mode: Mode| {
        let onclick = props.on_select.reform(move |_: MouseEvent| mode);
        html! {
            <button class={tab_class(mode, props.active)} key={mode.as_str()} {onclick}>
                { mode_label(mode) }
            </button>
        }
    };

    html! {
        <div class="mode-tabs">
            { for [Mode::Local, Mode::Cloud].into_iter().map(render_tab) }
        </div>
    }
}
