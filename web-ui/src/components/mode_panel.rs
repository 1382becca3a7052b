// Controls and instructions of the active mode

use plantuml_preview_core::Mode;
use yew::prelude::*;

use crate::messages::mode_instructions;

#[derive(Properties, PartialEq)]
pub struct ModePanelProps {
    pub mode: Mode,
    pub server_url: String,
    pub on_server_url_change: Callback<String>,
}

#[function_component(ModePanel)]
pub fn mode_panel(props: &ModePanelProps) -> Html {
    let on_input = {
        let on_change = props.on_server_url_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <div class="mode-content active" id={format!("{}-mode", props.mode)}>
            <p class="mode-instructions">{ mode_instructions(props.mode) }</p>
            if props.mode == Mode::Local {
                <label class="server-url">
                    { "Server URL:" }
                    <input
                        id="serverUrl"
                        type="text"
                        value={props.server_url.clone()}
                        oninput={on_input}
                    />
                </label>
            }
        </div>
    }
}
