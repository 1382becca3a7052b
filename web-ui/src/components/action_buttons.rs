// Generate / clear / download buttons

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub busy: bool,
    pub on_generate: Callback<()>,
    pub on_clear: Callback<()>,
    pub on_download: Callback<()>,
}

#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    let on_generate = props.on_generate.reform(|_: MouseEvent| ());
    let on_clear = props.on_clear.reform(|_: MouseEvent| ());
    let on_download = props.on_download.reform(|_: MouseEvent| ());

    html! {
        <div class="action-buttons">
            // Generating again while busy is allowed; the newest attempt wins
            <button class="btn btn-primary" onclick={on_generate} title="Ctrl+Enter">
                { if props.busy { "Generating..." } else { "Generate Diagram" } }
            </button>
            <button class="btn btn-secondary" onclick={on_clear}>
                { "Clear" }
            </button>
            <button class="btn btn-secondary" onclick={on_download} disabled={props.busy}>
                { "Download" }
            </button>
        </div>
    }
}
