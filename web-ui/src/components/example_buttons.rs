// Shortcuts that load a built-in example

use plantuml_preview_core::ExampleKind;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExampleButtonsProps {
    pub on_select: Callback<ExampleKind>,
}

#[function_component(ExampleButtons)]
pub fn example_buttons(props: &ExampleButtonsProps) -> Html {
    let render_button = |kind: ExampleKind| {
        let onclick = props.on_select.reform(move |_: MouseEvent| kind);
        html! {
            <button class="example-btn" key={kind.key()} {onclick}>
                { kind.label() }
            </button>
        }
    };

    html! {
        <div class="examples">
            <span class="examples-title">{ "Examples:" }</span>
            { for ExampleKind::ALL.into_iter().map(render_button) }
        </div>
    }
}
