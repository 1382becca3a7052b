// Source editor; Ctrl+Enter submits

use yew::prelude::*;

use crate::messages::EDITOR_PLACEHOLDER;

#[derive(Properties, PartialEq)]
pub struct EditorProps {
    pub value: String,
    pub on_change: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(Editor)]
pub fn editor(props: &EditorProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.ctrl_key() && e.key() == "Enter" {
                e.prevent_default();
                on_submit.emit(());
            }
        })
    };

    html! {
        <textarea
            id="plantUmlInput"
            class="editor-textarea"
            placeholder={EDITOR_PLACEHOLDER}
            oninput={on_input}
            onkeydown={on_keydown}
            value={props.value.clone()}
        />
    }
}
