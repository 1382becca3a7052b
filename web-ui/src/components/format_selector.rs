// Output format radio group

use plantuml_preview_core::OutputFormat;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormatSelectorProps {
    pub selected: OutputFormat,
    pub on_select: Callback<OutputFormat>,
}

#[function_component(FormatSelector)]
pub fn format_selector(props: &FormatSelectorProps) -> Html {
    let render_option = |format: OutputFormat| {
        let onchange = props.on_select.reform(move |_: Event| format);
        html! {
            <label class="format-option" key={format.as_str()}>
                <input
                    type="radio"
                    name="format"
                    value={format.as_str()}
                    checked={props.selected == format}
                    {onchange}
                />
                { format.as_str().to_uppercase() }
            </label>
        }
    };

    html! {
        <div class="format-selector">
            <span>{ "Output format:" }</span>
            { for [OutputFormat::Svg, OutputFormat::Png].into_iter().map(render_option) }
        </div>
    }
}
