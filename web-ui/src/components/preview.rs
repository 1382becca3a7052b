// Preview component for displaying diagram

use yew::prelude::*;

use crate::messages::{LOADING_TEXT, PREVIEW_PLACEHOLDER};

#[derive(Properties, PartialEq)]
pub struct PreviewProps {
    pub image_url: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub placeholder: bool,
}

#[function_component(Preview)]
pub fn preview(props: &PreviewProps) -> Html {
    html! {
        <div class="diagram-display">
            if props.loading {
                <div class="loading">{ LOADING_TEXT }</div>
            }
            if let Some(message) = &props.error {
                <div class="error-message">{ message.clone() }</div>
            }
            if let Some(url) = &props.image_url {
                <img class="diagram-image" src={url.clone()} alt="PlantUML Diagram" />
            } else if props.placeholder {
                <div class="placeholder">{ PREVIEW_PLACEHOLDER }</div>
            }
        </div>
    }
}
