// Web UI library for PlantUML Preview
//
// This crate provides the Yew components of the preview page and binds
// them to the platform-agnostic `PreviewController`.

use plantuml_preview_core::{
    ExampleKind, Mode, OutputFormat, PreviewConfig, PreviewController,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub mod backend;
pub mod components;
pub mod errors;
pub mod messages;
pub mod view;

// Re-export components
pub use backend::HttpBackend;
pub use components::*;
pub use view::YewView;

pub type Controller = PreviewController<YewView, HttpBackend>;

/// Main application component (state and event wiring)
#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| PreviewConfig::default());

    let mode = use_state(|| config.mode);
    let source = use_state(String::new);
    let format = use_state(|| config.format);
    let server_url = use_state(|| config.local_server_url.clone());
    let loading = use_state(|| false);
    let image_url = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let placeholder = use_state(|| true);
    let busy = use_state(|| false);

    let controller: std::rc::Rc<Controller> = {
        let view = YewView {
            mode: mode.clone(),
            source: source.clone(),
            loading: loading.clone(),
            image_url: image_url.clone(),
            error: error.clone(),
            placeholder: placeholder.clone(),
            busy: busy.clone(),
        };
        let config = config.clone();
        use_memo((), move |_| {
            let backend = HttpBackend::new(config.cloud_base_url.clone());
            PreviewController::with_config(view, backend, &config)
        })
    };

    // Render the sequence example once the page is up
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = controller.load_example(ExampleKind::Sequence).await {
                    tracing::debug!("initial generation failed: {}", e);
                }
            });
            || ()
        });
    }

    let on_mode = {
        let controller = controller.clone();
        Callback::from(move |mode: Mode| controller.switch_mode(mode))
    };

    let on_server_url_change = {
        let controller = controller.clone();
        let server_url = server_url.clone();
        Callback::from(move |url: String| {
            controller.set_server_url(url.clone());
            server_url.set(url);
        })
    };

    let on_source_change = {
        let controller = controller.clone();
        let source = source.clone();
        Callback::from(move |text: String| {
            controller.set_source(text.clone());
            source.set(text);
        })
    };

    let on_format = {
        let controller = controller.clone();
        let format = format.clone();
        Callback::from(move |selected: OutputFormat| {
            controller.set_format(selected);
            format.set(selected);
        })
    };

    let on_generate = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.generate().await {
                    tracing::debug!("generation failed: {}", e);
                }
            });
        })
    };

    let on_clear = {
        let controller = controller.clone();
        Callback::from(move |_: ()| controller.clear())
    };

    let on_download = {
        let controller = controller.clone();
        Callback::from(move |_: ()| {
            if let Err(e) = controller.download() {
                tracing::debug!("download refused: {}", e);
            }
        })
    };

    let on_example = {
        let controller = controller.clone();
        Callback::from(move |kind: ExampleKind| {
            let controller = controller.clone();
            spawn_local(async move {
                if let Err(e) = controller.load_example(kind).await {
                    tracing::debug!("example {} failed: {}", kind, e);
                }
            });
        })
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{ "PlantUML Preview" }</h1>
            </header>

            // Backend selection
            <div class="mode-selector">
                <ModeTabs active={*mode} on_select={on_mode} />
                <ModePanel
                    mode={*mode}
                    server_url={(*server_url).clone()}
                    on_server_url_change={on_server_url_change}
                />
            </div>

            <div class="editor-preview-container">
                // Source editor
                <div class="editor-area">
                    <div class="editor-header">{ "PlantUML Source" }</div>
                    <ExampleButtons on_select={on_example} />
                    <Editor
                        value={(*source).clone()}
                        on_change={on_source_change}
                        on_submit={on_generate.clone()}
                    />
                    <FormatSelector selected={*format} on_select={on_format} />
                    <ActionButtons
                        busy={*busy}
                        on_generate={on_generate}
                        on_clear={on_clear}
                        on_download={on_download}
                    />
                </div>

                // Diagram preview
                <div class="preview-area">
                    <div class="preview-header">{ "Preview" }</div>
                    <Preview
                        image_url={(*image_url).clone()}
                        error={(*error).clone()}
                        loading={*loading}
                        placeholder={*placeholder}
                    />
                </div>
            </div>
        </div>
    }
}
