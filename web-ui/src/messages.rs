// Static UI text

use plantuml_preview_core::Mode;

pub const EDITOR_PLACEHOLDER: &str = "Enter PlantUML code...
Example:
@startuml
Alice -> Bob: Hello
Bob --> Alice: Hi!
@enduml";

pub const PREVIEW_PLACEHOLDER: &str = "The generated diagram will appear here";

pub const LOADING_TEXT: &str = "Generating diagram...";

/// Tab label of a mode
pub fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Local => "Local Server",
        Mode::Cloud => "Cloud Service",
    }
}

/// Instructions shown under the tabs for the active mode
pub fn mode_instructions(mode: Mode) -> &'static str {
    match mode {
        Mode::Local => {
            "Start the local render server (plantuml.jar and Java required) and enter its /render URL below."
        }
        Mode::Cloud => {
            "Diagrams are rendered by the public PlantUML service. Your source is sent to plantuml.com inside the request URL."
        }
    }
}

/// CSS classes of a mode tab
pub fn tab_class(mode: Mode, active: Mode) -> &'static str {
    if mode == active {
        "mode-tab active"
    } else {
        "mode-tab"
    }
}
