// Components module

pub mod action_buttons;
pub mod editor;
pub mod example_buttons;
pub mod format_selector;
pub mod mode_panel;
pub mod mode_tabs;
pub mod preview;

pub use action_buttons::ActionButtons;
pub use editor::Editor;
pub use example_buttons::ExampleButtons;
pub use format_selector::FormatSelector;
pub use mode_panel::ModePanel;
pub use mode_tabs::ModeTabs;
pub use preview::Preview;
