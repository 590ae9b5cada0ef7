pub mod box_scene;
pub mod settings_panel;
mod throbber;

use crate::app::App;
use crate::storage::PrizeStore;
use ratatui::Frame;
use settings_panel::SettingsPanel;

/// Top-level draw: the box scene, with the settings overlay on top when open.
pub fn draw_ui<S: PrizeStore>(frame: &mut Frame, app: &App<S>, panel: &SettingsPanel) {
    let size = frame.size();
    box_scene::draw_box_scene(frame, size, app);

    if app.settings_open {
        panel.draw(frame, app.registry());
    }
}
