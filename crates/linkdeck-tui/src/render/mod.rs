//! Top-level frame rendering

use ratatui::Frame;

use linkdeck_app::state::AppState;

use crate::layout;
use crate::widgets::{nav_bar, overlay, NavBar, SectionPage, StatusBar, StudioMenu};

/// Render one frame from the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(NavBar::new(state), areas.nav);
    frame.render_widget(SectionPage::new(state), areas.content);
    frame.render_widget(StatusBar::new(state), areas.status);

    if state.nav.menu_open {
        overlay::dim_background(frame.buffer_mut(), areas.content);
        let anchor = nav_bar::trigger_rect(state, areas.nav);
        frame.render_widget(StudioMenu::new(state, anchor), frame.area());
    }
}
