//! UI module for rendering the TUI

mod components;
mod dashboards;
mod details;
mod landing;
mod layout;
mod listing;
mod splash;
mod widgets;
mod wizard;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.state.current_view == View::Splash {
        if let Some(splash) = &app.splash_state {
            splash::draw(frame, area, splash);
        }
    } else {
        let (header_area, main_area) = layout::create_layout(area);
        layout::draw_header(frame, header_area, app);

        match app.state.current_view {
            View::Splash => {}
            View::Landing => landing::draw(frame, main_area, app),
            View::EquipmentListing => listing::draw(frame, main_area, app),
            View::EquipmentDetails => details::draw(frame, main_area, app),
            View::RentalWorkflow => wizard::draw(frame, main_area, app),
            View::ClientDashboard => dashboards::draw_client(frame, main_area, app),
            View::VendorDashboard => dashboards::draw_vendor(frame, main_area, app),
            View::AdminDashboard => dashboards::draw_admin(frame, main_area, app),
        }

        layout::draw_status_bar(frame, app);
    }

    // Error dialog is modal and drawn last
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
