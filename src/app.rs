mod state;
mod style;
mod ui;

use quick_links::{QuickLinks, Store};
use state::{LinkForm, Tab};

pub const APP_DISPLAY_NAME: &str = "Quick Links";
pub const WINDOW_WIDTH: f32 = 420.0;
pub const WINDOW_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_WIDTH: f32 = 300.0;
pub const MIN_WINDOW_HEIGHT: f32 = 380.0;

pub struct QuickLinksApp {
    links: QuickLinks<Box<dyn Store>>,
    tab: Tab,
    form: Option<LinkForm>,
}

impl QuickLinksApp {
    pub fn new(links: QuickLinks<Box<dyn Store>>) -> Self {
        Self {
            links,
            tab: Tab::Company,
            form: None,
        }
    }

    fn open_add_form(&mut self) {
        self.links.cancel_drag();
        self.form = Some(LinkForm::for_new());
    }
}
