use iced::widget::{row, text};
use iced::{Color, Element};

/// Loading, info and error messages shown above the viewer.
#[derive(Debug, Clone, Default)]
pub struct Status {
    loading: Option<String>,
    info: Option<String>,
    error: Option<String>,
}

impl Status {
    /// Starts a request. Messages from the previous one are dropped.
    pub fn begin(&mut self, message: impl Into<String>) {
        self.info = None;
        self.error = None;
        self.loading = Some(message.into());
    }

    pub fn succeed(&mut self, info: impl Into<String>) {
        self.loading = None;
        self.info = Some(info.into());
    }

    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = None;
        self.error = Some(error.into());
    }

    /// Ends a request that produced no message, e.g. a cancelled dialog.
    pub fn settle(&mut self) {
        self.loading = None;
    }

    pub fn clear_info(&mut self) {
        self.info = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let mut panel = row![].spacing(15);
        if let Some(loading) = &self.loading {
            panel = panel.push(text(loading).size(14));
        }
        if let Some(info) = self.info() {
            panel = panel.push(text(info).size(14).color(Color::from_rgb(0.3, 0.7, 0.4)));
        }
        if let Some(error) = self.error() {
            panel = panel.push(text(error).size(14).color(Color::from_rgb(0.85, 0.3, 0.3)));
        }
        panel.into()
    }
}
