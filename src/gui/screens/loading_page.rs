use std::convert::Infallible;

use iced::{
    Alignment::Center,
    Element, Task,
    widget::{column, container, text},
};

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
};

/// Shown while the store opens, and in place of the records if it could not.
#[derive(Debug, Clone, Default)]
pub struct LoadingPageScreen {
    error: Option<String>,
}

impl LoadingPageScreen {
    pub fn failed(error: String) -> Self {
        Self { error: Some(error) }
    }
}

impl Screen for LoadingPageScreen {
    type Message = Infallible;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let content: Element<'_, ScreenMessage<Self>> = match &self.error {
            None => text("Loading...").into(),
            Some(error) => column![
                text("Could not open the record store").size(24),
                text(error.as_str()),
            ]
            .spacing(12)
            .align_x(Center)
            .into(),
        };
        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {}
    }
}
