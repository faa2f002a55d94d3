pub mod loading_page;
pub mod records_page;

use std::convert::Infallible;

use iced::{Element, Task};

use crate::{
    core::Record,
    gui::{AppState, Message},
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData<R: Record> {
    LoadingPage(loading_page::LoadingPageScreen),
    RecordsPage(records_page::RecordsScreen<R>),
}

impl<R: Record> Screen for ScreenData<R> {
    type Message = Message<R>;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LoadingPage(screen) => screen.view().map(Message::LoadingPage),
            ScreenData::RecordsPage(screen) => screen.view().map(Message::RecordsPage),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::Loaded(Ok(screen))) => {
                *x = ScreenData::RecordsPage(screen);
                Task::none()
            }
            (x, Message::Loaded(Err(error))) => {
                tracing::error!(database = ?state.config.database, "Failed to open records: {}", error);
                *x = ScreenData::LoadingPage(loading_page::LoadingPageScreen::failed(error));
                Task::none()
            }
            (ScreenData::RecordsPage(page), Message::RecordsPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::RecordsPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            (ScreenData::LoadingPage(page), Message::LoadingPage(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::LoadingPage)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(never) => match never {},
            },
            _ => Task::none(),
        }
    }
}
