use std::sync::Arc;

use iced::{Element, Task};

use crate::{
    config::{AppConfig, Variant},
    core::{Item, Record, SqliteStore, User},
    editor::Editor,
    gui::{
        AppState, Message,
        screens::{
            Screen, ScreenData, ScreenMessage, loading_page::LoadingPageScreen,
            records_page::RecordsScreen,
        },
    },
};

pub struct RecordsApp<R: Record> {
    screen: ScreenData<R>,
    state: AppState,
}

impl<R: Record> RecordsApp<R> {
    pub fn new(config: AppConfig) -> (Self, Task<Message<R>>) {
        let database = config.database.clone();
        let open = Task::perform(
            async move {
                let store = SqliteStore::open(&database).await?;
                let editor = Editor::load(Arc::new(store)).await;
                anyhow::Ok(RecordsScreen::new(editor))
            },
            |result: anyhow::Result<RecordsScreen<R>>| {
                Message::Loaded(result.map_err(|e| format!("{:#}", e)))
            },
        );
        (
            Self {
                screen: ScreenData::LoadingPage(LoadingPageScreen::default()),
                state: AppState::new(config),
            },
            open,
        )
    }

    pub fn title(&self) -> String {
        format!("Recordbook - {}s", R::NOUN)
    }

    pub fn update(&mut self, message: Message<R>) -> Task<Message<R>> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message<R>> {
        self.screen.view().map(|message| match message {
            ScreenMessage::ScreenMessage(message) => message,
            ScreenMessage::ParentMessage(never) => match never {},
        })
    }
}

fn run_variant<R: Record>(config: AppConfig) -> iced::Result {
    iced::application(
        move || RecordsApp::<R>::new(config.clone()),
        RecordsApp::<R>::update,
        RecordsApp::<R>::view,
    )
    .title(RecordsApp::<R>::title)
    .run()
}

/// Opens the window for the configured record variant and blocks until it
/// is closed.
pub fn run(config: AppConfig) -> iced::Result {
    match config.variant {
        Variant::Users => run_variant::<User>(config),
        Variant::Items => run_variant::<Item>(config),
    }
}
