use crate::{
    core::Record,
    gui::screens::{
        ScreenMessage, loading_page::LoadingPageScreen, records_page::RecordsScreen,
    },
};

#[derive(Debug, Clone)]
pub enum Message<R: Record> {
    LoadingPage(ScreenMessage<LoadingPageScreen>),
    RecordsPage(ScreenMessage<RecordsScreen<R>>),
    Loaded(Result<RecordsScreen<R>, String>),
}
