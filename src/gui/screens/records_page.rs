use std::convert::Infallible;

use iced::{
    Element, Task,
    widget::{Column, button, column, container, row, scrollable, text},
};

use crate::{
    core::{Draft, Record, RecordId, SqliteStore},
    editor::Editor,
    gui::{
        AppState, dialog,
        screens::{Screen, ScreenMessage},
        widgets::{cell, labeled_input, table_row, text_cell},
    },
    presentation::{Notice, form_title, submit_label},
};

#[derive(Debug, Clone)]
pub struct RecordsScreen<R: Record> {
    editor: Editor<R, SqliteStore>,
}

#[derive(Debug, Clone)]
pub enum RecordsMessage<R: Record> {
    FieldChanged(<R::Draft as Draft>::Field, String),
    Submit,
    Edit(RecordId),
    Delete(RecordId),
    DeleteConfirmed(RecordId),
    None,
}

fn local<R: Record>(message: RecordsMessage<R>) -> ScreenMessage<RecordsScreen<R>> {
    ScreenMessage::ScreenMessage(message)
}

fn show_notice<R: Record>(notice: Notice) -> Task<ScreenMessage<RecordsScreen<R>>> {
    Task::perform(dialog::present::<R>(notice), |_| local(RecordsMessage::None))
}

impl<R: Record> RecordsScreen<R> {
    pub fn new(editor: Editor<R, SqliteStore>) -> Self {
        Self { editor }
    }

    fn form_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = self.editor.form();
        let draft = form.draft();

        let inputs = R::FIELDS.iter().map(|&field| {
            labeled_input(R::field_label(field), draft.get(field), move |value| {
                local(RecordsMessage::FieldChanged(field, value))
            })
        });

        column![text(form_title::<R>(form.mode())).size(24)]
            .extend(inputs)
            .push(
                button(text(submit_label::<R>(form.mode())))
                    .on_press(local(RecordsMessage::Submit)),
            )
            .spacing(10)
            .into()
    }

    fn list_view(&self) -> Option<Element<'_, ScreenMessage<Self>>> {
        let list = self.editor.list_view();
        if list.is_empty() {
            return None;
        }

        let header = table_row(
            list.header()
                .into_iter()
                .map(|label| text_cell(label.to_string()))
                .collect(),
            true,
        );

        let rows = list.rows().into_iter().map(|entry| {
            let actions = row![
                button("Edit").on_press(local(RecordsMessage::Edit(entry.id.clone()))),
                button("Delete")
                    .style(button::danger)
                    .on_press(local(RecordsMessage::Delete(entry.id))),
            ]
            .spacing(10);
            let mut cells: Vec<_> = entry.cells.into_iter().map(text_cell).collect();
            cells.push(cell(actions));
            table_row(cells, false)
        });

        Some(
            column![text(list.title()).size(20), header]
                .extend(rows)
                .spacing(0)
                .into(),
        )
    }
}

impl<R: Record> Screen for RecordsScreen<R> {
    type Message = RecordsMessage<R>;
    type ParentMessage = Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = Column::new().push(self.form_view()).spacing(24).padding(16);
        if let Some(list) = self.list_view() {
            content = content.push(list);
        }
        container(scrollable(content)).into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            RecordsMessage::FieldChanged(field, value) => {
                self.editor.set_field(field, value);
                Task::none()
            }
            RecordsMessage::Submit => {
                let (notice, write) = self.editor.submit();
                match write {
                    Some(write) => Task::batch([
                        Task::perform(write.best_effort(), |()| local(RecordsMessage::None)),
                        show_notice(notice),
                    ]),
                    None => show_notice(notice),
                }
            }
            RecordsMessage::Edit(id) => {
                if !self.editor.edit(&id) {
                    tracing::warn!(%id, "edit requested for unknown record");
                }
                Task::none()
            }
            RecordsMessage::Delete(id) => match self.editor.request_delete(&id) {
                Some(question) => Task::perform(dialog::present::<R>(question), move |confirmed| {
                    if confirmed {
                        local(RecordsMessage::DeleteConfirmed(id.clone()))
                    } else {
                        local(RecordsMessage::None)
                    }
                }),
                None => Task::none(),
            },
            RecordsMessage::DeleteConfirmed(id) => {
                let (notice, write) = self.editor.confirm_delete(&id);
                Task::batch([
                    Task::perform(write.best_effort(), |()| local(RecordsMessage::None)),
                    show_notice(notice),
                ])
            }
            RecordsMessage::None => Task::none(),
        }
    }
}
