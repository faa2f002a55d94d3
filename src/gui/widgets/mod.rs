use iced::{
    Element, Length, Theme,
    widget::{Row, container, text, text_input},
};

pub fn labeled_input<'a, Message>(
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    text_input(placeholder, value)
        .on_input(on_input)
        .padding(10)
        .into()
}

/// One table cell; every cell shares the row width equally.
pub fn cell<'a, Message>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message>
where
    Message: 'a,
{
    container(content)
        .width(Length::FillPortion(1))
        .padding([0, 8])
        .into()
}

pub fn text_cell<'a, Message>(content: String) -> Element<'a, Message>
where
    Message: 'a,
{
    cell(text(content))
}

fn header_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style::default().background(palette.background.weak.color)
}

fn row_style(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style::default().border(
        iced::border::color(palette.background.strong.color).width(1),
    )
}

pub fn table_row<'a, Message>(cells: Vec<Element<'a, Message>>, header: bool) -> Element<'a, Message>
where
    Message: 'a,
{
    container(Row::with_children(cells).align_y(iced::Alignment::Center))
        .padding([8, 0])
        .width(Length::Fill)
        .style(if header { header_style } else { row_style })
        .into()
}
