//! HTML rendering of the widget tree.

use maud::{html, Markup, DOCTYPE};

use super::widget::{Style, Widget};

pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
pub const PAGE_TITLE: &str = "Download Statement";

fn style_attr(style: &Style) -> Option<String> {
    (!style.is_empty()).then(|| style.to_css())
}

/// Full HTML document around the rendered tree.
pub fn page(root: &Widget) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                link rel="stylesheet" href=(BOOTSTRAP_CSS);
            }
            body {
                (render(root))
            }
        }
    }
}

pub fn render(widget: &Widget) -> Markup {
    match widget {
        Widget::Container { children } => html! {
            div.container {
                @for child in children { (render(child)) }
            }
        },
        Widget::Row { class, children } => html! {
            div class={ "row " (class) } {
                @for child in children { (render(child)) }
            }
        },
        Widget::Col { width, children } => html! {
            div class={ "col-" (width) } {
                @for child in children { (render(child)) }
            }
        },
        Widget::Card { style, children } => html! {
            div.card style=[style_attr(style)] {
                div.card-body {
                    @for child in children { (render(child)) }
                }
            }
        },
        Widget::Title { text, style } => html! {
            h4.card-title.text-center style=[style_attr(style)] { (text) }
        },
        Widget::Label {
            text,
            for_id,
            class,
            style,
        } => html! {
            label class={ "form-label " (class) } for=[for_id.as_deref()] style=[style_attr(style)] {
                (text)
            }
        },
        Widget::Dropdown {
            id,
            options,
            value,
            style,
        } => html! {
            select.form-select.mb-3 id=(id) name=(id) style=[style_attr(style)] {
                @for label in options {
                    option value=(label) selected[value.as_ref() == Some(label)] { (label) }
                }
            }
        },
        Widget::DatePicker {
            id,
            placeholder,
            date,
            style,
        } => html! {
            input.form-control.mb-3 type="date" id=(id) name=(id) placeholder=(placeholder)
                value=[date.map(|d| d.format("%Y-%m-%d").to_string())]
                style=[style_attr(style)];
        },
        Widget::RadioItems {
            id,
            options,
            value,
            inline,
            style,
        } => html! {
            div.mb-3 id=(id) style=[style_attr(style)] {
                @for (index, option) in options.iter().enumerate() {
                    @let option_id = format!("{id}-{index}");
                    div.form-check.form-check-inline[*inline] {
                        input.form-check-input type="radio" id=(option_id) name=(id)
                            value=(option.as_str()) checked[option == value];
                        label.form-check-label for=(option_id) { (option.as_str()) }
                    }
                }
            }
        },
        Widget::Button {
            id,
            label,
            color,
            style,
        } => html! {
            button type="button" id=(id) class={ "btn btn-" (color) " w-100 mt-3" }
                style=[style_attr(style)] {
                (label)
            }
        },
        Widget::DataTable {
            id,
            columns,
            rows,
            header_style,
            cell_style,
        } => {
            let header_css = header_style.to_css();
            let cell_css = cell_style.to_css();
            html! {
                table.table id=(id) style="width: 100%; border: none;" {
                    thead {
                        tr {
                            @for column in columns {
                                th style={ (cell_css) " " (header_css) } { (column.name) }
                            }
                        }
                    }
                    tbody {
                        @for row in rows {
                            tr {
                                @for column in columns {
                                    td style=(cell_css) { (row.cell(&column.id).unwrap_or_default()) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat::FileType;
    use crate::view::{build_layout, DashboardModel};

    fn sample_html() -> String {
        page(&build_layout(&DashboardModel::sample())).into_string()
    }

    #[test]
    fn first_account_is_selected() {
        let html = sample_html();
        assert!(html.contains(r#"<option value="Chris Krüger" selected>Chris Krüger</option>"#));
        assert!(html.contains(r#"<option value="John Doe">John Doe</option>"#));
    }

    #[test]
    fn pdf_radio_is_checked() {
        let html = sample_html();
        assert!(html.contains(r#"value="PDF" checked"#));
        assert!(!html.contains(r#"value="Excel" checked"#));

        let excel = page(&build_layout(
            &DashboardModel::sample().with_file_type(FileType::Excel),
        ))
        .into_string();
        assert!(excel.contains(r#"value="Excel" checked"#));
        assert!(!excel.contains(r#"value="PDF" checked"#));
    }

    #[test]
    fn date_inputs_render_without_value() {
        let html = sample_html();
        assert!(html.contains(r#"placeholder="Start date""#));
        assert!(html.contains(r#"placeholder="End date""#));
        assert!(!html.contains("value=\"20"));
    }

    #[test]
    fn table_renders_three_body_rows() {
        let html = sample_html();
        let body = html.split("<tbody>").nth(1).unwrap();
        assert_eq!(body.matches("<tr>").count(), 3);
        assert!(body.contains(">-50</td>"));
        assert!(html.contains("background-color: black; color: white;"));
    }

    #[test]
    fn download_button_has_no_action() {
        let html = sample_html();
        assert!(html.contains(r#"<button type="button" id="download-btn""#));
        assert!(!html.contains("<form"));
        assert!(!html.contains("onclick"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn rendering_is_stable() {
        assert_eq!(sample_html(), sample_html());
    }
}
