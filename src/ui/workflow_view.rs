//! Assign and collect screens, plus the scanner panel they share.

use crate::app::{FieldWorkflow, Message};
use crate::ui::{components, feedback, MUTED, SUCCESS};
use iced::widget::{button, column, progress_bar, row, scrollable, text, text_input, Column};
use iced::{Element, Fill};
use kegtrack::{FinishRequest, Outlet, WorkflowKind};

fn titles(kind: WorkflowKind) -> (&'static str, &'static str, &'static str) {
    match kind {
        WorkflowKind::Assignment => (
            "Assign Kegs to Outlets",
            "Select outlet and scan keg QR codes",
            "Select Outlet",
        ),
        WorkflowKind::Collection => (
            "Collect Kegs",
            "Select outlet and scan kegs to collect",
            "Collection Location",
        ),
    }
}

fn outlet_detail(kind: WorkflowKind, outlet: &Outlet) -> String {
    match kind {
        WorkflowKind::Assignment => format!("{} kegs assigned", outlet.assigned_kegs),
        WorkflowKind::Collection => {
            format!("{} ready for pickup", feedback::kegs(outlet.eligible_kegs().len()))
        }
    }
}

pub fn view<'a>(
    workflow: &'a FieldWorkflow,
    picker_open: bool,
    pending_finish: Option<&'a FinishRequest>,
) -> Element<'a, Message> {
    let kind = workflow.kind();
    let (title, subtitle, section) = titles(kind);

    let header: Element<'a, Message> = components::screen_header(title, subtitle.to_string());
    let mut content = column![header].spacing(14);

    content = content.push(components::section_title(section)).push(
        button(text(workflow.selected().map_or("Select Outlet", |o| o.name.as_str())).width(Fill))
            .on_press(if picker_open {
                Message::ClosePicker
            } else {
                Message::OpenPicker(kind)
            })
            .style(button::secondary)
            .width(Fill)
            .padding(12),
    );

    if picker_open {
        content = content.push(view_picker(workflow));
    } else if let Some(outlet) = workflow.selected() {
        content = content.push(components::card_container(
            column![
                components::muted_text(&outlet.address),
                text(outlet_detail(kind, outlet)).size(14),
            ]
            .spacing(4),
        ));
    }

    if let Some(progress) = workflow.progress() {
        content = content.push(
            column![
                text(format!("Progress: {}", progress)).size(14),
                progress_bar(0.0..=1.0, progress.ratio() as f32),
            ]
            .spacing(6),
        );
    }

    if let Some(request) = pending_finish {
        content = content.push(view_confirmation(request));
    } else {
        let mut actions = row![button(text("Scan QR Code").width(Fill))
            .on_press(Message::StartScan(kind))
            .width(Fill)
            .padding(12)]
        .spacing(10);
        if kind == WorkflowKind::Collection {
            actions = actions.push(
                button(text("Finish Collection").width(Fill))
                    .on_press(Message::FinishCollection)
                    .style(button::success)
                    .width(Fill)
                    .padding(12),
            );
        }
        content = content.push(actions);
    }

    let records = workflow.records();
    if !records.is_empty() {
        let (heading, verb) = match kind {
            WorkflowKind::Assignment => ("Scanned Kegs", "Scanned"),
            WorkflowKind::Collection => ("Collected Kegs", "Collected"),
        };
        let list = Column::with_children(records.iter().map(|record| {
            components::list_row(
                format!("Keg #{}", record.code),
                format!("{} at {}", verb, record.timestamp()),
                Some(text("✓").color(SUCCESS).into()),
            )
        }));

        content = content
            .push(components::section_title(heading))
            .push(components::muted_text(format!("{} total", records.len())))
            .push(components::card_container(list));
    }

    scrollable(content.padding(16)).into()
}

fn view_picker(workflow: &FieldWorkflow) -> Element<'_, Message> {
    let kind = workflow.kind();
    let items = workflow.outlets().iter().map(|outlet| {
        button(
            column![
                text(&outlet.name).size(15),
                components::muted_text(&outlet.address),
                text(outlet_detail(kind, outlet)).size(12).color(MUTED),
            ]
            .spacing(2),
        )
        .on_press(Message::OutletPicked(kind, outlet.id.clone()))
        .style(button::text)
        .width(Fill)
        .padding(8)
        .into()
    });

    components::card_container(Column::with_children(items).spacing(4)).into()
}

fn view_confirmation(request: &FinishRequest) -> Element<'_, Message> {
    components::card_container(
        column![
            text("Confirm Collection").size(18),
            text(format!(
                "Confirm collection of {} from {}?",
                feedback::kegs(request.count),
                request.outlet_name
            ))
            .size(14),
            row![
                button("Cancel")
                    .on_press(Message::CancelCollection)
                    .style(button::secondary)
                    .padding([8, 16]),
                button("Confirm")
                    .on_press(Message::ConfirmCollection)
                    .style(button::success)
                    .padding([8, 16]),
            ]
            .spacing(10),
        ]
        .spacing(10),
    )
    .into()
}

/// Scanner panel. Typed codes stand in for camera decodes.
pub fn scanner<'a>(workflow: &'a FieldWorkflow, input: &'a str) -> Element<'a, Message> {
    let kind = workflow.kind();
    let outlet = workflow.selected().map_or("", |o| o.name.as_str());
    let hint = match kind {
        WorkflowKind::Assignment => format!("Assigned to: {}", outlet),
        WorkflowKind::Collection => match workflow.progress() {
            Some(progress) => format!("Scan kegs from {} (progress: {})", outlet, progress),
            None => format!("Scan kegs from {}", outlet),
        },
    };

    column![
        row![
            text("Scan Keg QR Code").size(22).width(Fill),
            button("Close")
                .on_press(Message::CancelScan(kind))
                .style(button::secondary)
                .padding([6, 12]),
        ]
        .align_y(iced::Alignment::Center),
        components::muted_text("Enter or scan the code printed on the keg"),
        text_input("KEG001", input)
            .on_input(Message::ScanInputChanged)
            .on_submit(Message::SubmitScan(kind))
            .padding(12)
            .size(18),
        button(text("Submit").width(Fill))
            .on_press(Message::SubmitScan(kind))
            .width(Fill)
            .padding(12),
        components::muted_text(hint),
    ]
    .spacing(14)
    .padding(16)
    .into()
}
