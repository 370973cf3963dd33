use crate::ui::{self, dashboard_view, feedback, login_view, profile_view, workflow_view};
use chrono::Local;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Fill, Task};
use kegtrack::domain::{DriverProfile, SupportContact};
use kegtrack::services::{ActivityLog, DashboardSummary};
use kegtrack::{
    FinishRequest, KegTrackConfig, ManualScanner, OutletId, Phase, StaticDirectory, Workflow,
    WorkflowError, WorkflowKind,
};
use std::time::Duration;

const BANNER_TIMEOUT: Duration = Duration::from_secs(4);

pub type FieldWorkflow = Workflow<StaticDirectory, ManualScanner>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Assign,
    Collect,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Assign, Tab::Collect, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Assign => "Assign Kegs",
            Tab::Collect => "Collect",
            Tab::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SignIn,
    RequestLogout,
    ConfirmLogout,
    CancelLogout,
    ToggleHelp,
    TabSelected(Tab),
    OpenPicker(WorkflowKind),
    ClosePicker,
    OutletPicked(WorkflowKind, OutletId),
    StartScan(WorkflowKind),
    CancelScan(WorkflowKind),
    ScanInputChanged(String),
    SubmitScan(WorkflowKind),
    FinishCollection,
    ConfirmCollection,
    CancelCollection,
    DismissBanner,
    BannerExpired(u64),
}

#[derive(Debug, Clone)]
pub struct Banner {
    id: u64,
    pub title: String,
    pub body: String,
    pub success: bool,
}

/// Everything loaded before the window opens.
#[derive(Clone)]
pub struct Bootstrap {
    config: KegTrackConfig,
    assignment: StaticDirectory,
    collection: StaticDirectory,
}

impl Bootstrap {
    pub fn load(config: KegTrackConfig) -> kegtrack::Result<Self> {
        let assignment = StaticDirectory::load_or(
            config.directory.assignment_path.as_deref(),
            StaticDirectory::assignment_demo,
        )?;
        let collection = StaticDirectory::load_or(
            config.directory.collection_path.as_deref(),
            StaticDirectory::collection_demo,
        )?;
        Ok(Self {
            config,
            assignment,
            collection,
        })
    }
}

pub struct State {
    signed_in: bool,
    tab: Tab,
    assign: FieldWorkflow,
    collect: FieldWorkflow,
    picker: Option<WorkflowKind>,
    scan_input: String,
    pending_finish: Option<FinishRequest>,
    banner: Option<Banner>,
    next_banner: u64,
    activity: ActivityLog,
    profile: DriverProfile,
    support: SupportContact,
    show_help: bool,
    confirm_logout: bool,
}

impl State {
    pub fn new(bootstrap: Bootstrap) -> Self {
        let Bootstrap {
            config,
            assignment,
            collection,
        } = bootstrap;

        Self {
            signed_in: false,
            tab: Tab::Dashboard,
            assign: Workflow::assignment(assignment, ManualScanner::new())
                .with_reselect_policy(config.assignment.reselect),
            collect: Workflow::collection(collection, ManualScanner::new()),
            picker: None,
            scan_input: String::new(),
            pending_finish: None,
            banner: None,
            next_banner: 0,
            activity: ActivityLog::with_capacity(config.activity.capacity),
            profile: config.driver,
            support: config.support,
            show_help: false,
            confirm_logout: false,
        }
    }

    fn workflow(&self, kind: WorkflowKind) -> &FieldWorkflow {
        match kind {
            WorkflowKind::Assignment => &self.assign,
            WorkflowKind::Collection => &self.collect,
        }
    }

    fn workflow_mut(&mut self, kind: WorkflowKind) -> &mut FieldWorkflow {
        match kind {
            WorkflowKind::Assignment => &mut self.assign,
            WorkflowKind::Collection => &mut self.collect,
        }
    }

    fn show(&mut self, (title, body): (String, String), success: bool) -> Task<Message> {
        self.next_banner += 1;
        let id = self.next_banner;
        self.banner = Some(Banner {
            id,
            title,
            body,
            success,
        });
        Task::perform(tokio::time::sleep(BANNER_TIMEOUT), move |_| {
            Message::BannerExpired(id)
        })
    }

    fn show_error(&mut self, kind: WorkflowKind, error: &WorkflowError) -> Task<Message> {
        let outlet = self.workflow(kind).selected().map(|o| o.name.clone());
        let described = match error.notification() {
            Some(note) => feedback::describe(kind, &note, outlet.as_deref()),
            None => feedback::describe_error(error),
        };
        self.show(described, false)
    }
}

pub fn boot(bootstrap: Bootstrap) -> (State, Task<Message>) {
    (State::new(bootstrap), Task::none())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::SignIn => {
            state.signed_in = true;
            state.tab = Tab::Dashboard;
            tracing::info!(driver = %state.profile.employee_id, "Signed in");
            Task::none()
        }
        Message::RequestLogout => {
            state.confirm_logout = true;
            Task::none()
        }
        Message::CancelLogout => {
            state.confirm_logout = false;
            Task::none()
        }
        Message::ConfirmLogout => {
            state.confirm_logout = false;
            state.signed_in = false;
            state.assign.reset();
            state.collect.reset();
            state.picker = None;
            state.pending_finish = None;
            state.scan_input.clear();
            state.banner = None;
            tracing::info!("Signed out");
            Task::none()
        }
        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            Task::none()
        }
        Message::TabSelected(tab) => {
            state.tab = tab;
            state.picker = None;
            Task::none()
        }
        Message::OpenPicker(kind) => {
            state.picker = Some(kind);
            Task::none()
        }
        Message::ClosePicker => {
            state.picker = None;
            Task::none()
        }
        Message::OutletPicked(kind, id) => {
            state.picker = None;
            let result = state.workflow_mut(kind).select_outlet(&id).map(|_| ());
            match result {
                Ok(()) => Task::none(),
                Err(e) => state.show_error(kind, &e),
            }
        }
        Message::StartScan(kind) => match state.workflow_mut(kind).begin_scan() {
            Ok(()) => {
                state.scan_input.clear();
                Task::none()
            }
            Err(e) => state.show_error(kind, &e),
        },
        Message::CancelScan(kind) => {
            state.workflow_mut(kind).cancel_scan();
            state.scan_input.clear();
            Task::none()
        }
        Message::ScanInputChanged(value) => {
            state.scan_input = value;
            Task::none()
        }
        Message::SubmitScan(kind) => {
            let raw = std::mem::take(&mut state.scan_input);
            let raw = raw.trim();
            if raw.is_empty() {
                return Task::none();
            }

            let result = state.workflow_mut(kind).submit_scan(raw);
            match result {
                Ok(outcome) => {
                    let workflow = state.workflow(kind);
                    let note = workflow.notification(&outcome);
                    let outlet = workflow.selected().map(|o| o.name.clone());
                    state.activity.record(kind, &note, Local::now());
                    let success = note.is_success();
                    state.show(feedback::describe(kind, &note, outlet.as_deref()), success)
                }
                Err(e) => state.show_error(kind, &e),
            }
        }
        Message::FinishCollection => match state.collect.request_finish() {
            Ok(request) => {
                state.pending_finish = Some(request);
                Task::none()
            }
            Err(e) => state.show_error(WorkflowKind::Collection, &e),
        },
        Message::ConfirmCollection => {
            state.pending_finish = None;
            match state.collect.confirm_finish() {
                Ok(note) => {
                    state
                        .activity
                        .record(WorkflowKind::Collection, &note, Local::now());
                    state.show(
                        feedback::describe(WorkflowKind::Collection, &note, None),
                        true,
                    )
                }
                Err(e) => state.show_error(WorkflowKind::Collection, &e),
            }
        }
        Message::CancelCollection => {
            state.pending_finish = None;
            state.collect.cancel_finish();
            Task::none()
        }
        Message::DismissBanner => {
            state.banner = None;
            Task::none()
        }
        Message::BannerExpired(id) => {
            if state.banner.as_ref().is_some_and(|b| b.id == id) {
                state.banner = None;
            }
            Task::none()
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    if !state.signed_in {
        return login_view::view();
    }

    let screen: Element<'_, Message> = match state.tab {
        Tab::Dashboard => {
            let summary = DashboardSummary::compute(
                state.assign.directory(),
                state.collect.directory(),
                &state.activity,
                Local::now(),
            );
            dashboard_view::view(&state.profile, summary, &state.activity)
        }
        Tab::Assign | Tab::Collect => {
            let kind = if state.tab == Tab::Assign {
                WorkflowKind::Assignment
            } else {
                WorkflowKind::Collection
            };
            let workflow = state.workflow(kind);
            if workflow.phase() == Phase::Scanning {
                workflow_view::scanner(workflow, &state.scan_input)
            } else {
                workflow_view::view(
                    workflow,
                    state.picker == Some(kind),
                    state.pending_finish.as_ref(),
                )
            }
        }
        Tab::Profile => profile_view::view(
            &state.profile,
            &state.support,
            state.show_help,
            state.confirm_logout,
        ),
    };

    let mut content = column![].spacing(0);
    if let Some(banner) = &state.banner {
        content = content.push(view_banner(banner));
    }

    content
        .push(container(screen).width(Fill).height(Fill))
        .push(view_tab_bar(state.tab))
        .into()
}

fn view_banner(banner: &Banner) -> Element<'_, Message> {
    let success = banner.success;
    container(
        row![
            column![
                text(&banner.title).size(16),
                text(&banner.body).size(14)
            ]
            .spacing(4)
            .width(Fill),
            button("OK").on_press(Message::DismissBanner).padding([6, 12]),
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center),
    )
    .padding(12)
    .width(Fill)
    .style(move |_| ui::banner_style(success))
    .into()
}

fn view_tab_bar(active: Tab) -> Element<'static, Message> {
    let mut bar = row![].spacing(4).padding(8);
    for tab in Tab::ALL {
        let label = text(tab.label()).size(13);
        let tab_button = button(label)
            .width(Fill)
            .padding([10, 4])
            .on_press(Message::TabSelected(tab))
            .style(if tab == active {
                button::primary
            } else {
                button::text
            });
        bar = bar.push(tab_button);
    }

    container(bar)
        .width(Fill)
        .style(|theme| ui::card_style(theme, ui::SURFACE, ui::BORDER))
        .into()
}
